//! Base85 encoding and decoding.
//!
//! Two alphabets are built in: Ascii85 (`!` through `u`, with `z` standing
//! for an all-zero group) and RFC 1924. The stream codec turns any byte
//! buffer into text 4 bytes → 5 characters at a time; the fixed-width codec
//! turns one 128-bit value (such as an IPv6 address) into exactly 20 RFC 1924
//! characters.
//!
//! ```
//! use base_85::{Alphabet, decode, encode};
//!
//! let encoded = encode(b"Hello, World!", Alphabet::ascii85());
//! assert_eq!(encoded, "87cURD_*#4DfTZ)+T");
//! assert_eq!(decode(&encoded, Alphabet::ascii85()).unwrap(), b"Hello, World!");
//!
//! let addr: std::net::Ipv6Addr = "1080::8:800:200C:417A".parse().unwrap();
//! assert_eq!(base_85::ipv6_encode_addr(addr), "4)+k&C#VzJ4br>0wv%Yp");
//! ```

mod core;
mod encoders;

pub mod convenience;
pub mod features;
pub mod prelude;

pub use crate::core::alphabet::{ASCII85, Alphabet, BASE, RFC1924};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET, Settings};

pub use crate::encoders::algorithms::{
    AlphabetNotFoundError, DecodeError, FixedWidthError, disable_color, find_closest_alphabet,
};
pub use crate::encoders::block;
pub use crate::encoders::stream::{
    ADOBE_PREFIX, ADOBE_SUFFIX, DecodeOptions, EncodeOptions, decode, decode_with, encode,
    encode_with,
};

pub use convenience::{
    adobe_decode, adobe_encode, b85decode, b85encode, rfc1924_decode, rfc1924_encode,
};

pub use features::random::{
    EntropySource, RandomError, random_bytes, random_hex_string, random_in_range,
    random_uint_string,
};

pub use crate::encoders::fixed128::{
    ENCODED_LEN as IPV6_ENCODED_LEN, decode as ipv6_decode, decode_addr as ipv6_decode_addr,
    encode as ipv6_encode, encode_addr as ipv6_encode_addr, encode_decimal as ipv6_encode_decimal,
    encode_int as ipv6_encode_int,
};
