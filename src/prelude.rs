//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in base-85.
//!
//! # Example
//!
//! ```
//! use base_85::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let alphabet = registry.alphabet("rfc1924").unwrap();
//! let encoded = encode(b"hello", &alphabet);
//! assert_eq!(decode(&encoded, &alphabet).unwrap(), b"hello");
//! ```

pub use crate::{
    // Alphabets and config
    Alphabet,
    AlphabetRegistry,
    DecodeError,
    DecodeOptions,
    EncodeOptions,
    FixedWidthError,
    // Convenience functions
    adobe_decode,
    adobe_encode,
    b85decode,
    b85encode,
    // Core encoding/decoding
    decode,
    decode_with,
    encode,
    encode_with,
    // 128-bit values
    ipv6_decode,
    ipv6_encode,
    // Random generation
    random_bytes,
    rfc1924_decode,
    rfc1924_encode,
};
