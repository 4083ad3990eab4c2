pub mod random;

pub use random::{
    EntropySource, RandomError, active_source, random_bytes, random_hex_string, random_in_range,
    random_uint_string,
};
