pub mod block;
pub mod errors;
pub mod fixed128;
pub mod stream;

// Re-export error types for public API
pub use errors::{
    AlphabetNotFoundError, DecodeError, FixedWidthError, disable_color, find_closest_alphabet,
};
