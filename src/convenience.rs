//! Convenience functions for the common Base85 flavors.
//!
//! These pick the alphabet and delimiters so callers don't have to.

use crate::core::alphabet::{ASCII85, RFC1924};
use crate::encoders::algorithms::stream::{
    DecodeError, DecodeOptions, EncodeOptions, decode, decode_with, encode, encode_with,
};

/// Ascii85-encodes bytes (no delimiters, `z` for zero groups).
///
/// # Example
/// ```
/// use base_85::convenience::b85encode;
///
/// assert_eq!(b85encode(b"Man "), "9jqo^");
/// ```
pub fn b85encode(data: &[u8]) -> String {
    encode(data, &ASCII85)
}

/// Decodes Ascii85 text, ignoring whitespace.
pub fn b85decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode(encoded, &ASCII85)
}

/// Ascii85-encodes bytes wrapped in Adobe's `<~` and `~>`.
///
/// # Example
/// ```
/// use base_85::convenience::{adobe_decode, adobe_encode};
///
/// let encoded = adobe_encode(b"Man ");
/// assert_eq!(encoded, "<~9jqo^~>");
/// assert_eq!(adobe_decode(&encoded).unwrap(), b"Man ");
/// ```
pub fn adobe_encode(data: &[u8]) -> String {
    encode_with(data, &ASCII85, &EncodeOptions::adobe())
}

/// Decodes Ascii85 text, stripping `<~` and `~>` when present.
pub fn adobe_decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(encoded, &ASCII85, &DecodeOptions::adobe())
}

/// Base85-encodes bytes with the RFC 1924 alphabet, the flavor Mercurial
/// and git use for binary diffs.
pub fn rfc1924_encode(data: &[u8]) -> String {
    encode(data, &RFC1924)
}

/// Decodes RFC 1924 Base85 text.
pub fn rfc1924_decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode(encoded, &RFC1924)
}
