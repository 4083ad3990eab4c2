use crate::core::alphabet::Alphabet;

use super::block::{self, BYTES_PER_GROUP, CHARS_PER_GROUP};
pub use super::errors::DecodeError;

/// Prefix Adobe uses to open an Ascii85 stream.
pub const ADOBE_PREFIX: &str = "<~";
/// Suffix Adobe uses to close an Ascii85 stream.
pub const ADOBE_SUFFIX: &str = "~>";

/// Options for [`encode_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Literal text written before the payload
    pub prefix: String,
    /// Literal text written after the payload
    pub suffix: String,
    /// Keep the characters produced by zero padding of the last group
    pub include_padding: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that wrap the payload in `<~` and `~>`.
    pub fn adobe() -> Self {
        Self::new().prefix(ADOBE_PREFIX).suffix(ADOBE_SUFFIX)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn include_padding(mut self, include: bool) -> Self {
        self.include_padding = include;
        self
    }
}

/// Options for [`decode_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Stripped from the start of the text when present
    pub prefix: String,
    /// Stripped from the end of the text when present
    pub suffix: String,
    /// Remove ASCII whitespace before decoding
    pub strip_whitespace: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            prefix: String::new(),
            suffix: String::new(),
            strip_whitespace: true,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that strip `<~` and `~>`.
    pub fn adobe() -> Self {
        Self::new().prefix(ADOBE_PREFIX).suffix(ADOBE_SUFFIX)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }
}

/// Encodes bytes with default options.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encode_with(data, alphabet, &EncodeOptions::default())
}

/// Encodes bytes as Base85 text.
///
/// The input is zero-padded to a multiple of 4 bytes. Unless
/// `include_padding` is set, as many characters as padding bytes were added
/// are dropped from the end. Every run of five zero digits is then replaced
/// by the alphabet's zero marker (if it has one), and the result is wrapped
/// in the prefix and suffix.
pub fn encode_with(data: &[u8], alphabet: &Alphabet, options: &EncodeOptions) -> String {
    let padding = (BYTES_PER_GROUP - data.len() % BYTES_PER_GROUP) % BYTES_PER_GROUP;

    let groups = data.len().div_ceil(BYTES_PER_GROUP);
    let mut digits = Vec::with_capacity(groups * CHARS_PER_GROUP);

    for chunk in data.chunks(BYTES_PER_GROUP) {
        let mut bytes = [0u8; BYTES_PER_GROUP];
        bytes[..chunk.len()].copy_from_slice(chunk);
        digits.extend_from_slice(&block::unpack(block::pack(bytes), alphabet));
    }

    if padding > 0 && !options.include_padding {
        digits.truncate(digits.len() - padding);
    }

    let body = match alphabet.zero_marker() {
        Some(marker) => compress_zero_groups(&digits, &alphabet.zero_group(), marker),
        None => digits,
    };

    let mut result =
        String::with_capacity(options.prefix.len() + body.len() + options.suffix.len());
    result.push_str(&options.prefix);
    result.extend(body.iter().map(|&b| char::from(b)));
    result.push_str(&options.suffix);
    result
}

/// Decodes text with default options (no delimiters, whitespace ignored).
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    decode_with(encoded, alphabet, &DecodeOptions::default())
}

/// Decodes Base85 text back into bytes.
///
/// Error positions refer to the payload after whitespace removal, delimiter
/// stripping and marker expansion.
///
/// # Errors
///
/// - `DecodeError::NonLatin1Character` if the text has a character above U+00FF
/// - `DecodeError::InvalidCharacter` if a group has a character outside `alphabet`
/// - `DecodeError::Overflow` if a group encodes a value above `u32::MAX`
pub fn decode_with(
    encoded: &str,
    alphabet: &Alphabet,
    options: &DecodeOptions,
) -> Result<Vec<u8>, DecodeError> {
    let mut text = to_latin1(encoded)?;

    if options.strip_whitespace {
        text.retain(|&b| !is_whitespace(b));
    }

    let mut payload: &[u8] = &text;
    if let Some(prefix) = delimiter_bytes(&options.prefix) {
        payload = payload.strip_prefix(prefix.as_slice()).unwrap_or(payload);
    }
    if let Some(suffix) = delimiter_bytes(&options.suffix) {
        payload = payload.strip_suffix(suffix.as_slice()).unwrap_or(payload);
    }

    let mut digits = match alphabet.zero_marker() {
        Some(marker) => expand_zero_groups(payload, marker, &alphabet.zero_group()),
        None => payload.to_vec(),
    };

    let padding = (CHARS_PER_GROUP - digits.len() % CHARS_PER_GROUP) % CHARS_PER_GROUP;
    digits.resize(digits.len() + padding, alphabet.filler());

    let mut result = Vec::with_capacity(digits.len() / CHARS_PER_GROUP * BYTES_PER_GROUP);
    for (i, chunk) in digits.chunks_exact(CHARS_PER_GROUP).enumerate() {
        let mut group = [0u8; CHARS_PER_GROUP];
        group.copy_from_slice(chunk);
        let word = block::parse(&group, i * CHARS_PER_GROUP, alphabet)?;
        result.extend_from_slice(&word.to_be_bytes());
    }

    result.truncate(result.len() - padding);
    Ok(result)
}

/// Whitespace removed by the decoder: space, `\t`, `\n`, `\r`, `\x0b`, `\x0c`.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn to_latin1(text: &str) -> Result<Vec<u8>, DecodeError> {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            u8::try_from(c).map_err(|_| DecodeError::NonLatin1Character { char: c, position })
        })
        .collect()
}

/// Delimiter text as single bytes; `None` for an empty delimiter or one that
/// can never match Latin-1 input.
fn delimiter_bytes(delimiter: &str) -> Option<Vec<u8>> {
    if delimiter.is_empty() {
        return None;
    }
    delimiter.chars().map(|c| u8::try_from(c).ok()).collect()
}

/// Replaces each leftmost non-overlapping `zero_group` with `marker`.
fn compress_zero_groups(digits: &[u8], zero_group: &[u8; CHARS_PER_GROUP], marker: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len());
    let mut i = 0;
    while i < digits.len() {
        if digits[i..].starts_with(zero_group) {
            out.push(marker);
            i += CHARS_PER_GROUP;
        } else {
            out.push(digits[i]);
            i += 1;
        }
    }
    out
}

fn expand_zero_groups(text: &[u8], marker: u8, zero_group: &[u8; CHARS_PER_GROUP]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &c in text {
        if c == marker {
            out.extend_from_slice(zero_group);
        } else {
            out.push(c);
        }
    }
    out
}
