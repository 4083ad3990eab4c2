//! One Base85 group: 4 bytes, one big-endian `u32`, 5 digits.

use crate::core::alphabet::Alphabet;

pub use super::errors::DecodeError;

/// Raw bytes per group.
pub const BYTES_PER_GROUP: usize = 4;
/// Encoded characters per group.
pub const CHARS_PER_GROUP: usize = 5;

/// Place values of the five digits, most significant first.
const POWERS: [u32; CHARS_PER_GROUP] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Interprets 4 bytes as a big-endian word.
#[inline]
pub fn pack(bytes: [u8; BYTES_PER_GROUP]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Splits a word into five base-85 digits and maps them through `alphabet`.
#[inline]
pub fn unpack(word: u32, alphabet: &Alphabet) -> [u8; CHARS_PER_GROUP] {
    let mut out = [0u8; CHARS_PER_GROUP];
    for (slot, power) in out.iter_mut().zip(POWERS) {
        *slot = alphabet.encode_digit(((word / power) % 85) as u8);
    }
    out
}

/// Reads five characters back into a word.
///
/// `position` is the offset of the group in the caller's text and is only
/// used for error reporting.
///
/// # Errors
///
/// - `DecodeError::InvalidCharacter` if a character is not in `alphabet`
/// - `DecodeError::Overflow` if the digits exceed `u32::MAX`
pub fn parse(
    group: &[u8; CHARS_PER_GROUP],
    position: usize,
    alphabet: &Alphabet,
) -> Result<u32, DecodeError> {
    let mut value = 0u64;
    for &c in group {
        let digit = alphabet
            .decode_char(c)
            .ok_or_else(|| DecodeError::invalid_character(c, position, group))?;
        value = value * 85 + u64::from(digit);
    }
    u32::try_from(value).map_err(|_| DecodeError::overflow(group, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{ASCII85, RFC1924};

    #[test]
    fn test_pack_is_big_endian() {
        assert_eq!(pack([0x4d, 0x61, 0x6e, 0x20]), 0x4d616e20);
        assert_eq!(pack([0, 0, 0, 1]), 1);
    }

    #[test]
    fn test_unpack_known_group() {
        // "Man " from the Ascii85 article
        assert_eq!(&unpack(pack(*b"Man "), &ASCII85), b"9jqo^");
        assert_eq!(&unpack(0, &ASCII85), b"!!!!!");
        assert_eq!(&unpack(u32::MAX, &ASCII85), b"s8W-!");
        assert_eq!(&unpack(0, &RFC1924), b"00000");
    }

    #[test]
    fn test_parse_known_group() {
        assert_eq!(parse(b"9jqo^", 0, &ASCII85), Ok(0x4d616e20));
        assert_eq!(parse(b"s8W-!", 0, &ASCII85), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = parse(b"ab|cd", 10, &ASCII85).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                char: '|',
                position: 10,
                chunk: "ab|cd".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_overflow() {
        // One past u32::MAX
        assert!(matches!(
            parse(b"s8W-\"", 0, &ASCII85),
            Err(DecodeError::Overflow { .. })
        ));
        assert!(matches!(
            parse(b"uuuuu", 5, &ASCII85),
            Err(DecodeError::Overflow { position: 5, .. })
        ));
        assert!(matches!(
            parse(b"~~~~~", 0, &RFC1924),
            Err(DecodeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_unpack_parse_agree() {
        for word in [0, 1, 84, 85, 7224, 52_200_624, 0xdeadbeef, u32::MAX] {
            for alphabet in [&ASCII85, &RFC1924] {
                let group = unpack(word, alphabet);
                assert_eq!(parse(&group, 0, alphabet), Ok(word));
            }
        }
    }
}
