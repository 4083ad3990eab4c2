//! Fixed-width RFC 1924 encoding of 128-bit values.
//!
//! A 128-bit value always encodes to exactly 20 digits of the RFC 1924
//! alphabet. There is no grouping, padding, zero compression or delimiter
//! handling, and whitespace is rejected rather than skipped.

use std::net::Ipv6Addr;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::core::alphabet::RFC1924;

pub use super::errors::FixedWidthError;

/// Length of every encoded 128-bit value.
pub const ENCODED_LEN: usize = 20;

/// Encodes a 128-bit value as 20 RFC 1924 digits, most significant first.
pub fn encode(mut value: u128) -> String {
    let mut digits = [0u8; ENCODED_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = RFC1924.encode_digit((value % 85) as u8);
        value /= 85;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}

/// Encodes an arbitrary-precision integer.
///
/// # Errors
///
/// `FixedWidthError::OutOfRange` if the value is negative or above `u128::MAX`.
pub fn encode_int(value: &BigInt) -> Result<String, FixedWidthError> {
    let value = value.to_u128().ok_or_else(|| FixedWidthError::OutOfRange {
        value: value.to_string(),
    })?;
    Ok(encode(value))
}

/// Encodes a decimal integer given as text, such as a command-line argument.
pub fn encode_decimal(text: &str) -> Result<String, FixedWidthError> {
    let value: BigInt = text
        .trim()
        .parse()
        .map_err(|_| FixedWidthError::InvalidNumber {
            input: text.to_string(),
        })?;
    encode_int(&value)
}

/// Encodes an IPv6 address in the RFC 1924 compact form.
pub fn encode_addr(addr: Ipv6Addr) -> String {
    encode(u128::from(addr))
}

/// Decodes 20 RFC 1924 digits into a 128-bit value.
///
/// # Errors
///
/// - `FixedWidthError::InvalidLength` if the text is not 20 characters
/// - `FixedWidthError::Whitespace` if any character is whitespace
/// - `FixedWidthError::InvalidCharacter` if a character is not an RFC 1924 digit
/// - `FixedWidthError::Overflow` if the digits exceed `u128::MAX`
pub fn decode(encoded: &str) -> Result<u128, FixedWidthError> {
    let actual = encoded.chars().count();
    if actual != ENCODED_LEN {
        return Err(FixedWidthError::InvalidLength { actual });
    }

    let mut value = 0u128;
    for (position, c) in encoded.chars().enumerate() {
        if c.is_whitespace() {
            return Err(FixedWidthError::Whitespace { position });
        }
        let digit = u8::try_from(c)
            .ok()
            .and_then(|b| RFC1924.decode_char(b))
            .ok_or(FixedWidthError::InvalidCharacter { char: c, position })?;
        value = value
            .checked_mul(85)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or_else(|| FixedWidthError::Overflow {
                input: encoded.to_string(),
            })?;
    }
    Ok(value)
}

/// Decodes an RFC 1924 compact IPv6 address.
pub fn decode_addr(encoded: &str) -> Result<Ipv6Addr, FixedWidthError> {
    decode(encoded).map(Ipv6Addr::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc1924_example() {
        let addr: Ipv6Addr = "1080::8:800:200C:417A".parse().unwrap();
        assert_eq!(encode_addr(addr), "4)+k&C#VzJ4br>0wv%Yp");
        assert_eq!(decode_addr("4)+k&C#VzJ4br>0wv%Yp").unwrap(), addr);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0), "00000000000000000000");
        assert_eq!(encode(1), "00000000000000000001");
        assert_eq!(encode(1 << 64), "0000000000_sw2=@*|O1");
        assert_eq!(encode(u128::MAX), "=r54lj&NUUO~Hi%c2ym0");
    }

    #[test]
    fn test_roundtrip() {
        for value in [0, 1, 1u128 << 64, u128::MAX, 0xdead_beef_u128 << 77] {
            let encoded = encode(value);
            assert_eq!(encoded.len(), ENCODED_LEN);
            assert_eq!(decode(&encoded), Ok(value));
        }
    }

    #[test]
    fn test_out_of_range() {
        let minus_one = BigInt::from(-1);
        assert!(matches!(
            encode_int(&minus_one),
            Err(FixedWidthError::OutOfRange { .. })
        ));

        let too_big = BigInt::from(u128::MAX) + 1;
        assert_eq!(
            encode_int(&too_big),
            Err(FixedWidthError::OutOfRange {
                value: "340282366920938463463374607431768211456".to_string(),
            })
        );

        assert_eq!(
            encode_int(&BigInt::from(u128::MAX)).unwrap(),
            "=r54lj&NUUO~Hi%c2ym0"
        );
    }

    #[test]
    fn test_encode_decimal() {
        assert_eq!(encode_decimal("1").unwrap(), "00000000000000000001");
        assert!(matches!(
            encode_decimal("-1"),
            Err(FixedWidthError::OutOfRange { .. })
        ));
        assert!(matches!(
            encode_decimal("12ab"),
            Err(FixedWidthError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            decode(&"a".repeat(19)),
            Err(FixedWidthError::InvalidLength { actual: 19 })
        );
        assert_eq!(
            decode(&"a".repeat(21)),
            Err(FixedWidthError::InvalidLength { actual: 21 })
        );
        assert_eq!(decode(""), Err(FixedWidthError::InvalidLength { actual: 0 }));
    }

    #[test]
    fn test_whitespace_rejected() {
        let text = "0000000000 000000001";
        assert_eq!(text.len(), ENCODED_LEN);
        assert_eq!(decode(text), Err(FixedWidthError::Whitespace { position: 10 }));
        assert_eq!(
            decode("000000000000000000\t1"),
            Err(FixedWidthError::Whitespace { position: 18 })
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            decode("0000000000000000000\""),
            Err(FixedWidthError::InvalidCharacter {
                char: '"',
                position: 19,
            })
        );
        assert!(matches!(
            decode("000000000000000000\u{e9}0"),
            Err(FixedWidthError::InvalidCharacter { position: 18, .. })
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            decode("~~~~~~~~~~~~~~~~~~~~"),
            Err(FixedWidthError::Overflow { .. })
        ));
    }
}
