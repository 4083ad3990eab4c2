//! Random bytes, bounded random integers and random strings.
//!
//! Random bytes come from the first available [`EntropySource`] in
//! [`EntropySource::PRIORITY`]. The choice is made once, on first use, and
//! kept for the life of the process.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};

use crate::core::alphabet::ASCII85;
use crate::encoders::algorithms::stream;

const DEV_URANDOM: &str = "/dev/urandom";

/// A provider of random bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// The operating system's random number API, via `getrandom`
    OsRandom,
    /// Reads from `/dev/urandom`
    DevUrandom,
    /// `rand`'s thread-local CSPRNG, seeded from the OS
    ThreadRng,
}

impl EntropySource {
    /// Sources in the order they are tried.
    pub const PRIORITY: [EntropySource; 3] = [
        EntropySource::OsRandom,
        EntropySource::DevUrandom,
        EntropySource::ThreadRng,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntropySource::OsRandom => "os",
            EntropySource::DevUrandom => "dev-urandom",
            EntropySource::ThreadRng => "thread-rng",
        }
    }

    /// Probes whether this source can deliver bytes right now.
    pub fn is_available(&self) -> bool {
        match self {
            EntropySource::OsRandom => getrandom::fill(&mut [0u8; 1]).is_ok(),
            EntropySource::DevUrandom => File::open(DEV_URANDOM).is_ok(),
            EntropySource::ThreadRng => rand::rngs::StdRng::try_from_os_rng().is_ok(),
        }
    }

    /// Fills `buf` with random bytes from this source.
    pub fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        let failed = |message: String| RandomError::SourceFailed {
            source: *self,
            message,
        };

        match self {
            EntropySource::OsRandom => getrandom::fill(buf).map_err(|e| failed(e.to_string())),
            EntropySource::DevUrandom => File::open(DEV_URANDOM)
                .and_then(|mut f| f.read_exact(buf))
                .map_err(|e| failed(e.to_string())),
            EntropySource::ThreadRng => {
                rand::rng().fill_bytes(buf);
                Ok(())
            }
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the first available source among `candidates`.
pub fn select_source(candidates: &[EntropySource]) -> Option<EntropySource> {
    candidates.iter().copied().find(EntropySource::is_available)
}

static ACTIVE_SOURCE: LazyLock<Option<EntropySource>> =
    LazyLock::new(|| select_source(&EntropySource::PRIORITY));

/// The source selected for this process.
pub fn active_source() -> Result<EntropySource, RandomError> {
    (*ACTIVE_SOURCE).ok_or(RandomError::NoEntropySource)
}

/// Errors from random generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// No source in the priority list is available
    NoEntropySource,
    /// The selected source failed while reading
    SourceFailed {
        source: EntropySource,
        message: String,
    },
    /// `low` is not below `high`
    EmptyRange,
    /// Bit strength is zero or not a multiple of 8
    InvalidBitStrength(usize),
    /// Hex length is zero or odd
    InvalidLength(usize),
    /// Base is not one of 2, 10, 16, 64 or 85
    UnsupportedBase(u32),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::NoEntropySource => write!(f, "no random byte source is available"),
            RandomError::SourceFailed { source, message } => {
                write!(f, "random source '{}' failed: {}", source, message)
            }
            RandomError::EmptyRange => write!(f, "high must be greater than low"),
            RandomError::InvalidBitStrength(bits) => write!(
                f,
                "bit strength must be a positive multiple of 8, got {}",
                bits
            ),
            RandomError::InvalidLength(length) => write!(
                f,
                "length must be a positive even number, got {}",
                length
            ),
            RandomError::UnsupportedBase(base) => {
                write!(f, "base must be one of 2, 10, 16, 64, 85, got {}", base)
            }
        }
    }
}

impl std::error::Error for RandomError {}

/// Generates `count` random bytes.
pub fn random_bytes(count: usize) -> Result<Vec<u8>, RandomError> {
    let mut buf = vec![0u8; count];
    active_source()?.fill(&mut buf)?;
    Ok(buf)
}

/// Generates a uniformly random integer in `[low, high)`.
///
/// Draws as many bytes as `high` needs, masks the unused top bits and
/// retries until the value falls in range.
pub fn random_in_range(low: &BigUint, high: &BigUint) -> Result<BigUint, RandomError> {
    if low >= high {
        return Err(RandomError::EmptyRange);
    }

    let num_bits = high.bits();
    let num_bytes = num_bits.div_ceil(8) as usize;
    let last_bits = num_bits % 8;

    loop {
        let mut bytes = random_bytes(num_bytes)?;
        if last_bits != 0 {
            bytes[0] &= (1u8 << last_bits) - 1;
        }
        let value = BigUint::from_bytes_be(&bytes);
        if value >= *low && value < *high {
            return Ok(value);
        }
    }
}

/// Renders `bit_strength` random bits as text in `base`.
///
/// Base 2 is zero-padded to the full bit width; base 10 is the plain
/// decimal value; base 16 is lowercase hex; base 64 is padded standard
/// Base64; base 85 uses the Ascii85 codec.
pub fn random_uint_string(bit_strength: usize, base: u32) -> Result<String, RandomError> {
    if bit_strength == 0 || bit_strength % 8 != 0 {
        return Err(RandomError::InvalidBitStrength(bit_strength));
    }
    if !matches!(base, 2 | 10 | 16 | 64 | 85) {
        return Err(RandomError::UnsupportedBase(base));
    }

    let bytes = random_bytes(bit_strength / 8)?;
    let text: String = match base {
        2 => bytes.iter().map(|b| format!("{:08b}", b)).collect(),
        10 => BigUint::from_bytes_be(&bytes).to_string(),
        16 => hex::encode(&bytes),
        64 => BASE64.encode(&bytes),
        _ => stream::encode(&bytes, &ASCII85),
    };
    Ok(text)
}

/// Generates a random lowercase hex string of an even `length`.
pub fn random_hex_string(length: usize) -> Result<String, RandomError> {
    if length == 0 || length % 2 != 0 {
        return Err(RandomError::InvalidLength(length));
    }
    Ok(hex::encode(random_bytes(length / 2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_some_source_is_available() {
        let source = active_source().unwrap();
        assert!(EntropySource::PRIORITY.contains(&source));
    }

    #[test]
    fn test_select_source_empty_list() {
        assert_eq!(select_source(&[]), None);
    }

    #[test]
    fn test_select_source_respects_order() {
        let only_thread = select_source(&[EntropySource::ThreadRng]);
        assert_eq!(only_thread, Some(EntropySource::ThreadRng));
    }

    #[test]
    fn test_every_available_source_fills() {
        for source in EntropySource::PRIORITY {
            if source.is_available() {
                let mut buf = [0u8; 64];
                source.fill(&mut buf).unwrap();
            }
        }
    }

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(0).unwrap().len(), 0);
        assert_eq!(random_bytes(33).unwrap().len(), 33);
    }

    #[test]
    fn test_random_in_range() {
        let low = BigUint::from(10u32);
        let high = BigUint::from(300u32);
        for _ in 0..200 {
            let value = random_in_range(&low, &high).unwrap();
            assert!(value >= low && value < high);
        }
    }

    #[test]
    fn test_random_in_range_single_value() {
        let low = BigUint::from(7u32);
        let high = BigUint::from(8u32);
        assert_eq!(random_in_range(&low, &high).unwrap(), low);
    }

    #[test]
    fn test_random_in_range_empty() {
        let n = BigUint::from(5u32);
        assert_eq!(random_in_range(&n, &n), Err(RandomError::EmptyRange));
    }

    #[test]
    fn test_random_uint_string_bases() {
        let bin = random_uint_string(16, 2).unwrap();
        assert_eq!(bin.len(), 16);
        assert!(bin.chars().all(|c| c == '0' || c == '1'));

        let dec = random_uint_string(64, 10).unwrap();
        assert!(dec.parse::<u64>().is_ok());

        let hex = random_uint_string(64, 16).unwrap();
        assert_eq!(hex.len(), 16);

        let b64 = random_uint_string(64, 64).unwrap();
        assert_eq!(b64.len(), 12);
        assert!(b64.ends_with('='));
        assert_eq!(BASE64.decode(&b64).unwrap().len(), 8);

        let b85 = random_uint_string(128, 85).unwrap();
        let decoded = stream::decode(&b85, &ASCII85).unwrap();
        assert_eq!(decoded.len(), 16);
    }

    #[test]
    fn test_random_uint_string_rejects_bad_input() {
        assert_eq!(
            random_uint_string(0, 10),
            Err(RandomError::InvalidBitStrength(0))
        );
        assert_eq!(
            random_uint_string(12, 10),
            Err(RandomError::InvalidBitStrength(12))
        );
        assert_eq!(
            random_uint_string(64, 32),
            Err(RandomError::UnsupportedBase(32))
        );
    }

    #[test]
    fn test_random_hex_string() {
        let s = random_hex_string(8).unwrap();
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(random_hex_string(7), Err(RandomError::InvalidLength(7)));
        assert_eq!(random_hex_string(0), Err(RandomError::InvalidLength(0)));
    }
}
