use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::alphabet::{Alphabet, BASE};
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, find_closest_alphabet};
use crate::encoders::algorithms::stream::{DecodeOptions, EncodeOptions};

/// Name used when neither the caller nor the settings pick an alphabet.
pub const DEFAULT_ALPHABET: &str = "ascii85";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 85 digit characters in ordinal order (explicit list)
    #[serde(default)]
    pub chars: String,
    /// First character of a consecutive ASCII range
    /// Use with `length` instead of `chars`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Number of characters in the range starting at `start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Single character that stands for an all-zero group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_marker: Option<String>,
    /// Human-readable description shown by `base-85 alphabets`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective character set, generating from range if needed.
    ///
    /// Explicit `chars` win over `start` + `length`.
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;
            return Self::generate_range(start_char, length);
        }

        Err("alphabet needs either `chars` or `start` + `length`".to_string())
    }

    /// Generate a run of consecutive printable ASCII characters.
    fn generate_range(start: char, length: usize) -> Result<String, String> {
        if length == 0 {
            return Err("length must be greater than 0".to_string());
        }
        if !start.is_ascii_graphic() {
            return Err(format!("range start {:?} is not printable ASCII", start));
        }

        let first = start as u32;
        let last = u32::try_from(length - 1)
            .ok()
            .and_then(|span| first.checked_add(span))
            .filter(|&last| last <= u32::from(b'~'))
            .ok_or_else(|| {
                format!(
                    "range {:?}..+{} runs past the printable ASCII range",
                    start, length
                )
            })?;

        Ok((first..=last).filter_map(char::from_u32).collect())
    }

    /// Parses the optional zero marker.
    pub fn effective_zero_marker(&self) -> Result<Option<char>, String> {
        match self.zero_marker.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Some(c)),
                    _ => Err(format!("zero_marker must be a single character, got {:?}", s)),
                }
            }
        }
    }

    /// Builds and validates the alphabet this entry describes.
    pub fn build(&self) -> Result<Alphabet, String> {
        let chars = self.effective_chars()?;
        if chars.chars().count() != BASE {
            return Err(format!(
                "alphabet defines {} characters, Base85 needs {}",
                chars.chars().count(),
                BASE
            ));
        }
        Alphabet::new(&chars, self.effective_zero_marker()?)
    }
}

/// Global settings for base-85.
///
/// Fields left unset fall back to the codec defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is given on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Prefix written on encode and stripped on decode
    #[serde(default)]
    pub prefix: Option<String>,
    /// Suffix written on encode and stripped on decode
    #[serde(default)]
    pub suffix: Option<String>,
    /// Keep padding characters of the final group
    #[serde(default)]
    pub include_padding: Option<bool>,
    /// Ignore whitespace when decoding
    #[serde(default)]
    pub strip_whitespace: Option<bool>,
}

impl Settings {
    /// Overrides every field that `other` sets.
    pub fn merge(&mut self, other: Settings) {
        if other.default_alphabet.is_some() {
            self.default_alphabet = other.default_alphabet;
        }
        if other.prefix.is_some() {
            self.prefix = other.prefix;
        }
        if other.suffix.is_some() {
            self.suffix = other.suffix;
        }
        if other.include_padding.is_some() {
            self.include_padding = other.include_padding;
        }
        if other.strip_whitespace.is_some() {
            self.strip_whitespace = other.strip_whitespace;
        }
    }

    /// Encode options described by these settings.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::new()
            .prefix(self.prefix.clone().unwrap_or_default())
            .suffix(self.suffix.clone().unwrap_or_default())
            .include_padding(self.include_padding.unwrap_or(false))
    }

    /// Decode options described by these settings.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::new()
            .prefix(self.prefix.clone().unwrap_or_default())
            .suffix(self.suffix.clone().unwrap_or_default())
            .strip_whitespace(self.strip_whitespace.unwrap_or(true))
    }
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base-85/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-85").join("alphabets.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("alphabets.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace alphabets with the same name, and any
    /// setting `other` defines wins.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        self.settings.merge(other.settings);
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// The configured default alphabet name.
    pub fn default_alphabet_name(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET)
    }

    /// Builds the named alphabet.
    ///
    /// Unknown names produce an [`AlphabetNotFoundError`] carrying the
    /// closest known name, if any.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, Box<dyn std::error::Error>> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        config
            .build()
            .map_err(|e| format!("Invalid alphabet '{}': {}", name, e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{ASCII85, RFC1924};

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert!(config.alphabets.contains_key("ascii85"));
        assert!(config.alphabets.contains_key("rfc1924"));
        assert!(config.alphabets.contains_key("z85"));
        assert_eq!(config.default_alphabet_name(), "ascii85");
    }

    #[test]
    fn test_builtin_entries_match_static_tables() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.alphabet("ascii85").unwrap(), ASCII85);
        assert_eq!(config.alphabet("rfc1924").unwrap(), RFC1924);
    }

    #[test]
    fn test_every_builtin_builds() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in config.names() {
            assert!(config.alphabet(&name).is_ok(), "{} failed to build", name);
        }
    }

    #[test]
    fn test_unknown_alphabet_suggests() {
        let config = AlphabetRegistry::load_default().unwrap();
        let err = config.alphabet("rfc1942").unwrap_err();
        let not_found = err.downcast_ref::<AlphabetNotFoundError>().unwrap();
        assert_eq!(not_found.suggestion.as_deref(), Some("rfc1924"));
    }

    #[test]
    fn test_effective_chars_from_range() {
        let config = AlphabetConfig {
            start: Some("A".to_string()),
            length: Some(4),
            ..Default::default()
        };
        assert_eq!(config.effective_chars().unwrap(), "ABCD");
    }

    #[test]
    fn test_effective_chars_explicit_takes_priority() {
        let config = AlphabetConfig {
            chars: "XYZ".to_string(),
            start: Some("A".to_string()),
            length: Some(4),
            ..Default::default()
        };
        assert_eq!(config.effective_chars().unwrap(), "XYZ");
    }

    #[test]
    fn test_range_past_ascii_fails() {
        let config = AlphabetConfig {
            start: Some("a".to_string()),
            length: Some(85),
            ..Default::default()
        };
        assert!(config.effective_chars().is_err());
        assert!(config.build().is_err());
    }

    #[test]
    fn test_huge_range_length_is_rejected() {
        // Lengths that would overflow or wrap a u32 code point
        for (start, length) in [("~", "4294967295"), ("!", "4294967381")] {
            let toml_content = format!(
                "[alphabets.bad]\nstart = \"{}\"\nlength = {}\n",
                start, length
            );
            let config = AlphabetRegistry::from_toml(&toml_content).unwrap();
            let err = config.alphabet("bad").unwrap_err();
            assert!(err.to_string().contains("printable ASCII"), "{}", err);
        }
    }

    #[test]
    fn test_zero_marker_must_be_single_char() {
        let config = AlphabetConfig {
            zero_marker: Some("zz".to_string()),
            ..Default::default()
        };
        assert!(config.effective_zero_marker().is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = AlphabetRegistry::default();
        config1.alphabets.insert(
            "test1".to_string(),
            AlphabetConfig {
                chars: "ABC".to_string(),
                ..Default::default()
            },
        );

        let mut config2 = AlphabetRegistry::default();
        config2.alphabets.insert(
            "test2".to_string(),
            AlphabetConfig {
                chars: "XYZ".to_string(),
                ..Default::default()
            },
        );
        config2.alphabets.insert(
            "test1".to_string(),
            AlphabetConfig {
                chars: "DEF".to_string(),
                ..Default::default()
            },
        );
        config2.settings.prefix = Some("<~".to_string());

        config1.merge(config2);

        assert_eq!(config1.alphabets.len(), 2);
        assert_eq!(config1.get_alphabet("test1").unwrap().chars, "DEF");
        assert_eq!(config1.get_alphabet("test2").unwrap().chars, "XYZ");
        assert_eq!(config1.settings.prefix.as_deref(), Some("<~"));
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
default_alphabet = "custom"
strip_whitespace = false

[alphabets.custom]
start = "("
length = 85
"#;
        let config = AlphabetRegistry::from_toml(toml_content).unwrap();
        assert_eq!(config.default_alphabet_name(), "custom");
        let alphabet = config.alphabet("custom").unwrap();
        assert_eq!(alphabet.encode_digit(0), b'(');
        assert_eq!(alphabet.zero_marker(), None);
        assert!(!config.settings.decode_options().strip_whitespace);
    }

    #[test]
    fn test_settings_to_options() {
        let settings = Settings {
            prefix: Some("<~".to_string()),
            suffix: Some("~>".to_string()),
            include_padding: Some(true),
            ..Default::default()
        };
        let encode = settings.encode_options();
        assert_eq!(encode.prefix, "<~");
        assert!(encode.include_padding);
        let decode = settings.decode_options();
        assert_eq!(decode.suffix, "~>");
        assert!(decode.strip_whitespace);
    }
}
