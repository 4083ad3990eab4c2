use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Errors that can occur while decoding Base85 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character above U+00FF
    NonLatin1Character { char: char, position: usize },
    /// A 5-character group contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        chunk: String,
    },
    /// A 5-character group encodes a value above `u32::MAX`
    Overflow { chunk: String, position: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error for the group starting at `position`
    pub fn invalid_character(c: u8, position: usize, chunk: &[u8]) -> Self {
        DecodeError::InvalidCharacter {
            char: char::from(c),
            position,
            chunk: latin1_string(chunk),
        }
    }

    /// Create an Overflow error for the group starting at `position`
    pub fn overflow(chunk: &[u8], position: usize) -> Self {
        DecodeError::Overflow {
            chunk: latin1_string(chunk),
            position,
        }
    }
}

fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::NonLatin1Character { char: c, position } => {
                write_header(
                    f,
                    use_color,
                    &format!("character above U+00FF '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "Base85 text only uses single-byte characters")
            }
            DecodeError::InvalidCharacter {
                char: c,
                position,
                chunk,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("cannot decode chunk {:?} at position {}", chunk, position),
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    &format!("invalid character '{}' is not in the alphabet", c.escape_default()),
                )
            }
            DecodeError::Overflow { chunk, position } => {
                write_header(
                    f,
                    use_color,
                    &format!("cannot decode chunk {:?} at position {}", chunk, position),
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "a group may not encode a value above 2^32 - 1")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors from the fixed-width 128-bit codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedWidthError {
    /// The integer is negative or larger than `u128::MAX`
    OutOfRange { value: String },
    /// The integer text is not a decimal number
    InvalidNumber { input: String },
    /// The encoded text is not exactly 20 characters
    InvalidLength { actual: usize },
    /// The encoded text contains whitespace
    Whitespace { position: usize },
    /// The encoded text contains a character outside RFC 1924
    InvalidCharacter { char: char, position: usize },
    /// The 20 digits encode a value larger than `u128::MAX`
    Overflow { input: String },
}

impl fmt::Display for FixedWidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            FixedWidthError::OutOfRange { value } => write_header(
                f,
                use_color,
                &format!("number is not a 128-bit unsigned integer: {}", value),
            ),
            FixedWidthError::InvalidNumber { input } => write_header(
                f,
                use_color,
                &format!("not a decimal integer: {:?}", input),
            ),
            FixedWidthError::InvalidLength { actual } => {
                write_header(f, use_color, "invalid length for 128-bit value")?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected 20", actual)?;
                writeln!(f)?;
                write_hint(f, use_color, "RFC 1924 values are always exactly 20 characters")
            }
            FixedWidthError::Whitespace { position } => write_header(
                f,
                use_color,
                &format!("whitespace is not allowed in encoded values (position {})", position),
            ),
            FixedWidthError::InvalidCharacter { char: c, position } => write_header(
                f,
                use_color,
                &format!(
                    "invalid character '{}' at position {}",
                    c.escape_default(),
                    position
                ),
            ),
            FixedWidthError::Overflow { input } => write_header(
                f,
                use_color,
                &format!("{:?} decodes to a value larger than 2^128 - 1", input),
            ),
        }
    }
}

impl std::error::Error for FixedWidthError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        writeln!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turns off ANSI colors in error messages for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when an alphabet is not found in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color, &format!("alphabet '{}' not found", self.name))?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base-85 alphabets`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base-85 alphabets` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
