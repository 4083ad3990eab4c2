/// Number of digits in every Base85 alphabet.
pub const BASE: usize = 85;

/// Marker for "no ordinal" in the reverse lookup table.
const NO_ORDINAL: u8 = u8::MAX;

/// A Base85 alphabet: a bijection between the ordinals `0..85` and 85
/// printable ASCII characters.
///
/// Alphabets are plain values. The two built-in alphabets are `static`s
/// built at compile time, so looking them up never allocates and they can be
/// shared freely across threads.
///
/// Besides the digit table an alphabet carries an optional zero-group
/// marker: a single character that stands in for five `0` digits (an
/// all-zero 4-byte block) in encoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: [u8; BASE],
    ords: [u8; 256],
    zero_marker: Option<u8>,
}

/// The Ascii85 alphabet: `!` (0x21) through `u` (0x75), with `z` as the
/// zero-group marker.
pub static ASCII85: Alphabet = Alphabet::from_table(ascii85_table(), Some(b'z'));

/// The RFC 1924 alphabet. It uses `z` as a digit, so it has no zero-group
/// marker.
pub static RFC1924: Alphabet = Alphabet::from_table(rfc1924_table(), None);

const RFC1924_TAIL: &[u8; 23] = b"!#$%&()*+-;<=>?@^_`{|}~";

const fn ascii85_table() -> [u8; BASE] {
    let mut table = [0u8; BASE];
    let mut i = 0;
    while i < BASE {
        table[i] = b'!' + i as u8;
        i += 1;
    }
    table
}

const fn rfc1924_table() -> [u8; BASE] {
    let mut table = [0u8; BASE];
    let mut i = 0;
    while i < 10 {
        table[i] = b'0' + i as u8;
        i += 1;
    }
    while i < 36 {
        table[i] = b'A' + (i - 10) as u8;
        i += 1;
    }
    while i < 62 {
        table[i] = b'a' + (i - 36) as u8;
        i += 1;
    }
    while i < BASE {
        table[i] = RFC1924_TAIL[i - 62];
        i += 1;
    }
    table
}

impl Alphabet {
    /// Builds an alphabet from a digit table at compile time.
    ///
    /// Panics (a compile error in `const` context) on duplicate characters
    /// or when the marker is also a digit.
    pub const fn from_table(chars: [u8; BASE], zero_marker: Option<u8>) -> Self {
        let mut ords = [NO_ORDINAL; 256];
        let mut i = 0;
        while i < BASE {
            let c = chars[i] as usize;
            if ords[c] != NO_ORDINAL {
                panic!("duplicate character in Base85 alphabet");
            }
            ords[c] = i as u8;
            i += 1;
        }
        if let Some(marker) = zero_marker {
            if ords[marker as usize] != NO_ORDINAL {
                panic!("zero-group marker is also an alphabet digit");
            }
        }
        Alphabet {
            chars,
            ords,
            zero_marker,
        }
    }

    /// Creates an alphabet from a string of exactly 85 characters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The string is not exactly 85 characters long
    /// - A character is not printable ASCII (whitespace included)
    /// - A character appears twice
    /// - The zero marker is not printable ASCII or is one of the digits
    pub fn new(chars: &str, zero_marker: Option<char>) -> Result<Self, String> {
        let count = chars.chars().count();
        if count != BASE {
            return Err(format!(
                "Base85 alphabet must have exactly {} characters, got {}",
                BASE, count
            ));
        }

        let mut table = [0u8; BASE];
        let mut ords = [NO_ORDINAL; 256];
        for (i, c) in chars.chars().enumerate() {
            if !c.is_ascii_graphic() {
                return Err(format!(
                    "Alphabet characters must be printable ASCII, got {:?}",
                    c
                ));
            }
            let byte = c as u8;
            if ords[byte as usize] != NO_ORDINAL {
                return Err(format!("Duplicate character in alphabet: {}", c));
            }
            table[i] = byte;
            ords[byte as usize] = i as u8;
        }

        let zero_marker = match zero_marker {
            Some(m) if !m.is_ascii_graphic() => {
                return Err(format!("Zero marker must be printable ASCII, got {:?}", m));
            }
            Some(m) if ords[m as usize] != NO_ORDINAL => {
                return Err(format!("Zero marker '{}' is also an alphabet digit", m));
            }
            Some(m) => Some(m as u8),
            None => None,
        };

        Ok(Alphabet {
            chars: table,
            ords,
            zero_marker,
        })
    }

    /// The built-in Ascii85 alphabet.
    pub fn ascii85() -> &'static Alphabet {
        &ASCII85
    }

    /// The built-in RFC 1924 alphabet.
    pub fn rfc1924() -> &'static Alphabet {
        &RFC1924
    }

    /// Maps an ordinal to its character.
    ///
    /// Ordinals come from base-85 arithmetic, never from input, so an
    /// ordinal of 85 or more is a bug and panics.
    #[inline]
    pub fn encode_digit(&self, digit: u8) -> u8 {
        self.chars[digit as usize]
    }

    /// Maps a character back to its ordinal.
    ///
    /// Returns `None` if the character is not in the alphabet.
    #[inline]
    pub fn decode_char(&self, c: u8) -> Option<u8> {
        match self.ords[c as usize] {
            NO_ORDINAL => None,
            ord => Some(ord),
        }
    }

    /// Returns true if `c` is one of the 85 digits.
    pub fn contains(&self, c: u8) -> bool {
        self.decode_char(c).is_some()
    }

    /// Character used to pad a short trailing group before decoding: the
    /// highest digit.
    pub fn filler(&self) -> u8 {
        self.chars[BASE - 1]
    }

    /// Single-character stand-in for an all-zero group, if this alphabet has one.
    pub fn zero_marker(&self) -> Option<u8> {
        self.zero_marker
    }

    /// Five copies of the zero digit.
    pub fn zero_group(&self) -> [u8; 5] {
        [self.chars[0]; 5]
    }

    /// The digits in ordinal order.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII bytes.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        ASCII85.clone()
    }
}
