use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to encode with (default from settings, else ascii85)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Wrap the output in Adobe's <~ and ~>
    #[arg(long, conflicts_with_all = ["prefix", "suffix"])]
    pub adobe: bool,

    /// Text written before the encoded payload
    #[arg(long)]
    pub prefix: Option<String>,

    /// Text written after the encoded payload
    #[arg(long)]
    pub suffix: Option<String>,

    /// Keep the padding characters of the final group
    #[arg(long)]
    pub padding: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Alphabet to decode from (default from settings, else ascii85)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Strip Adobe's <~ and ~> if present
    #[arg(long, conflicts_with_all = ["prefix", "suffix"])]
    pub adobe: bool,

    /// Prefix to strip if present
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix to strip if present
    #[arg(long)]
    pub suffix: Option<String>,

    /// Treat whitespace as an error instead of skipping it
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// IPv6 / 128-bit subcommand actions
#[derive(Subcommand, Debug)]
pub enum Ipv6Action {
    /// Encode an IPv6 address or a decimal integer as 20 RFC 1924 characters
    Encode {
        /// IPv6 address (e.g. 1080::8:800:200C:417A) or decimal integer
        value: String,
    },

    /// Decode 20 RFC 1924 characters
    Decode {
        /// Encoded value
        encoded: String,

        /// Print the decimal integer instead of an IPv6 address
        #[arg(long)]
        integer: bool,
    },
}

/// Random generation subcommand actions
#[derive(Subcommand, Debug)]
pub enum RandomAction {
    /// Random lowercase hex string
    Hex {
        /// Number of hex characters (positive, even)
        #[arg(short, long, default_value = "8")]
        length: usize,
    },

    /// Random unsigned integer rendered in a base
    Uint {
        /// Bit strength (positive multiple of 8)
        #[arg(short, long, default_value = "64")]
        bits: usize,

        /// Output base: 2, 10, 16, 64 or 85
        #[arg(long, default_value = "10")]
        base: u32,
    },

    /// Random integer in [LOW, HIGH)
    Range {
        /// Inclusive lower bound
        low: String,

        /// Exclusive upper bound
        high: String,
    },

    /// Show which random source is in use
    Source,
}

/// Output formats for listing alphabets
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ListFormat {
    /// Aligned table
    #[default]
    Table,
    /// Comma-separated names
    Names,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct AlphabetsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
