mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};

use args::{AlphabetsArgs, DecodeArgs, EncodeArgs, Ipv6Action, RandomAction};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base-85")]
#[command(version)]
#[command(about = "Base85 encoder and decoder: Ascii85, RFC 1924 and compact IPv6 addresses", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data as Base85 text
    Encode(EncodeArgs),

    /// Decode Base85 text back to binary data
    Decode(DecodeArgs),

    /// Encode or decode 128-bit values and IPv6 addresses (RFC 1924)
    Ipv6 {
        #[command(subcommand)]
        action: Ipv6Action,
    },

    /// Generate random values
    Random {
        #[command(subcommand)]
        action: RandomAction,
    },

    /// List available alphabets
    Alphabets(AlphabetsArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        base_85::disable_color();
    }

    match cli.command {
        Commands::Encode(args) => {
            let config = config::load_registry(&cli.global)?;
            handlers::encode::handle(args, &cli.global, &config)
        }
        Commands::Decode(args) => {
            let config = config::load_registry(&cli.global)?;
            handlers::decode::handle(args, &cli.global, &config)
        }
        Commands::Ipv6 { action } => handlers::ipv6::handle(action),
        Commands::Random { action } => handlers::random::handle(action, &cli.global),
        Commands::Alphabets(args) => {
            let config = config::load_registry(&cli.global)?;
            handlers::alphabets::handle(args, &config)
        }
    }
}
