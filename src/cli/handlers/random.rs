use crate::cli::{args::RandomAction, global::GlobalArgs};
use base_85::features::random;
use num_bigint::BigUint;

pub fn handle(action: RandomAction, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RandomAction::Hex { length } => {
            println!("{}", random::random_hex_string(length)?);
        }
        RandomAction::Uint { bits, base } => {
            println!("{}", random::random_uint_string(bits, base)?);
        }
        RandomAction::Range { low, high } => {
            let low = parse_bound(&low)?;
            let high = parse_bound(&high)?;
            println!("{}", random::random_in_range(&low, &high)?);
        }
        RandomAction::Source => {
            let source = random::active_source()?;
            if !global.quiet {
                eprintln!("Note: sources are tried in order: os, dev-urandom, thread-rng");
            }
            println!("{}", source);
        }
    }
    Ok(())
}

fn parse_bound(text: &str) -> Result<BigUint, String> {
    text.trim()
        .parse::<BigUint>()
        .map_err(|_| format!("Not a non-negative integer: {:?}", text))
}
