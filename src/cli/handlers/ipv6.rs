use crate::cli::args::Ipv6Action;
use std::net::Ipv6Addr;

pub fn handle(action: Ipv6Action) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        Ipv6Action::Encode { value } => {
            let encoded = match value.parse::<Ipv6Addr>() {
                Ok(addr) => base_85::ipv6_encode_addr(addr),
                Err(_) => base_85::ipv6_encode_decimal(&value)?,
            };
            println!("{}", encoded);
        }
        Ipv6Action::Decode { encoded, integer } => {
            let value = base_85::ipv6_decode(&encoded)?;
            if integer {
                println!("{}", value);
            } else {
                println!("{}", Ipv6Addr::from(value));
            }
        }
    }
    Ok(())
}
