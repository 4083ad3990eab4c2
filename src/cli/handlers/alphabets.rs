use crate::cli::args::{AlphabetsArgs, ListFormat};
use base_85::AlphabetRegistry;
use std::collections::BTreeMap;

pub fn handle(
    args: AlphabetsArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();

    if args.json {
        let entries: BTreeMap<&str, _> = names
            .iter()
            .filter_map(|name| config.get_alphabet(name).map(|c| (name.as_str(), c)))
            .collect();
        let output = serde_json::json!({
            "default": config.default_alphabet_name(),
            "alphabets": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match args.format {
        ListFormat::Names => println!("{}", names.join(",")),
        ListFormat::Table => {
            println!("Available alphabets:\n");
            let default = config.default_alphabet_name();
            for name in &names {
                let Some(alphabet_config) = config.get_alphabet(name) else {
                    continue;
                };
                let preview: String = alphabet_config
                    .effective_chars()
                    .unwrap_or_default()
                    .chars()
                    .take(20)
                    .collect();
                let marker = alphabet_config.zero_marker.as_deref().unwrap_or("-");
                let star = if name == default { "*" } else { " " };
                println!(
                    " {}{:<12} zero:{:<2} {}...  {}",
                    star,
                    name,
                    marker,
                    preview,
                    alphabet_config.description.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}
