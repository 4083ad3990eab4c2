use base_85::{Alphabet, AlphabetRegistry};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::cli::global::GlobalArgs;

/// Loads the registry from `--config` if given, otherwise built-ins plus
/// user and local overrides.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    match global.config_path() {
        Some(path) => {
            let mut registry = AlphabetRegistry::load_default()?;
            let custom = AlphabetRegistry::load_from_file(&path)
                .map_err(|e| format!("Cannot load config {:?}: {}", path, e))?;
            registry.merge(custom);
            Ok(registry)
        }
        None => AlphabetRegistry::load_with_overrides(),
    }
}

/// Builds the requested alphabet, falling back to the configured default.
pub fn resolve_alphabet(
    config: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| config.default_alphabet_name());
    config.alphabet(name)
}

/// Reads the whole input from a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if !global.force {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
                if !global.quiet {
                    eprintln!(
                        "Warning: Processing large file ({} bytes, limit: {} bytes)",
                        file_size, global.max_size
                    );
                }
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force for large inputs.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Writes bytes to a file or stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => io::stdout().write_all(data)?,
    }
    Ok(())
}
