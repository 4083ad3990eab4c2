use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_alphabet, write_output},
    global::GlobalArgs,
};
use base_85::{ADOBE_PREFIX, ADOBE_SUFFIX, AlphabetRegistry};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global)?;
    let alphabet = resolve_alphabet(config, args.alphabet.as_deref())?;

    // Command-line flags override the [settings] table
    let mut options = config.settings.encode_options();
    if args.adobe {
        options = options.prefix(ADOBE_PREFIX).suffix(ADOBE_SUFFIX);
    }
    if let Some(prefix) = args.prefix {
        options = options.prefix(prefix);
    }
    if let Some(suffix) = args.suffix {
        options = options.suffix(suffix);
    }
    if args.padding {
        options = options.include_padding(true);
    }

    let encoded = base_85::encode_with(&data, &alphabet, &options);

    match &args.output {
        Some(_) => write_output(args.output.as_ref(), encoded.as_bytes()),
        None => {
            println!("{}", encoded);
            Ok(())
        }
    }
}
