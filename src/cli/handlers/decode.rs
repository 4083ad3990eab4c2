use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_alphabet, write_output},
    global::GlobalArgs,
};
use base_85::{ADOBE_PREFIX, ADOBE_SUFFIX, AlphabetRegistry};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global)?;
    let text =
        String::from_utf8(input).map_err(|_| "Input data is not valid UTF-8 text for decoding")?;
    let alphabet = resolve_alphabet(config, args.alphabet.as_deref())?;

    let mut options = config.settings.decode_options();
    if args.adobe {
        options = options.prefix(ADOBE_PREFIX).suffix(ADOBE_SUFFIX);
    }
    if let Some(prefix) = args.prefix {
        options = options.prefix(prefix);
    }
    if let Some(suffix) = args.suffix {
        options = options.suffix(suffix);
    }
    if args.keep_whitespace {
        options = options.strip_whitespace(false);
    }

    // The trailing newline of piped input is never payload
    let data = base_85::decode_with(text.trim_end_matches(['\r', '\n']), &alphabet, &options)?;
    write_output(args.output.as_ref(), &data)
}
