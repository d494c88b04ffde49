use clap::{Arg, ArgGroup, Command};

/// Parse a generator polynomial given in decimal or `0x` hex
pub fn parse_generator(input: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| format!("Invalid generator polynomial: {}", input))
}

/// Parse symbols separated by whitespace or commas
pub fn parse_symbols(text: &str) -> Result<Vec<u16>, String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u16>()
                .map_err(|_| format!("Invalid symbol: {}", token))
        })
        .collect()
}

pub fn build_cli() -> Command {
    Command::new("rsdecode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon syndrome and error-locator decoder")
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("Field order, a power of two")
                .value_name("SIZE")
                .value_parser(clap::value_parser!(usize))
                .default_value("16"),
        )
        .arg(
            Arg::new("data-symbols")
                .short('k')
                .long("data-symbols")
                .help("Payload symbols per codeword")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(usize))
                .default_value("11"),
        )
        .arg(
            Arg::new("generator")
                .short('g')
                .long("generator")
                .help("Field generator polynomial (default: built-in for the field size)")
                .value_name("POLY")
                .value_parser(parse_generator),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Read the received word from a file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("hex")
                .short('x')
                .long("hex")
                .help("Received word as hex bytes")
                .value_name("HEX"),
        )
        .arg(
            Arg::new("symbols")
                .help("Received word symbols, lowest degree first")
                .value_parser(clap::value_parser!(u16))
                .num_args(1..),
        )
        .group(
            ArgGroup::new("word")
                .args(["input", "hex", "symbols"])
                .required(true),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
