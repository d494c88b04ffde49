//! rsdecode - compute syndromes and the error-locator polynomial of a
//! received Reed-Solomon word

use anyhow::{bail, Context, Result};
use log::warn;
use rsdecode::args::parse_symbols;
use rsdecode::{parse_args, DecodeOutput, Decoder, DecoderConfig};
use std::fs;

fn read_word(matches: &clap::ArgMatches) -> Result<Vec<u16>> {
    if let Some(hex_word) = matches.get_one::<String>("hex") {
        let bytes = hex::decode(hex_word.trim()).context("Failed to decode hex input")?;
        return Ok(bytes.into_iter().map(u16::from).collect());
    }

    if let Some(path) = matches.get_one::<String>("input") {
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        return parse_symbols(&text).map_err(anyhow::Error::msg);
    }

    match matches.get_many::<u16>("symbols") {
        Some(symbols) => Ok(symbols.copied().collect()),
        None => bail!("No received word given"),
    }
}

fn print_output(output: &DecodeOutput) {
    let locator = &output.locator;

    println!("Syndromes: {:?}", output.syndromes.as_slice());
    println!("Error locator: {:?}", locator.coefficients());
    println!(
        "Degree: {} (L = {})",
        locator.error_count(),
        locator.register_length()
    );

    if output.is_error_free() {
        println!("No errors detected");
    } else if output.exceeds_capacity() {
        warn!("Locator is unreliable: too many errors for the check symbols");
        println!("Too many errors to locate");
    } else {
        println!("{} error(s) detected", locator.error_count());
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    let config = DecoderConfig::from_args(&matches).context("Invalid decoder configuration")?;
    let decoder = Decoder::from_config(&config).context("Invalid decoder configuration")?;

    let word = read_word(&matches)?;
    let output = decoder
        .decode(&word)
        .context("Failed to decode received word")?;

    print_output(&output);
    Ok(())
}
