//! Command-line arguments, parsed by hand (no clap)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub show_private: bool,
    pub no_check: bool,
    pub json: bool,
    /// First all-digit argument
    pub count: Option<u32>,
    pub env_file: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--show-private" | "-sp" => parsed.show_private = true,
            "--no-check" => parsed.no_check = true,
            "--json" => parsed.json = true,
            "--env-file" => match args.next() {
                Some(path) => parsed.env_file = Some(PathBuf::from(path)),
                None => bail!("--env-file requires a path argument"),
            },
            "--help" | "-h" => parsed.help = true,
            "--version" | "-V" => parsed.version = true,
            other if other.starts_with('-') => bail!("Unknown argument: {}", other),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                if parsed.count.is_none() {
                    parsed.count = Some(
                        digits
                            .parse()
                            .with_context(|| format!("Account count out of range: {}", digits))?,
                    );
                }
            }
            other => log::debug!("Ignoring argument: {}", other),
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        r#"seedgate: OTP-gated HD account derivation

USAGE:
    seedgate [OPTIONS] [COUNT]

ARGS:
    COUNT                   Number of accounts to derive (default: 5)

OPTIONS:
    -sp, --show-private     Include private keys in the report
    --no-check              Skip the OTP confirmation (trusted/automated use)
    --json                  Print the report as JSON
    --env-file <PATH>       Load environment from PATH instead of ./.env
    -h, --help              Show this help message
    -V, --version           Show version

ENVIRONMENT VARIABLES:
    SEED_PHRASE             BIP-39 mnemonic (a new one is generated if unset)
    SECRET_KEY              Base32 OTP shared secret (required unless --no-check)
    SEEDGATE_WORD_COUNT     Words in a generated mnemonic: 12 or 24 (default: 12)
    SEEDGATE_LOG_LEVEL      Log level (error/warn/info/debug/trace, default: warn)

EXAMPLES:
    # Confirm with the current OTP, then derive 5 accounts
    seedgate

    # Derive 10 accounts including private keys, no confirmation
    seedgate 10 --show-private --no-check
"#
    );
}
