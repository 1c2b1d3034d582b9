//! Report output for a finished session.

use anyhow::Result;
use colored::Colorize;
use seedgate_core::AccountReport;
use std::io::{IsTerminal, Write};

use crate::config::ReportFormat;
use crate::controller::Outcome;

pub const WRONG_OTP: &str = "Wrong OTP. Exiting...";
pub const MISSING_SECRET: &str = "No OTP secret key found. Exiting...";

/// Turn colors off when stdout is not a terminal or `NO_COLOR` is set.
pub fn configure_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Write the session outcome in the requested format.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: ReportFormat) -> Result<()> {
    match outcome {
        Outcome::Derived(report) => match format {
            ReportFormat::Human => write_human(out, report)?,
            ReportFormat::Json => write_json(out, report)?,
        },
        Outcome::Rejected => writeln!(out, "{}", WRONG_OTP.red())?,
        Outcome::MissingSecret => writeln!(out, "{}", MISSING_SECRET.red())?,
    }
    out.flush()?;
    Ok(())
}

fn write_human<W: Write>(out: &mut W, report: &AccountReport) -> Result<()> {
    writeln!(out, "{}", "Wallets:".bold())?;
    for wallet in &report.wallets {
        writeln!(out, "  {} {}", format!("#{}", wallet.number).bold(), wallet.address.cyan())?;
        writeln!(out, "     Public Key:  {}", wallet.public_key_hex())?;
        if let Some(key) = wallet.private_key_hex() {
            writeln!(out, "     Private Key: {}", key.as_str().bright_red())?;
        }
    }

    if !report.failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Failures:".bold())?;
        for failure in &report.failures {
            writeln!(
                out,
                "  {} account {} ({}): {}",
                "✗".red(),
                failure.index,
                failure.path,
                failure.error
            )?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &AccountReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
