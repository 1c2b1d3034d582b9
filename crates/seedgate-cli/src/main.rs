//! seedgate: confirm with a one-time code, then derive HD accounts
//!
//! # Usage
//!
//! ```bash
//! seedgate                      # confirm OTP, derive 5 accounts
//! seedgate 10 --show-private    # 10 accounts, private keys included
//! seedgate --no-check --json    # no confirmation, JSON report
//! ```

use anyhow::{Context, Result};
use seedgate_cli::args::{parse_args, print_help};
use seedgate_cli::config::{load_env_file, SessionConfig};
use seedgate_cli::controller::SessionController;
use seedgate_cli::report::{configure_colors, write_outcome};
use seedgate_otp::SystemClock;
use seedgate_prompt::{PromptError, TerminalPrompt};

/// Exit status after Ctrl-C, as a shell would report SIGINT
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    // Security hardening: keep seed material out of core files
    seedgate_core::memory::disable_core_dumps();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        println!("seedgate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    load_env_file(args.env_file.as_deref())?;

    let mut config = SessionConfig::default();
    let ignored = config.apply_env_overrides();
    config.apply_args(&args);
    config
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    for message in &ignored {
        log::warn!("{}", message);
    }
    log::debug!("Loaded {:?}", config);

    configure_colors();
    let format = config.format;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let controller = SessionController::new(config, SystemClock);
    let mut stdout = std::io::stdout();
    let result = rt.block_on(controller.run(&mut TerminalPrompt::default(), &mut stdout));

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) if matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Interrupted)) => {
            log::info!("Interrupted. Exiting...");
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(e) => return Err(e),
    };

    write_outcome(&mut stdout, &outcome, format)?;
    Ok(())
}
