use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use bt_core::config::{ConvertConfig, load_config};
use bt_core::error::ConvertError;
use clap::Parser;

pub mod banner;
pub mod cli;
pub mod convert;
pub mod output;
pub mod playback;

use crate::playback::PlaybackOutcome;

/// Config lue implicitement quand `--config` est absent.
const DEFAULT_CONFIG: &str = "braillert.toml";

fn main() -> ExitCode {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    let level = if cli.disable_logging {
        log::LevelFilter::Error
    } else {
        cli.log_level.parse().unwrap_or(log::LevelFilter::Info)
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if !cli.disable_logging {
        banner::print_banner();
    }

    // 3. Convertir et livrer
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let request = cli.request(config);
    let conversion = convert::convert(&request)?;

    let stop = Arc::new(AtomicBool::new(false));
    if request.config.animated {
        let flag = Arc::clone(&stop);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
    }

    let mut stdout = std::io::stdout().lock();
    match convert::deliver(&conversion, &request, &stop, &mut stdout)? {
        PlaybackOutcome::Finished => Ok(()),
        PlaybackOutcome::Interrupted => Err(ConvertError::Interrupted.into()),
    }
}

fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if let Some(ref path) = cli.config {
        return load_config(path);
    }
    let default = Path::new(DEFAULT_CONFIG);
    if default.exists() {
        load_config(default)
    } else {
        log::debug!("Pas de {DEFAULT_CONFIG}, utilisation des défauts.");
        Ok(ConvertConfig::default())
    }
}

/// One log line per failure; an interrupt is a clean exit.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ConvertError>() {
        Some(e) if e.is_interrupt() => {
            log::debug!("Lecture interrompue.");
            ExitCode::SUCCESS
        }
        Some(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
        None => {
            log::error!("Error! Unexpected exception caught: {err:#}");
            ExitCode::FAILURE
        }
    }
}
