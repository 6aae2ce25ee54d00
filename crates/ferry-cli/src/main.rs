mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use ferry_core::logger::{ConsoleLogger, Logger, NoopLogger};
use ferry_core::{CopyOptions, OverwritePolicy};

use crate::cli::Cli;

fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Callers pattern-match on the errno-style prefix; print the
            // message bare, without any report decoration.
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = build_options(cli);
    let logger: &dyn Logger = if cli.verbose {
        &ConsoleLogger
    } else {
        &NoopLogger
    };

    let outcome = ferry_core::copy_with_logger(
        Path::new(&cli.source),
        Path::new(&cli.destination),
        &options,
        logger,
    )?;

    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("render outcome as JSON")?;
        println!("{rendered}");
    }
    Ok(())
}

fn build_options(cli: &Cli) -> CopyOptions {
    CopyOptions {
        recursive: cli.recursive,
        overwrite: OverwritePolicy::from_flags(cli.force, cli.no_clobber),
        preserve_times: cli.preserve_times,
        continue_on_error: cli.continue_on_error,
        retries: u32::from(cli.retries),
        dry_run: cli.dry_run,
    }
}
