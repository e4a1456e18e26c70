// File: src/bin/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use thesaurus_core::cli::{execute_command, CliArgs, Menu, MenuExit};
use thesaurus_core::ThesaurusEngine;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG wins over -v/-q when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = args.resolve_config().context("could not load configuration")?;
    let mut engine = ThesaurusEngine::from_files_or_new(config);

    let stdout = io::stdout();
    match &args.command {
        Some(command) => {
            let mut out = stdout.lock();
            execute_command(command, &engine, args.format, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdin = io::stdin();
            let exit = Menu::new(&mut engine, stdin.lock(), stdout.lock(), true).run()?;
            if exit == MenuExit::Saved {
                println!(
                    "Saved to '{}' and '{}'.",
                    engine.config().synonym_file.display(),
                    engine.config().history_file.display()
                );
            }
        }
    }

    info!("Session finished");
    Ok(())
}
