use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use guess_core::{load_settings, secret_source_for, ConfigOverrides};

mod shell;

use shell::{ConsoleShell, HELP};

#[derive(Parser, Debug)]
#[command(about = "Guess the number: terminal game")]
struct Args {
    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Limit used by a bare `start`.
    #[arg(long)]
    limit: Option<u32>,
    /// Seed for reproducible secrets.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&ConfigOverrides {
        config_path: args.config,
        default_limit: args.limit,
        seed: args.seed,
    })
    .context("failed to load settings")?;

    guess_core::telemetry::init(&settings.log_filter);
    tracing::info!(
        default_limit = settings.default_limit,
        seeded = settings.seed.is_some(),
        "starting console"
    );

    let mut shell = ConsoleShell::new(secret_source_for(settings.seed), settings.default_limit);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();

    if interactive {
        writeln!(out, "{HELP}")?;
    }
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "{}", shell.prompt())?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        if !shell.handle_line(&line, &mut out)? {
            break;
        }
    }

    tracing::info!("console closed");
    Ok(())
}
