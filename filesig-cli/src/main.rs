//! `filesig`: sign files with a WIF private key and verify them against an
//! address.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{KeygenCmd, SignCmd, VerifyCmd};

#[derive(Parser)]
#[command(name = "filesig", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Sign(SignCmd),
    Verify(VerifyCmd),
    Keygen(KeygenCmd),
}

fn setup_tracing(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version requests are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return Ok(ExitCode::from(code));
        }
    };

    setup_tracing(Level::WARN);
    match cli.command {
        Commands::Sign(cmd) => cmd.run(),
        Commands::Verify(cmd) => cmd.run(),
        Commands::Keygen(cmd) => cmd.run(),
    }
}
