// crates/enigma-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "enigma-cli")]
#[command(about = "Rotor cipher machine CLI", long_about = None)]
pub struct Cli {
    /// Log machine construction and per-message details (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt (or decrypt, same operation) text with a freshly built machine
    Encrypt(cmd::encrypt::EncryptArgs),

    /// Settings tools (TOML)
    Settings(cmd::settings::SettingsArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "enigma_core=debug,enigma_cli=debug"
    } else {
        "enigma_core=info,enigma_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries only ciphertext / settings output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Settings(args) => cmd::settings::run(args),
    }
}
