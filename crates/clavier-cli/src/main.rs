//! Clavier CLI - a virtual keyboard synthesizer for the terminal.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clavier")]
#[command(author, version, about = "Clavier keyboard synthesizer CLI", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List note identifiers and their frequencies
    Notes(commands::notes::NotesArgs),

    /// Render notes or a chord to a WAV file
    Render(commands::render::RenderArgs),

    /// Show the spectrum of a chord or a WAV file
    Analyze(commands::analyze::AnalyzeArgs),

    /// Play notes or a chord on an audio device
    Play(commands::play::PlayArgs),

    /// Interactive keyboard: toggle keys by typing their names
    Keys(commands::keys::KeysArgs),

    /// List audio output devices
    Devices(commands::devices::DevicesArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Notes(args) => commands::notes::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Play(args) => commands::play::run(args),
        Commands::Keys(args) => commands::keys::run(args),
        Commands::Devices(args) => commands::devices::run(args),
    }
}
