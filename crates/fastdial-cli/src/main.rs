use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fastdial-cli", version, about = "Fastdial CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current phase and countdown as JSON
    Status(commands::status::StatusArgs),
    /// Print the eating and fasting arcs of the dial as JSON
    Dial(commands::dial::DialArgs),
    /// Refresh the countdown on a fixed cadence
    Watch(commands::watch::WatchArgs),
    /// Fasting protocol presets
    Protocol {
        #[command(subcommand)]
        action: commands::protocol::ProtocolAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Dial(args) => commands::dial::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Protocol { action } => commands::protocol::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
