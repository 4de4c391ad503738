mod cli;

use clap::{Parser, Subcommand};
use edgeway_core::conf::load_config_or_default;
use edgeway_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "edgeway",
    version,
    about = "Edgeway: edge request normalizer for static sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the handler against an edge event and print its output
    Handle {
        /// Event JSON file. Reads stdin when omitted or "-"
        #[arg(long)]
        event: Option<PathBuf>,

        /// Path to the Edgeway config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Normalize a bare host and uri and print the decision
    Normalize {
        #[arg(long)]
        host: String,

        #[arg(long)]
        uri: String,

        /// Path to the Edgeway config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Config tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Handle {
            event,
            config,
            pretty,
        } => load_and_init(config.as_deref())
            .and_then(|cfg| cli::handle::run(&cfg, event.as_deref(), pretty)),

        Command::Normalize { host, uri, config } => load_and_init(config.as_deref())
            .and_then(|cfg| cli::normalize::run(&cfg, host, uri)),

        Command::Config { cmd } => cli::config::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("edgeway error: {e:#}");
        std::process::exit(1);
    }
}

fn load_and_init(
    config: Option<&std::path::Path>,
) -> anyhow::Result<edgeway_core::conf::EdgewayConfig> {
    let cfg = load_config_or_default(config)?;
    init_logging(&cfg.logging);
    Ok(cfg)
}
