use clap::Subcommand;
use edgeway_core::conf::{ConfigError, DEFAULT_CONFIG_PATH, load_config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Load and validate a config file
    Check {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { config, plain } => check(config, plain),
    }
}

fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            let mark = if plain {
                "ok".to_string()
            } else {
                "✔".green().to_string()
            };
            println!("{mark} Config loaded from {}", path.display());
            println!("{mark} index document: {}", cfg.normalizer.index_document);
            println!("{mark} log filter: {}", cfg.logging.level);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!("{} {err}", "✘".red());
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidIndexDocument { .. } => Some(
            "The index document is appended to directory-like uris.\n\
             \n\
             Example:\n\
             \n\
             [normalizer]\n\
             index_document = \"index.html\"",
        ),

        ConfigError::InvalidLogLevel { .. } => Some(
            "The log level is an EnvFilter directive.\n\
             \n\
             Example:\n\
             \n\
             [logging]\n\
             level = \"edgeway_core=debug,info\"",
        ),

        ConfigError::ReadFile { .. } | ConfigError::Parse { .. } => None,
    }
}
