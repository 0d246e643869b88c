use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use crate::cmd::{self, OutputFormat};

#[derive(Parser)]
#[command(author, version, disable_version_flag = true, about = "Markdown configuration provider for static site builds")]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    version: (),

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Write a sitemark.toml holding the default markdown options
    Init {
        /// Site root directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Print the resolved site configuration
    Show {
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Ignore any sitemark.toml and print the defaults
        #[arg(long)]
        defaults: bool,
    },
    /// Validate a site configuration file
    Check {
        /// Configuration file, defaults to the nearest sitemark.toml
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub async fn start(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { dir } => cmd::init(&dir).await?,
        Commands::Show { format, defaults } => cmd::show(format, defaults).await?,
        Commands::Check { path } => cmd::check(path).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_format() {
        let cli = Cli::try_parse_from(["sitemark", "show", "--format", "json", "-d"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Json,
                defaults: false
            }
        ));
    }

    #[test]
    fn init_defaults_to_the_current_directory() {
        let cli = Cli::try_parse_from(["sitemark", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { dir } if dir == PathBuf::from(".")));
    }
}
