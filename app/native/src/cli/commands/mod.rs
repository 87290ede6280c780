//! CLI command definitions using Clap.
//!
//! - `config_cmd` - Configuration file commands
//! - `plan` - Snap frame preview

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config;
use crate::error::RecenterError;

pub mod config_cmd;
pub mod plan;

pub use config_cmd::ConfigCommands;
pub use plan::PlanArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recenter CLI - keeps application windows centered on their display.
#[derive(Parser, Debug)]
#[command(name = "recenter")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH", env = "RECENTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Preview the frame a window would be snapped to.
    ///
    /// Takes the visible frame of a screen and prints the centered frame
    /// Recenter would move a window into.
    #[command(after_long_help = r#"Examples:
  recenter plan --frame 0,0,1512,945
  recenter plan --frame 0,0,1512,945 --margin 120 --json
  recenter plan --frame 0,0,1512,945 --primary-max-y 982"#)]
    Plan(PlanArgs),

    /// Configuration file commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(recenter completions --shell zsh)"
    ///   recenter completions --shell fish > ~/.config/fish/completions/recenter.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },

    /// Launch the desktop application.
    ///
    /// Equivalent to running `recenter` without any arguments.
    #[command(name = "--desktop", hide = true)]
    Desktop,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), RecenterError> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(RecenterError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path.clone());
        }

        match &self.command {
            Commands::Plan(args) => plan::execute(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
            Commands::Desktop => crate::run(),
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "recenter", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_parses_plan() {
        let cli = Cli::try_parse_from(["recenter", "plan", "--frame", "0,0,1512,945"]).unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.frame.0.width, 1512.0);
                assert_eq!(args.margin, None);
                assert!(!args.json);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_cli_parses_plan_with_negative_origin() {
        let cli = Cli::try_parse_from([
            "recenter", "plan", "--frame", "-1920,0,1920,1055", "--margin", "40", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.frame.0.x, -1920.0);
                assert_eq!(args.margin, Some(40.0));
                assert!(args.json);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_frame() {
        assert!(Cli::try_parse_from(["recenter", "plan", "--frame", "1,2,3"]).is_err());
    }

    #[test]
    fn test_cli_parses_config_subcommands() {
        let cli = Cli::try_parse_from(["recenter", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));

        let cli = Cli::try_parse_from(["recenter", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Show)));

        let cli = Cli::try_parse_from(["recenter", "config", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Schema)));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["recenter", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "recenter", "config", "show", "--config", "/tmp/recenter.jsonc", "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/recenter.jsonc")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parses_hidden_desktop() {
        let cli = Cli::try_parse_from(["recenter", "--desktop"]).unwrap();
        assert!(matches!(cli.command, Commands::Desktop));
    }

    #[test]
    fn test_cli_missing_config_file_errors() {
        let cli = Cli::try_parse_from([
            "recenter", "config", "show", "--config", "/nonexistent/recenter.jsonc",
        ])
        .unwrap();
        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }
}
