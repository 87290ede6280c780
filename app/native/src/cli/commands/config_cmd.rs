//! Config CLI commands.
//!
//! Commands for inspecting and creating the Recenter configuration file.

use std::path::PathBuf;

use clap::Subcommand;
use colored::Colorize;

use crate::cli::output::{format_bool, print_highlighted_json};
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, RecenterConfig, config_paths};
use crate::error::RecenterError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Show the configuration file search paths.
    ///
    /// Lists every location Recenter looks at, in priority order, and marks
    /// the file currently in use.
    Path,

    /// Show the effective configuration.
    ///
    /// Prints the configuration after defaults and clamping have been applied,
    /// exactly as the app uses it.
    Show,

    /// Output the configuration JSON Schema.
    ///
    /// Can be redirected to a file for use with editors that support JSON
    /// Schema validation.
    Schema,

    /// Create a configuration file with every option documented.
    #[command(after_long_help = r#"Examples:
  recenter config init              # Create config at default location
  recenter config init --force      # Overwrite existing config
  recenter config init --stdout     # Print template to stdout"#)]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), RecenterError> {
    match cmd {
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
        ConfigCommands::Show => show_config(),
        ConfigCommands::Schema => {
            println!("{}", config_schema()?);
            Ok(())
        }
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
    }
}

/// Renders the JSON Schema of [`RecenterConfig`].
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn config_schema() -> Result<String, RecenterError> {
    let schema = schemars::schema_for!(RecenterConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let active = config::get_config_path();
    for (i, path) in config_paths().iter().enumerate() {
        let marker = if active.as_deref() == Some(path.as_path()) {
            " (active)".green().to_string()
        } else if path.exists() {
            " (exists)".to_string()
        } else {
            String::new()
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    match active {
        Some(path) if !config_paths().contains(&path) => {
            println!("\nUsing custom configuration: {}", path.display());
        }
        Some(_) => {}
        None => {
            println!("\nNo configuration file found.");
            println!("Run 'recenter config init' to create one.");
        }
    }
}

fn show_config() -> Result<(), RecenterError> {
    let config = config::get_config();
    let value = serde_json::to_value(&config)?;

    if let Some(path) = config::get_config_path() {
        println!("{} {}", "Source:".bold(), path.display());
    } else {
        println!("{} built-in defaults", "Source:".bold());
    }
    println!("{} {}\n", "Auto-snap:".bold(), format_bool(config.auto_snap));
    print_highlighted_json(&value);

    Ok(())
}

fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), RecenterError> {
    let config_path = custom_path
        .or_else(|| config_paths().into_iter().next())
        .unwrap_or_else(|| PathBuf::from("config.jsonc"));

    if config_path.exists() && !force {
        return Err(RecenterError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        RecenterError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    println!("Configuration file created at: {}", config_path.display());
    Ok(())
}
