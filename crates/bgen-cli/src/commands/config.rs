//! `bgen config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&mut config, &key, &value)?;
            let written = config.save(config_file).map_err(|e| CliError::ConfigError {
                message: format!("Failed to save config: {e}"),
                source: None,
            })?;
            output.success(&format!("{key} = {value} ({})", written.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "paths.build_element_folder" => Ok(config.paths.build_element_folder.clone()),
        "paths.default_types_file" => Ok(config.paths.default_types_file.clone()),
        "paths.behavior_folder" => Ok(config.paths.behavior_folder.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "paths.build_element_folder" => config.paths.build_element_folder = value.to_string(),
        "paths.default_types_file" => config.paths.default_types_file = value.to_string(),
        "paths.behavior_folder" => config.paths.behavior_folder = value.to_string(),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a boolean (expected true/false)"),
                source: None,
            })?;
        }
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
