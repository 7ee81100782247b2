//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — the persisted
//! folder answers travel into `bgen-core` as an explicit `GeneratorPaths`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config` file, when given
//! 3. `.bgen.toml` in the current directory
//! 4. The per-user config location (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)
//!
//! Prompt answers for the stored paths are written back through
//! [`AppConfig::save`] after a successful run, so defaults follow the user
//! across invocations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persisted project locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Folder holding `buildElement` and `behaviorTypes.ts`.
    pub build_element_folder: String,
    /// The shared type-declaration file generated behaviors import.
    pub default_types_file: String,
    /// Folder new behavior files are written into.
    pub behavior_folder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            build_element_folder: "src_ts/build_element".into(),
            default_types_file: "src_ts/defaultTypes.d.ts".into(),
            behavior_folder: "src_ts/behaviors".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default locations). An explicit path that cannot be read
    /// or parsed is an error; the default locations fall through silently.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
            return Ok(toml::from_str(&text)
                .map_err(|e| anyhow::anyhow!("cannot parse {}: {e}", path.display()))?);
        }

        for candidate in [PathBuf::from(".bgen.toml"), Self::config_path()] {
            if candidate.is_file() {
                let text = std::fs::read_to_string(&candidate)
                    .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", candidate.display()))?;
                return Ok(toml::from_str(&text)
                    .map_err(|e| anyhow::anyhow!("cannot parse {}: {e}", candidate.display()))?);
            }
        }

        Ok(Self::default())
    }

    /// Persist the configuration.
    ///
    /// Writes to the `--config` path when one was given, else to whichever
    /// default location is already in use, else to the per-user location
    /// (creating its directory). Returns the path written.
    pub fn save(&self, config_file: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
        let target = match config_file {
            Some(path) => path.clone(),
            None => {
                let local = PathBuf::from(".bgen.toml");
                if local.is_file() {
                    local
                } else {
                    Self::config_path()
                }
            }
        };

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
            }
        }

        let serialised = toml::to_string_pretty(self)?;
        std::fs::write(&target, serialised)
            .map_err(|e| anyhow::anyhow!("cannot write {}: {e}", target.display()))?;
        Ok(target)
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.bgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bgen", "bgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".bgen.toml"))
    }

    /// The active config file for display purposes: the explicit path, the
    /// local file when present, else the per-user location.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        match config_file {
            Some(path) => path.clone(),
            None => {
                let local = Path::new(".bgen.toml");
                if local.is_file() {
                    local.to_path_buf()
                } else {
                    Self::config_path()
                }
            }
        }
    }
}
