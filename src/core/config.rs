//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bookrack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::SortOption;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookrackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Ordering applied at startup: "name_asc", "name_desc", "year_asc",
    /// "year_desc". Kept as a string so unrecognised values degrade to
    /// "no sorting" instead of failing the whole config parse.
    pub default_sort: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// JSON library file. Relative paths resolve against `~/.bookrack/`.
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "$";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_sort: Option<SortOption>,
    pub currency: String,
    pub library_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bookrack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bookrack").join("config.toml"))
}

/// Load config from `~/.bookrack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BookrackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BookrackConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BookrackConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BookrackConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BookrackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# bookrack Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_sort = "name_asc"   # "name_asc", "name_desc", "year_asc", "year_desc"
# currency = "$"

# [library]
# file = "books.json"         # Path relative to ~/.bookrack/
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_sort` and `cli_library` are from CLI flags (None = not specified).
pub fn resolve(
    config: &BookrackConfig,
    cli_sort: Option<&str>,
    cli_library: Option<&Path>,
) -> ResolvedConfig {
    // Sort order: CLI → env → config → none
    let sort_str = cli_sort
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BOOKRACK_SORT").ok())
        .or_else(|| config.general.default_sort.clone());
    let default_sort = sort_str.as_deref().and_then(|s| {
        let parsed = SortOption::parse(s);
        if parsed.is_none() {
            warn!("Unrecognised sort order {s:?}, starting unsorted");
        }
        parsed
    });

    // Currency: env → config → default
    let currency = std::env::var("BOOKRACK_CURRENCY")
        .ok()
        .or_else(|| config.general.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    // Library file: CLI → env → config (config-relative paths anchor at ~/.bookrack/)
    let library_file = cli_library
        .map(|p| p.to_path_buf())
        .or_else(|| std::env::var("BOOKRACK_LIBRARY").ok().map(PathBuf::from))
        .or_else(|| {
            config.library.file.as_ref().map(|file| {
                let path = PathBuf::from(file);
                if path.is_absolute() {
                    path
                } else {
                    match dirs::home_dir() {
                        Some(home) => home.join(".bookrack").join(path),
                        None => path,
                    }
                }
            })
        });

    ResolvedConfig {
        default_sort,
        currency,
        library_file,
    }
}
