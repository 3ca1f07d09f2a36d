//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dragboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    pub min_description_length: Option<usize>,
    pub min_people: Option<u32>,
    pub max_people: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "dragboard.log";
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 5;
pub const DEFAULT_MIN_PEOPLE: u32 = 1;
pub const DEFAULT_MAX_PEOPLE: u32 = 5;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Limits applied by the input form. Title is always required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub min_description_length: usize,
    pub min_people: u32,
    pub max_people: u32,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            min_people: DEFAULT_MIN_PEOPLE,
            max_people: DEFAULT_MAX_PEOPLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: String,
    pub log_file: PathBuf,
    pub form: FormRules,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.dragboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dragboard").join("config.toml"))
}

/// Load config from `~/.dragboard/config.toml`.
pub fn load_config() -> Result<BoardConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(BoardConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BoardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<BoardConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BoardConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BoardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Dragboard Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "dragboard.log"         # Or set DRAGBOARD_LOG_FILE env var

# [form]
# min_description_length = 5
# min_people = 1
# max_people = 5
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
pub fn resolve(config: &BoardConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("DRAGBOARD_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("DRAGBOARD_LOG_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.log_file.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        log_level,
        log_file,
        form: resolve_form_rules(&config.form),
    }
}

/// Form limits from config. Every project needs at least one person, and a
/// people range that admits nothing falls back to the defaults.
fn resolve_form_rules(form: &FormConfig) -> FormRules {
    let defaults = FormRules::default();
    let mut min_people = form.min_people.unwrap_or(defaults.min_people);
    if min_people < 1 {
        warn!("form.min_people = {} is below 1, using 1", min_people);
        min_people = 1;
    }
    let mut max_people = form.max_people.unwrap_or(defaults.max_people);
    if min_people > max_people {
        warn!(
            "form people range {}..={} is empty, using {}..={}",
            min_people, max_people, defaults.min_people, defaults.max_people
        );
        min_people = defaults.min_people;
        max_people = defaults.max_people;
    }

    FormRules {
        min_description_length: form
            .min_description_length
            .unwrap_or(defaults.min_description_length),
        min_people,
        max_people,
    }
}
