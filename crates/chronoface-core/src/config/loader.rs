use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Config;

/// Returns the config directory: `~/.config/chronoface/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("chronoface"))
}

/// Returns the config file path: `~/.config/chronoface/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    match read_config(&path)? {
        Some(config) => Ok(config),
        None => Err(format!("{}: file not found", path.display())),
    }
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// A missing file silently returns defaults; other errors are reported
/// on stderr.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    match read_config(&path) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Reads and validates a config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub(super) fn read_config(path: &Path) -> Result<Option<Config>, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("{}: {e}", path.display())),
    };
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(Some(config))
}
