// src/output/logging.rs
use crate::core::constants::{CONFIG_DIR, LOG_FILE};
use crate::core::prelude::*;
use env_logger::{Builder, Env, Target, DEFAULT_FILTER_ENV};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Routes the `log` facade into `path`; the terminal belongs to the UI.
///
/// Installed before the config is read, at `Info`. `apply_level` narrows or
/// widens it once the configured level is known. `RUST_LOG` wins over both.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(AppError::Io)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(AppError::Io)?;

    Builder::from_env(Env::default().default_filter_or("trace"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    if !env_override() {
        log::set_max_level(LevelFilter::Info);
    }

    log::debug!("Logging to {}", path.display());
    Ok(())
}

/// Applies the configured level unless `RUST_LOG` is set.
pub fn apply_level(level: &str) {
    if env_override() {
        return;
    }

    match parse_level(level) {
        Some(filter) => log::set_max_level(filter),
        None => log::warn!("Unknown log level '{}', keeping info", level),
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

fn env_override() -> bool {
    std::env::var_os(DEFAULT_FILTER_ENV).is_some()
}

pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_DIR)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR))
        .join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
