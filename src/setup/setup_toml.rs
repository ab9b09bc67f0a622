// src/setup/setup_toml.rs
use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DEFAULT_CONFIG: &str = r#"[general]
# Poll rate: 16ms = 60 FPS (valid range 16-1000)
poll_rate = 16
log_level = "info"

[surfaces]
input_id = "msg"
display_id = "chat-box"

[prompt]
text = "> "
color = "LightBlue"

[theme]
input_text = "White"
input_bg = "Black"
output_text = "Gray"
output_bg = "Black"
cursor = "White"
border = "DarkGray"
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path.parent().ok_or_else(|| {
        AppError::Validation("Could not determine program directory".to_string())
    })?;

    ensure_config_in(base_dir).await
}

/// Writes the default config under `base_dir` unless one is already there.
pub async fn ensure_config_in(base_dir: &Path) -> Result<PathBuf> {
    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Config file created: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
