// src/core/config.rs
use crate::core::constants::{
    DEFAULT_POLL_RATE, DISPLAY_SURFACE_ID, INPUT_SURFACE_ID, MAX_POLL_RATE, MIN_POLL_RATE,
};
use crate::core::prelude::*;
use crate::ui::color::AppColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    surfaces: Option<SurfacesConfigToml>,
    #[serde(default)]
    prompt: Option<PromptConfigToml>,
    #[serde(default)]
    theme: Option<ThemeDefinitionConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_poll_rate")]
    poll_rate: u64,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct SurfacesConfigToml {
    #[serde(default = "default_input_id")]
    input_id: String,
    #[serde(default = "default_display_id")]
    display_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct PromptConfigToml {
    #[serde(default = "default_prompt_text")]
    text: String,
    #[serde(default = "default_prompt_color")]
    color: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ThemeDefinitionConfig {
    input_text: String,
    input_bg: String,
    output_text: String,
    output_bg: String,
    #[serde(default = "default_cursor_color")]
    cursor: String,
    #[serde(default = "default_border_color")]
    border: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_rate: default_poll_rate(),
            log_level: default_log_level(),
        }
    }
}

// Default Functions
fn default_poll_rate() -> u64 {
    DEFAULT_POLL_RATE
}
fn default_log_level() -> String {
    "info".into()
}
fn default_input_id() -> String {
    INPUT_SURFACE_ID.into()
}
fn default_display_id() -> String {
    DISPLAY_SURFACE_ID.into()
}
fn default_prompt_text() -> String {
    "> ".into()
}
fn default_prompt_color() -> String {
    "LightBlue".into()
}
fn default_cursor_color() -> String {
    "White".into()
}
fn default_border_color() -> String {
    "DarkGray".into()
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub poll_rate: Duration,
    pub log_level: String,
    pub surfaces: SurfaceIds,
    pub prompt: Prompt,
    pub theme: Theme,
}

/// Titles of the two surfaces the chat operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceIds {
    pub input: String,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    pub color: AppColor,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub input_text: AppColor,
    pub input_bg: AppColor,
    pub output_text: AppColor,
    pub output_bg: AppColor,
    pub cursor: AppColor,
    pub border: AppColor,
}

impl Default for SurfaceIds {
    fn default() -> Self {
        Self {
            input: INPUT_SURFACE_ID.into(),
            display: DISPLAY_SURFACE_ID.into(),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            text: default_prompt_text(),
            color: AppColor::new(Color::LightBlue),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            input_text: AppColor::new(Color::White),
            input_bg: AppColor::new(Color::Black),
            output_text: AppColor::new(Color::Gray),
            output_bg: AppColor::new(Color::Black),
            cursor: AppColor::new(Color::White),
            border: AppColor::new(Color::DarkGray),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        // Try existing configs
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        Self::log_startup(&config);
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        // Create new config
        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;
        log::info!("New config: {}", path.display());
        Self::log_startup(&config);
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let poll_rate = Self::clamp(
            file.general.poll_rate,
            MIN_POLL_RATE,
            MAX_POLL_RATE,
            DEFAULT_POLL_RATE,
        );

        let theme = match &file.theme {
            Some(def) => Theme::from_config(def)?,
            None => Theme::default(),
        };

        let prompt = match &file.prompt {
            Some(p) => Prompt {
                text: p.text.clone(),
                color: AppColor::from_string(&p.color)?,
            },
            None => Prompt::default(),
        };

        let surfaces = file
            .surfaces
            .map_or_else(SurfaceIds::default, |s| SurfaceIds {
                input: s.input_id,
                display: s.display_id,
            });

        Ok(Self {
            config_path: None,
            poll_rate: Duration::from_millis(poll_rate),
            log_level: file.general.log_level,
            surfaces,
            prompt,
            theme,
        })
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let file = ConfigFile {
            general: GeneralConfig {
                poll_rate: self.poll_rate.as_millis() as u64,
                log_level: self.log_level.clone(),
            },
            surfaces: Some(SurfacesConfigToml {
                input_id: self.surfaces.input.clone(),
                display_id: self.surfaces.display.clone(),
            }),
            prompt: Some(PromptConfigToml {
                text: self.prompt.text.clone(),
                color: self.prompt.color.to_name().into(),
            }),
            theme: Some(ThemeDefinitionConfig {
                input_text: self.theme.input_text.to_name().into(),
                input_bg: self.theme.input_bg.to_name().into(),
                output_text: self.theme.output_text.to_name().into(),
                output_bg: self.theme.output_bg.to_name().into(),
                cursor: self.theme.cursor.to_name().into(),
                border: self.theme.border.to_name().into(),
            }),
        };

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::Io)?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn log_startup(config: &Config) {
        log::info!("Chat Box v{}", crate::core::constants::VERSION);
        log::info!(
            "Surfaces: input '{}', display '{}', poll rate {}ms",
            config.surfaces.input,
            config.surfaces.display,
            config.poll_rate.as_millis()
        );
    }
}

impl Theme {
    fn from_config(def: &ThemeDefinitionConfig) -> Result<Self> {
        Ok(Self {
            input_text: AppColor::from_string(&def.input_text)?,
            input_bg: AppColor::from_string(&def.input_bg)?,
            output_text: AppColor::from_string(&def.output_text)?,
            output_bg: AppColor::from_string(&def.output_bg)?,
            cursor: AppColor::from_string(&def.cursor)?,
            border: AppColor::from_string(&def.border)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            poll_rate: Duration::from_millis(DEFAULT_POLL_RATE),
            log_level: default_log_level(),
            surfaces: SurfaceIds::default(),
            prompt: Prompt::default(),
            theme: Theme::default(),
        }
    }
}
