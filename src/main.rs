// src/main.rs
use chat_box::core::config::Config;
use chat_box::output::logging;
use chat_box::ui::terminal::restore_after_panic;
use chat_box::{AppError, Result};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let config_arg = parse_config_arg(std::env::args().skip(1))?;

    std::panic::set_hook(Box::new(|panic_info| {
        restore_after_panic();
        log::error!("PANIC: {}", panic_info);
        eprintln!("{}", panic_info);
    }));

    let log_path = logging::default_log_path();
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Logging disabled: {}", e);
    }

    let config = match &config_arg {
        Some(path) => Config::from_file(path).await?,
        None => chat_box::load_config().await?,
    };
    logging::apply_level(&config.log_level);

    match config.config_path() {
        Some(path) => log::info!("Config loaded from {}", path.display()),
        None => log::info!("Using built-in config"),
    }

    log::info!("Starting chat box...");
    chat_box::run_with_config(config).await
}

fn parse_config_arg(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or_else(|| {
                    AppError::Validation("--config needs a path".to_string())
                })?;
                config = Some(PathBuf::from(path));
            }
            other => {
                return Err(AppError::Validation(format!("Unknown argument: {}", other)));
            }
        }
    }
    Ok(config)
}
