// Module definitions
pub mod chat;
pub mod core;
pub mod input;
pub mod output;
pub mod setup;
pub mod ui;

// Essential re-exports
pub use crate::chat::{plan_send, try_send_message, DisplayEntry, DisplaySurface, SendOutcome, TextEntry};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::ui::screen::ScreenManager;
pub use crate::ui::view::{ChatView, Flow};

pub async fn run_with_config(config: Config) -> Result<()> {
    let mut screen = ScreenManager::new(&config).await?;
    screen.run().await
}

pub async fn load_config() -> Result<Config> {
    Config::load().await
}
