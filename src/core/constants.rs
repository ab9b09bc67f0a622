pub const APP_TITLE: &str = "CHAT BOX";
pub const DEFAULT_POLL_RATE: u64 = 16;
pub const MIN_POLL_RATE: u64 = 16;
pub const MAX_POLL_RATE: u64 = 1000;
pub const DOUBLE_ESC_THRESHOLD: u64 = 250;
pub const RESIZE_THROTTLE_MS: u64 = 50;
pub const INPUT_SURFACE_ID: &str = "msg";
pub const DISPLAY_SURFACE_ID: &str = "chat-box";
pub const CONFIG_DIR: &str = ".chatbox";
pub const CONFIG_FILE: &str = "chatbox.toml";
pub const LOG_FILE: &str = "chatbox.log";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
