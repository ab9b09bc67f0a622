// src/output/mod.rs
pub mod chat_box;
pub mod logging;
pub mod scroll;

pub use chat_box::ChatBox;
