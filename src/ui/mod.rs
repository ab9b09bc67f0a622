// src/ui/mod.rs
pub mod color;
pub mod cursor;
pub mod screen;
pub mod terminal;
pub mod view;
pub mod widget;
