// src/chat/surface.rs

/// A single rendered message. The text is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    text: String,
}

impl DisplayEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Single-line text holder whose value can be read and overwritten.
pub trait TextEntry {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: String);
}

/// Ordered container of entries with a vertical scroll position.
///
/// `scroll_extent` is the largest valid scroll position for the current
/// content; setting the position to it reveals the last entry.
pub trait DisplaySurface {
    fn append(&mut self, entry: DisplayEntry);
    fn entries(&self) -> &[DisplayEntry];
    fn scroll_position(&self) -> usize;
    fn scroll_extent(&self) -> usize;
    fn set_scroll_position(&mut self, position: usize);
}

impl TextEntry for String {
    fn value(&self) -> &str {
        self
    }

    fn set_value(&mut self, value: String) {
        *self = value;
    }
}
