use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Grapheme-indexed cursor for the single-line input.
pub struct CursorState {
    position: usize,
    text_length: usize,
    visible: bool,
    last_blink: Instant,
    blink_interval: Duration,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            position: 0,
            text_length: 0,
            visible: true,
            last_blink: Instant::now(),
            blink_interval: BLINK_INTERVAL,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update_blink(&mut self) {
        if self.last_blink.elapsed() >= self.blink_interval {
            self.visible = !self.visible;
            self.last_blink = Instant::now();
        }
    }

    fn show(&mut self) {
        self.visible = true;
        self.last_blink = Instant::now();
    }

    /// Re-syncs with the text after an edit; keeps the position in bounds.
    pub fn sync(&mut self, text: &str) {
        self.text_length = text.graphemes(true).count();
        self.position = self.position.min(self.text_length);
        self.show();
    }

    pub fn reset(&mut self) {
        self.text_length = 0;
        self.position = 0;
        self.show();
    }

    pub fn move_left(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.show();
        }
    }

    pub fn move_right(&mut self) {
        if self.position < self.text_length {
            self.position += 1;
            self.show();
        }
    }

    pub fn move_to_start(&mut self) {
        self.position = 0;
        self.show();
    }

    pub fn move_to_end(&mut self) {
        self.position = self.text_length;
        self.show();
    }

    /// Byte offset of the grapheme boundary at the cursor.
    pub fn byte_position(&self, text: &str) -> usize {
        Self::boundary(text, self.position)
    }

    /// Byte offset of the boundary one grapheme after the cursor.
    pub fn next_byte_position(&self, text: &str) -> usize {
        Self::boundary(text, self.position + 1)
    }

    /// Byte offset of the boundary one grapheme before the cursor.
    pub fn prev_byte_position(&self, text: &str) -> usize {
        Self::boundary(text, self.position.saturating_sub(1))
    }

    fn boundary(text: &str, graphemes: usize) -> usize {
        text.grapheme_indices(true)
            .nth(graphemes)
            .map(|(pos, _)| pos)
            .unwrap_or(text.len())
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_positions_follow_graphemes() {
        let text = "aé🙂b";
        let mut cursor = CursorState::new();
        cursor.sync(text);
        cursor.move_to_end();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.byte_position(text), text.len());

        cursor.move_left();
        assert_eq!(cursor.byte_position(text), text.len() - 1);
        assert_eq!(cursor.prev_byte_position(text), "aé".len());
        assert_eq!(cursor.next_byte_position(text), text.len());
    }

    #[test]
    fn movement_is_bounded() {
        let mut cursor = CursorState::new();
        cursor.sync("ab");
        cursor.move_left();
        assert_eq!(cursor.position(), 0);
        cursor.move_right();
        cursor.move_right();
        cursor.move_right();
        assert_eq!(cursor.position(), 2);
        cursor.sync("a");
        assert_eq!(cursor.position(), 1);
    }
}
