/// Vertical scroll bookkeeping for the chat box, in wrapped lines.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: usize,
    window_height: usize,
    content_height: usize,
    pinned: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            pinned: true,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn extent(&self) -> usize {
        self.content_height.saturating_sub(self.window_height)
    }

    /// True while the view shows the newest line.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn update_dimensions(&mut self, window_height: usize, content_height: usize) {
        self.window_height = window_height;
        self.content_height = content_height;

        let max_offset = self.extent();
        if self.pinned {
            self.offset = max_offset;
        } else {
            self.offset = self.offset.min(max_offset);
        }
    }

    pub fn set_offset(&mut self, offset: usize) {
        let max_offset = self.extent();
        self.offset = offset.min(max_offset);
        self.pinned = self.offset >= max_offset;
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.set_offset(self.offset.saturating_sub(amount));
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.set_offset(self.offset.saturating_add(amount));
    }

    pub fn visible_range(&self) -> (usize, usize) {
        if self.content_height <= self.window_height {
            return (0, self.content_height);
        }

        let start = self.offset;
        let end = (self.offset + self.window_height).min(self.content_height);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_view_follows_growth() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 2);
        assert_eq!(scroll.offset(), 0);
        scroll.update_dimensions(3, 10);
        assert_eq!(scroll.offset(), 7);
        assert_eq!(scroll.visible_range(), (7, 10));
    }

    #[test]
    fn scrolling_up_unpins_and_bottom_repins() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 10);
        scroll.scroll_up(2);
        assert!(!scroll.is_pinned());
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(3, 12);
        assert_eq!(scroll.offset(), 5);

        scroll.scroll_down(100);
        assert!(scroll.is_pinned());
        assert_eq!(scroll.offset(), scroll.extent());
    }

    #[test]
    fn taller_window_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(2, 10);
        scroll.scroll_up(6);
        assert_eq!(scroll.offset(), 2);
        scroll.update_dimensions(9, 10);
        assert_eq!(scroll.offset(), 1);
        scroll.update_dimensions(20, 10);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), (0, 10));
    }
}
