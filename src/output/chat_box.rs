// src/output/chat_box.rs
use crate::chat::surface::{DisplayEntry, DisplaySurface};
use crate::core::prelude::*;
use crate::output::scroll::ScrollState;
use crate::ui::widget::Widget;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Scrollable message history; the display surface of the terminal host.
///
/// Entries are hard-wrapped to the inner width of the last viewport, and all
/// scroll math is in wrapped lines.
pub struct ChatBox {
    title: String,
    entries: Vec<DisplayEntry>,
    lines: Vec<String>,
    wrap_width: usize,
    scroll: ScrollState,
    text_color: Color,
    bg_color: Color,
    border_color: Color,
}

impl ChatBox {
    pub fn new(config: &Config) -> Self {
        Self {
            title: config.surfaces.display.clone(),
            entries: Vec::new(),
            lines: Vec::new(),
            wrap_width: 0,
            scroll: ScrollState::new(),
            text_color: config.theme.output_text.into(),
            bg_color: config.theme.output_bg.into(),
            border_color: config.theme.border.into(),
        }
    }

    /// Fits the box to `area` (borders included). Rewraps when the width
    /// changes; a pinned view stays on the newest line.
    pub fn set_viewport(&mut self, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;

        if inner_width != self.wrap_width {
            self.wrap_width = inner_width;
            self.rewrap();
        }
        self.scroll
            .update_dimensions(inner_height, self.lines.len());
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn visible_lines(&self) -> &[String] {
        let (start, end) = self.scroll.visible_range();
        &self.lines[start..end]
    }

    pub fn is_pinned(&self) -> bool {
        self.scroll.is_pinned()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll.scroll_up(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll.scroll_down(amount);
    }

    /// Lines moved by PageUp/PageDown.
    pub fn page_size(&self) -> usize {
        self.scroll.window_height().saturating_sub(1).max(1)
    }

    fn rewrap(&mut self) {
        self.lines = self
            .entries
            .iter()
            .flat_map(|entry| wrap_text(entry.text(), self.wrap_width))
            .collect();
    }
}

impl DisplaySurface for ChatBox {
    fn append(&mut self, entry: DisplayEntry) {
        self.lines.extend(wrap_text(entry.text(), self.wrap_width));
        self.entries.push(entry);
        self.scroll
            .update_dimensions(self.scroll.window_height(), self.lines.len());
    }

    fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    fn scroll_position(&self) -> usize {
        self.scroll.offset()
    }

    fn scroll_extent(&self) -> usize {
        self.scroll.extent()
    }

    fn set_scroll_position(&mut self, position: usize) {
        self.scroll.set_offset(position);
    }
}

impl Widget for ChatBox {
    fn render(&self) -> Paragraph<'_> {
        let style = Style::default().fg(self.text_color).bg(self.bg_color);
        let lines: Vec<Line> = self
            .visible_lines()
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), style)))
            .collect();

        Paragraph::new(lines).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.as_str())
                .border_style(Style::default().fg(self.border_color)),
        )
    }
}

/// Hard-wraps `text` to `width` terminal columns.
///
/// Each `\n`-separated segment starts a new line and an empty segment still
/// takes one line. A grapheme wider than `width` gets a line of its own.
/// A width of zero disables wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        if width == 0 {
            lines.push(segment.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for grapheme in segment.graphemes(true) {
            let grapheme_width = grapheme.width();
            if current_width + grapheme_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push_str(grapheme);
            current_width += grapheme_width;
        }
        lines.push(current);
    }

    lines
}
