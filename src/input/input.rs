// src/input/input.rs
use crate::chat::surface::TextEntry;
use crate::core::prelude::*;
use crate::input::keyboard::KeyAction;
use crate::ui::cursor::CursorState;
use crate::ui::widget::{InputWidget, Widget};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;

/// Single-line message editor; the text-entry surface of the terminal host.
pub struct InputState {
    content: String,
    cursor: CursorState,
    title: String,
    prompt: String,
    prompt_color: Color,
    text_color: Color,
    bg_color: Color,
    cursor_color: Color,
    border_color: Color,
}

impl InputState {
    pub fn new(config: &Config) -> Self {
        Self {
            content: String::with_capacity(100),
            cursor: CursorState::new(),
            title: config.surfaces.input.clone(),
            prompt: config.prompt.text.clone(),
            prompt_color: config.prompt.color.into(),
            text_color: config.theme.input_text.into(),
            bg_color: config.theme.input_bg.into(),
            cursor_color: config.theme.cursor.into(),
            border_color: config.theme.border.into(),
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    /// Applies an editing action. Returns false for actions that are not
    /// about editing (submit, scrolling, quit).
    pub fn apply_action(&mut self, action: &KeyAction) -> bool {
        match action {
            KeyAction::InsertChar(c) => {
                let byte_pos = self.cursor.byte_position(&self.content);
                self.content.insert(byte_pos, *c);
                self.cursor.sync(&self.content);
                self.cursor.move_right();
            }
            KeyAction::MoveLeft => self.cursor.move_left(),
            KeyAction::MoveRight => self.cursor.move_right(),
            KeyAction::MoveToStart => self.cursor.move_to_start(),
            KeyAction::MoveToEnd => self.cursor.move_to_end(),
            KeyAction::Backspace => {
                if self.cursor.position() > 0 {
                    let prev_byte_pos = self.cursor.prev_byte_position(&self.content);
                    let current_byte_pos = self.cursor.byte_position(&self.content);
                    self.content
                        .replace_range(prev_byte_pos..current_byte_pos, "");
                    self.cursor.move_left();
                    self.cursor.sync(&self.content);
                }
            }
            KeyAction::Delete => {
                if self.cursor.position() < self.content.graphemes(true).count() {
                    let current_byte_pos = self.cursor.byte_position(&self.content);
                    let next_byte_pos = self.cursor.next_byte_position(&self.content);
                    self.content
                        .replace_range(current_byte_pos..next_byte_pos, "");
                    self.cursor.sync(&self.content);
                }
            }
            KeyAction::ClearLine => {
                self.content.clear();
                self.cursor.reset();
            }
            KeyAction::Submit
            | KeyAction::Quit
            | KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::NoAction => return false,
        }
        true
    }
}

impl TextEntry for InputState {
    fn value(&self) -> &str {
        &self.content
    }

    fn set_value(&mut self, value: String) {
        self.content = value;
        self.cursor.sync(&self.content);
        self.cursor.move_to_end();
    }
}

impl Widget for InputState {
    fn render(&self) -> Paragraph<'_> {
        let graphemes: Vec<&str> = self.content.graphemes(true).collect();
        let cursor_pos = self.cursor.position();
        let text_style = Style::default().fg(self.text_color).bg(self.bg_color);
        let cursor_style = if self.cursor.is_visible() {
            Style::default().fg(self.bg_color).bg(self.cursor_color)
        } else {
            text_style
        };

        let mut spans = Vec::with_capacity(4);
        spans.push(Span::styled(
            self.prompt.as_str(),
            Style::default().fg(self.prompt_color).bg(self.bg_color),
        ));

        if cursor_pos > 0 {
            spans.push(Span::styled(graphemes[..cursor_pos].concat(), text_style));
        }

        match graphemes.get(cursor_pos) {
            Some(&cursor_char) => {
                spans.push(Span::styled(cursor_char, cursor_style));
                if cursor_pos + 1 < graphemes.len() {
                    spans.push(Span::styled(
                        graphemes[cursor_pos + 1..].concat(),
                        text_style,
                    ));
                }
            }
            // Cursor sits past the last grapheme
            None => spans.push(Span::styled(" ", cursor_style)),
        }

        Paragraph::new(Line::from(spans)).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.as_str())
                .border_style(Style::default().fg(self.border_color)),
        )
    }

    fn as_input_state(&mut self) -> Option<&mut dyn InputWidget> {
        Some(self)
    }
}

impl InputWidget for InputState {
    fn update_cursor_blink(&mut self) {
        self.cursor.update_blink();
    }
}
