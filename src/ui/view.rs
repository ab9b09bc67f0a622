// src/ui/view.rs
use crate::chat::try_send_message;
use crate::core::prelude::*;
use crate::input::{InputState, KeyAction, KeyboardManager};
use crate::output::ChatBox;
use crate::ui::widget::Widget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// What the UI loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Chat box above an input line, with the key handling between them.
/// Holds no terminal, so it can be driven and drawn headless.
pub struct ChatView {
    chat: ChatBox,
    input: InputState,
    keyboard: KeyboardManager,
}

impl ChatView {
    pub fn new(config: &Config) -> Self {
        Self {
            chat: ChatBox::new(config),
            input: InputState::new(config),
            keyboard: KeyboardManager::new(),
        }
    }

    pub fn chat(&self) -> &ChatBox {
        &self.chat
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let action = self.keyboard.get_action(&key);
        self.handle_action(action)
    }

    pub fn handle_action(&mut self, action: KeyAction) -> Flow {
        match action {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::Submit => {
                try_send_message(&mut self.input, &mut self.chat);
            }
            KeyAction::ScrollUp => self.chat.scroll_up(1),
            KeyAction::ScrollDown => self.chat.scroll_down(1),
            KeyAction::PageUp => {
                let page = self.chat.page_size();
                self.chat.scroll_up(page);
            }
            KeyAction::PageDown => {
                let page = self.chat.page_size();
                self.chat.scroll_down(page);
            }
            other => {
                self.input.apply_action(&other);
            }
        }
        Flow::Continue
    }

    pub fn tick(&mut self) {
        if let Some(input) = self.input.as_input_state() {
            input.update_cursor_blink();
        }
    }

    /// Sizes the chat box for a terminal of `area` without drawing.
    pub fn resize(&mut self, area: Rect) {
        if let Some((chat_area, _)) = split(area) {
            self.chat.set_viewport(chat_area);
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let Some((chat_area, input_area)) = split(frame.size()) else {
            return;
        };

        self.chat.set_viewport(chat_area);
        frame.render_widget(self.chat.render(), chat_area);
        frame.render_widget(self.input.render(), input_area);
    }
}

fn split(area: Rect) -> Option<(Rect, Rect)> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);
    Some((chunks[0], chunks[1]))
}
