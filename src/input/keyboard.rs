// src/input/keyboard.rs
use crate::core::constants::DOUBLE_ESC_THRESHOLD;
use crate::core::prelude::*;
use crossterm::event::{KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    InsertChar(char),
    Backspace,
    Delete,
    Submit,
    Quit,
    ClearLine,
    NoAction,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}

pub struct KeyboardManager {
    double_press_threshold: Duration,
    last_esc_press: Option<Instant>,
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self {
            double_press_threshold: Duration::from_millis(DOUBLE_ESC_THRESHOLD),
            last_esc_press: None,
        }
    }

    pub fn get_action(&mut self, key: &KeyEvent) -> KeyAction {
        // Windows reports releases as separate events
        if key.kind == KeyEventKind::Release {
            return KeyAction::NoAction;
        }

        if key.code == KeyCode::Esc {
            return self.handle_escape(Instant::now());
        }

        match (key.code, key.modifiers) {
            // Movement
            (KeyCode::Left, KeyModifiers::NONE) => KeyAction::MoveLeft,
            (KeyCode::Right, KeyModifiers::NONE) => KeyAction::MoveRight,
            (KeyCode::Home, KeyModifiers::NONE) => KeyAction::MoveToStart,
            (KeyCode::End, KeyModifiers::NONE) => KeyAction::MoveToEnd,
            (KeyCode::Left, KeyModifiers::CONTROL) | (KeyCode::Left, KeyModifiers::ALT) => {
                KeyAction::MoveToStart
            }
            (KeyCode::Right, KeyModifiers::CONTROL) | (KeyCode::Right, KeyModifiers::ALT) => {
                KeyAction::MoveToEnd
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => KeyAction::MoveToStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => KeyAction::MoveToEnd,

            // Submit
            (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Submit,

            // Scrolling
            (KeyCode::Up, KeyModifiers::SHIFT) => KeyAction::ScrollUp,
            (KeyCode::Down, KeyModifiers::SHIFT) => KeyAction::ScrollDown,
            (KeyCode::PageUp, KeyModifiers::NONE) => KeyAction::PageUp,
            (KeyCode::PageDown, KeyModifiers::NONE) => KeyAction::PageDown,

            // Editing
            (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) => KeyAction::Delete,
            (KeyCode::Backspace, KeyModifiers::CONTROL)
            | (KeyCode::Backspace, KeyModifiers::ALT)
            | (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearLine,

            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                if c.is_control() {
                    log::warn!("Blocked control char in input: {:?}", c);
                    KeyAction::NoAction
                } else {
                    KeyAction::InsertChar(c)
                }
            }

            (code, modifiers) => {
                log::trace!("Unmapped key: {:?} + {:?}", code, modifiers);
                KeyAction::NoAction
            }
        }
    }

    fn handle_escape(&mut self, now: Instant) -> KeyAction {
        if let Some(prev_press) = self.last_esc_press.take() {
            if now.duration_since(prev_press) <= self.double_press_threshold {
                log::info!("Double ESC detected - quit requested");
                return KeyAction::Quit;
            }
        }

        self.last_esc_press = Some(now);
        KeyAction::NoAction
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut manager = KeyboardManager::new();

        let ctrl_char = key(KeyCode::Char('\x1B'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&ctrl_char), KeyAction::NoAction);

        let tab = key(KeyCode::Char('\t'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&tab), KeyAction::NoAction);

        let normal_char = key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&normal_char), KeyAction::InsertChar('a'));

        let upper = key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(manager.get_action(&upper), KeyAction::InsertChar('A'));
    }

    #[test]
    fn enter_submits_and_space_inserts() {
        let mut manager = KeyboardManager::new();
        assert_eq!(
            manager.get_action(&key(KeyCode::Enter, KeyModifiers::NONE)),
            KeyAction::Submit
        );
        assert_eq!(
            manager.get_action(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            KeyAction::InsertChar(' ')
        );
    }

    #[test]
    fn quit_shortcuts() {
        let mut manager = KeyboardManager::new();
        assert_eq!(
            manager.get_action(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );

        let start = Instant::now();
        assert_eq!(manager.handle_escape(start), KeyAction::NoAction);
        assert_eq!(
            manager.handle_escape(start + Duration::from_millis(100)),
            KeyAction::Quit
        );
    }

    #[test]
    fn slow_escapes_do_not_quit() {
        let mut manager = KeyboardManager::new();
        let start = Instant::now();
        assert_eq!(manager.handle_escape(start), KeyAction::NoAction);
        assert_eq!(
            manager.handle_escape(start + Duration::from_millis(600)),
            KeyAction::NoAction
        );
    }

    #[test]
    fn scroll_keys() {
        let mut manager = KeyboardManager::new();
        assert_eq!(
            manager.get_action(&key(KeyCode::Up, KeyModifiers::SHIFT)),
            KeyAction::ScrollUp
        );
        assert_eq!(
            manager.get_action(&key(KeyCode::PageDown, KeyModifiers::NONE)),
            KeyAction::PageDown
        );
    }
}
