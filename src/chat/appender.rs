// src/chat/appender.rs
use crate::chat::surface::{DisplayEntry, DisplaySurface, TextEntry};

/// Next state computed from the current input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPlan {
    pub entry: DisplayEntry,
    pub next_input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Ignored,
}

/// Whitespace as browsers trim it: Unicode `White_Space` plus the BOM,
/// minus NEL (U+0085).
pub fn is_blank_char(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Decides what a send does with `raw`, without touching any surface.
///
/// Whitespace-only input yields `None`. Otherwise the entry keeps `raw`
/// exactly as typed; trimming only gates the decision.
pub fn plan_send(raw: &str) -> Option<SendPlan> {
    if raw.trim_matches(is_blank_char).is_empty() {
        return None;
    }

    Some(SendPlan {
        entry: DisplayEntry::new(raw),
        next_input: String::new(),
    })
}

/// Moves the input's text into the display as a new last entry, clears the
/// input and scrolls the display to its extent.
pub fn try_send_message<I, D>(input: &mut I, display: &mut D) -> SendOutcome
where
    I: TextEntry + ?Sized,
    D: DisplaySurface + ?Sized,
{
    let Some(plan) = plan_send(input.value()) else {
        log::debug!("Ignored blank input ({} bytes)", input.value().len());
        return SendOutcome::Ignored;
    };

    display.append(plan.entry);
    input.set_value(plan.next_input);
    let extent = display.scroll_extent();
    display.set_scroll_position(extent);

    log::debug!(
        "Sent entry #{}; scrolled to {}",
        display.entries().len(),
        extent
    );
    SendOutcome::Sent
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Display with a fixed window: one line per entry.
    struct Lines {
        entries: Vec<DisplayEntry>,
        position: usize,
        window: usize,
    }

    impl Lines {
        fn new(window: usize) -> Self {
            Self {
                entries: Vec::new(),
                position: 0,
                window,
            }
        }
    }

    impl DisplaySurface for Lines {
        fn append(&mut self, entry: DisplayEntry) {
            self.entries.push(entry);
        }
        fn entries(&self) -> &[DisplayEntry] {
            &self.entries
        }
        fn scroll_position(&self) -> usize {
            self.position
        }
        fn scroll_extent(&self) -> usize {
            self.entries.len().saturating_sub(self.window)
        }
        fn set_scroll_position(&mut self, position: usize) {
            self.position = position;
        }
    }

    #[test]
    fn plan_keeps_raw_text() {
        let plan = plan_send("  hi  ").unwrap();
        assert_eq!(plan.entry.text(), "  hi  ");
        assert_eq!(plan.next_input, "");
    }

    #[test]
    fn plan_rejects_whitespace() {
        for raw in ["", " ", "   ", "\t\n", "\u{3000}", "\u{feff}", " \u{feff} "] {
            assert_eq!(plan_send(raw), None, "{:?}", raw);
        }
    }

    #[test]
    fn next_line_char_is_content() {
        let plan = plan_send("\u{85}").unwrap();
        assert_eq!(plan.entry.text(), "\u{85}");
    }

    #[test]
    fn send_scrolls_to_extent() {
        let mut display = Lines::new(2);
        let mut input = String::new();
        for text in ["one", "two", "three", "four"] {
            input.set_value(text.into());
            assert_eq!(try_send_message(&mut input, &mut display), SendOutcome::Sent);
            assert_eq!(display.scroll_position(), display.scroll_extent());
        }
        assert_eq!(display.scroll_position(), 2);
    }

    #[test]
    fn blank_input_is_left_alone() {
        let mut display = Lines::new(2);
        display.set_scroll_position(0);
        let mut input = String::from("   ");
        assert_eq!(
            try_send_message(&mut input, &mut display),
            SendOutcome::Ignored
        );
        assert_eq!(input, "   ");
        assert!(display.entries().is_empty());
    }

    #[test]
    fn works_through_trait_objects() {
        let mut display = Lines::new(5);
        let mut input = String::from("x");
        let input_ref: &mut dyn TextEntry = &mut input;
        let display_ref: &mut dyn DisplaySurface = &mut display;
        assert_eq!(try_send_message(input_ref, display_ref), SendOutcome::Sent);
        assert_eq!(display.entries()[0].text(), "x");
    }
}
