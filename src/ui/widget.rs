use ratatui::widgets::Paragraph;

pub trait Widget {
    fn render(&self) -> Paragraph<'_>;

    fn as_input_state(&mut self) -> Option<&mut dyn InputWidget> {
        None
    }
}

pub trait InputWidget {
    fn update_cursor_blink(&mut self);
}
