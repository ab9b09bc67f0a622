// Behaviour of a send, driven through the public API.
use chat_box::input::InputState;
use chat_box::output::ChatBox;
use chat_box::{
    try_send_message, ChatView, Config, DisplayEntry, DisplaySurface, Flow, SendOutcome,
    TextEntry,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

fn surfaces() -> (InputState, ChatBox) {
    let config = Config::default();
    let mut chat = ChatBox::new(&config);
    chat.set_viewport(Rect::new(0, 0, 20, 5));
    (InputState::new(&config), chat)
}

fn texts(chat: &ChatBox) -> Vec<&str> {
    chat.entries().iter().map(DisplayEntry::text).collect()
}

fn type_text(view: &mut ChatView, text: &str) {
    for c in text.chars() {
        view.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn press_enter(view: &mut ChatView) -> Flow {
    view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
}

#[test]
fn blank_input_is_a_silent_no_op() {
    for raw in ["", " ", "   ", "\t", " \u{a0} ", "\u{feff}", " \u{feff} "] {
        let (mut input, mut chat) = surfaces();
        input.set_value(raw.to_string());

        assert_eq!(try_send_message(&mut input, &mut chat), SendOutcome::Ignored);
        assert_eq!(input.value(), raw);
        assert!(chat.entries().is_empty());
    }
}

#[test]
fn next_line_char_alone_is_sent() {
    let (mut input, mut chat) = surfaces();
    input.set_value("\u{85}".to_string());

    assert_eq!(try_send_message(&mut input, &mut chat), SendOutcome::Sent);
    assert_eq!(texts(&chat), ["\u{85}"]);
    assert_eq!(input.value(), "");
}

#[test]
fn untrimmed_text_becomes_the_last_entry() {
    let (mut input, mut chat) = surfaces();
    chat.append(DisplayEntry::new("earlier"));
    input.set_value("  hi  ".to_string());

    assert_eq!(try_send_message(&mut input, &mut chat), SendOutcome::Sent);
    assert_eq!(texts(&chat), ["earlier", "  hi  "]);
    assert_eq!(input.value(), "");
    assert_eq!(chat.scroll_position(), chat.scroll_extent());
}

#[test]
fn second_send_without_typing_adds_nothing() {
    let (mut input, mut chat) = surfaces();
    input.set_value("hello".to_string());

    assert_eq!(try_send_message(&mut input, &mut chat), SendOutcome::Sent);
    assert_eq!(try_send_message(&mut input, &mut chat), SendOutcome::Ignored);
    assert_eq!(texts(&chat), ["hello"]);
}

#[test]
fn entries_keep_send_order() {
    let (mut input, mut chat) = surfaces();
    for text in ["a", "b"] {
        input.set_value(text.to_string());
        try_send_message(&mut input, &mut chat);
    }
    assert_eq!(texts(&chat), ["a", "b"]);
}

#[test]
fn send_reveals_newest_after_scrolling_away() {
    let (mut input, mut chat) = surfaces();
    for i in 0..10 {
        chat.append(DisplayEntry::new(format!("line {}", i)));
    }
    chat.scroll_up(5);
    assert!(chat.scroll_position() < chat.scroll_extent());

    input.set_value("newest".to_string());
    try_send_message(&mut input, &mut chat);

    assert_eq!(chat.scroll_position(), chat.scroll_extent());
    assert_eq!(chat.visible_lines().last().map(String::as_str), Some("newest"));
}

#[test]
fn keyboard_round_trip_through_the_view() {
    let mut view = ChatView::new(&Config::default());
    view.resize(Rect::new(0, 0, 40, 12));

    type_text(&mut view, "  hi  ");
    assert_eq!(press_enter(&mut view), Flow::Continue);
    assert_eq!(texts(view.chat()), ["  hi  "]);
    assert_eq!(view.input().value(), "");

    type_text(&mut view, "   ");
    press_enter(&mut view);
    assert_eq!(texts(view.chat()), ["  hi  "]);
    assert_eq!(view.input().value(), "   ");
}

#[test]
fn ctrl_c_quits_without_sending() {
    let mut view = ChatView::new(&Config::default());
    type_text(&mut view, "draft");
    let flow = view.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert_eq!(flow, Flow::Quit);
    assert!(view.chat().entries().is_empty());
    assert_eq!(view.input().value(), "draft");
}
