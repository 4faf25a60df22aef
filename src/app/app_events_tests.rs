//! Tests for app_events

use crate::app::Focus;
use crate::layout::LayoutRegions;
use crate::test_utils::test_helpers::{app_with_input, key, key_with_mods, test_app};
use proptest::prelude::*;
use ratatui::crossterm::event::{
    KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

const INVALID_MESSAGE: &str =
    "Invalid time. Use Morning, Mid-morning, Afternoon, Mid-afternoon, Dinner, or After Dinner.";

fn type_text(app: &mut crate::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn with_button_regions(app: &mut crate::app::App) {
    app.layout_regions = LayoutRegions {
        input_field: Some(Rect::new(0, 1, 40, 3)),
        suggest_button: Some(Rect::new(0, 6, 11, 1)),
        reset_button: Some(Rect::new(13, 6, 9, 1)),
        suggestion_label: Some(Rect::new(0, 7, 40, 4)),
    };
}

#[test]
fn test_typing_goes_to_input() {
    let mut app = test_app();

    type_text(&mut app, "morning");

    assert_eq!(app.input_text(), "morning");
}

#[test]
fn test_enter_in_input_submits() {
    let mut app = test_app();
    type_text(&mut app, "morning");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.view.suggestion_label, "Try having some Eggs!");
    assert!(app.view.input.error.is_none());
    assert_eq!(app.input_text(), "morning");
}

#[test]
fn test_enter_with_uppercase_input() {
    let mut app = test_app();
    type_text(&mut app, "MID-AFTERNOON");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.view.suggestion_label, "Maybe a slice of Cake?");
}

#[test]
fn test_enter_with_empty_input_shows_error() {
    let mut app = test_app();
    app.view.suggestion_label = "old".to_string();

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(
        app.view.input.error.as_deref(),
        Some("Please enter a time of day.")
    );
    assert_eq!(app.view.suggestion_label, "");
}

#[test]
fn test_enter_with_unknown_input_shows_error() {
    let mut app = test_app();
    type_text(&mut app, "xyz");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.view.input.error.as_deref(), Some(INVALID_MESSAGE));
    assert_eq!(app.view.suggestion_label, "");
}

#[test]
fn test_ctrl_m_submits_instead_of_adding_line() {
    let mut app = test_app();
    type_text(&mut app, "xyz");

    app.handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));
    type_text(&mut app, "morning");

    assert_eq!(app.view.input.textarea.lines().len(), 1);
    assert_eq!(app.input_text(), "xyzmorning");
    assert_eq!(app.view.input.error.as_deref(), Some(INVALID_MESSAGE));
}

#[test]
fn test_submitted_text_matches_field() {
    let mut app = test_app();
    type_text(&mut app, "xyz");
    app.handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));
    app.handle_key_event(key_with_mods(KeyCode::Char('a'), KeyModifiers::CONTROL));
    app.handle_key_event(key_with_mods(KeyCode::Char('k'), KeyModifiers::CONTROL));
    type_text(&mut app, "morning");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.view.input.textarea.lines(), ["morning"]);
    assert_eq!(app.view.suggestion_label, "Try having some Eggs!");
    assert!(app.view.input.error.is_none());
}

#[test]
fn test_ctrl_r_resets_after_suggestion() {
    let mut app = test_app();
    type_text(&mut app, "morning");
    app.handle_key_event(key(KeyCode::Enter));

    app.handle_key_event(key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL));

    assert_eq!(app.input_text(), "");
    assert_eq!(app.view.suggestion_label, "");
    assert!(app.view.input.error.is_none());
}

#[test]
fn test_tab_cycles_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::SuggestButton);

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::ResetButton);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::SuggestButton);
}

#[test]
fn test_enter_on_suggest_button() {
    let mut app = app_with_input("dinner");
    app.focus = Focus::SuggestButton;

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(
        app.view.suggestion_label,
        "Pasta sounds like a good dinner option."
    );
}

#[test]
fn test_space_on_reset_button() {
    let mut app = app_with_input("dinner");
    app.focus = Focus::ResetButton;

    app.handle_key_event(key(KeyCode::Char(' ')));

    assert_eq!(app.input_text(), "");
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_typing_on_button_is_ignored() {
    let mut app = test_app();
    app.focus = Focus::SuggestButton;

    type_text(&mut app, "abc");

    assert_eq!(app.input_text(), "");
}

#[test]
fn test_arrow_keys_between_buttons() {
    let mut app = test_app();
    app.focus = Focus::SuggestButton;

    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.focus, Focus::ResetButton);

    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.focus, Focus::SuggestButton);

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_quit_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_mouse_click_on_suggest_button() {
    let mut app = app_with_input("afternoon");
    with_button_regions(&mut app);

    app.handle_mouse_event(click(3, 6));

    assert_eq!(app.focus, Focus::SuggestButton);
    assert_eq!(
        app.view.suggestion_label,
        "A Sandwich would be great for lunch."
    );
}

#[test]
fn test_mouse_ignored_when_disabled() {
    let mut app = app_with_input("afternoon");
    app.ui.mouse = false;
    with_button_regions(&mut app);

    app.handle_mouse_event(click(3, 6));

    assert_eq!(app.focus, Focus::InputField);
    assert_eq!(app.view.suggestion_label, "");
}

#[test]
fn test_mouse_right_click_ignored() {
    let mut app = app_with_input("afternoon");
    with_button_regions(&mut app);

    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 3,
        row: 6,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.view.suggestion_label, "");
}

// Typed text ends up in the input field exactly as typed.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_typed_text_reaches_input(text in "[a-zA-Z -]{0,30}") {
        let mut app = test_app();

        type_text(&mut app, &text);

        prop_assert_eq!(app.input_text(), text.as_str());
    }

    #[test]
    fn prop_submit_then_reset_is_idle(text in "[a-zA-Z -]{0,30}") {
        let mut app = test_app();
        type_text(&mut app, &text);
        app.handle_key_event(key(KeyCode::Enter));

        app.handle_key_event(key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL));

        prop_assert_eq!(app.input_text(), "");
        prop_assert_eq!(app.view.suggestion_label.as_str(), "");
        prop_assert!(app.view.input.error.is_none());
    }
}
