use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{system::SystemMsg, widget::WidgetMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    model::deck,
};

pub const COMPACT_HINT_LABEL: &str = "Compact view";
pub const COMPACT_HINT_MESSAGE: &str = "press m to open the slide menu";

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Animations advance on the tick clock
        RawMsg::Tick => vec![Msg::Widget(WidgetMsg::Ticked { now: None })],

        RawMsg::ImageProbed { slot, path, result } => {
            match &result {
                Ok(format) => log::debug!("{slot} image found: {} ({format})", path.display()),
                Err(reason) => log::debug!("{slot} image unavailable: {reason}"),
            }
            vec![Msg::Widget(WidgetMsg::ImageProbed {
                slot,
                path,
                loaded: result.is_ok(),
            })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError {
            label: "Error".to_string(),
            message: error,
        })],

        // Rendering is driven by the runner, not by domain state
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.deck.menu().is_open() {
        translate_menu_keys(key, state)
    } else {
        translate_slide_keys(key, state)
    }
}

/// While the menu is open it owns the keyboard
fn translate_menu_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(key) {
        Some(action) if action.is_menu_action() => translate_action_to_msg(action, state),
        _ => vec![],
    }
}

fn translate_slide_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char(c @ '1'..='9'),
        modifiers: KeyModifiers::NONE,
        ..
    } = key
    {
        // '1'..='9' is ASCII, the subtraction cannot underflow
        return vec![Msg::Widget(WidgetMsg::Select(c as u8 - b'0'))];
    }

    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let menu_open = state.deck.menu().is_open();
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Next | Action::Previous if state.is_compact() => {
            vec![Msg::System(SystemMsg::ShowHint {
                label: COMPACT_HINT_LABEL.to_string(),
                message: COMPACT_HINT_MESSAGE.to_string(),
            })]
        }
        Action::Next => vec![Msg::Deck(deck::Message::Advanced)],
        Action::Previous => vec![Msg::Deck(deck::Message::Retreated)],
        Action::ToggleMenu => vec![Msg::Deck(deck::Message::MenuToggled)],
        Action::CloseMenu if menu_open => vec![Msg::Deck(deck::Message::MenuClosed)],
        // Outside the menu escape backs out of the widget
        Action::CloseMenu => vec![Msg::Widget(WidgetMsg::Back)],
        Action::CursorUp if menu_open => vec![Msg::Deck(deck::Message::MenuCursorMoved { delta: -1 })],
        Action::CursorDown if menu_open => vec![Msg::Deck(deck::Message::MenuCursorMoved { delta: 1 })],
        Action::Confirm if menu_open => vec![Msg::Deck(deck::Message::MenuConfirmed)],
        Action::CursorUp | Action::CursorDown | Action::Confirm => vec![],
        Action::Back => vec![Msg::Widget(WidgetMsg::Back)],
        Action::Cycle => vec![Msg::Widget(WidgetMsg::Cycle)],
        Action::Toggle => vec![Msg::Widget(WidgetMsg::Toggle)],
        Action::Increase => vec![Msg::Widget(WidgetMsg::Adjust { delta: 1 })],
        Action::Decrease => vec![Msg::Widget(WidgetMsg::Adjust { delta: -1 })],
        Action::FocusNext => vec![Msg::Widget(WidgetMsg::Focus { forward: true })],
        Action::FocusPrevious => vec![Msg::Widget(WidgetMsg::Focus { forward: false })],
        Action::ToggleNotes => vec![Msg::System(SystemMsg::ToggleNotes)],
    }
}
