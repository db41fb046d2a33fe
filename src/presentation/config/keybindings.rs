use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// Presenter actions a key sequence can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    Next,
    Previous,
    ToggleMenu,
    CloseMenu,
    CursorUp,
    CursorDown,
    Confirm,
    Back,
    Cycle,
    Toggle,
    Increase,
    Decrease,
    FocusNext,
    FocusPrevious,
    ToggleNotes,
}

impl Action {
    /// Actions that stay live while the slide menu is open
    pub fn is_menu_action(self) -> bool {
        matches!(
            self,
            Action::Quit
                | Action::Suspend
                | Action::ToggleMenu
                | Action::CloseMenu
                | Action::CursorUp
                | Action::CursorDown
                | Action::Confirm
        )
    }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, cmd)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, cmd))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    /// Action bound to a single key press
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![normalize(key)]).copied()
    }
}

/// Reduce a terminal key event to the shape produced by `parse_key_event`
///
/// Terminals report Shift on symbols such as `+` or `[`; bindings are written
/// without it, so it is dropped for anything that is not a letter.
pub fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    match key.code {
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => modifiers.remove(KeyModifiers::SHIFT),
        KeyCode::BackTab => modifiers.insert(KeyModifiers::SHIFT),
        _ => {}
    }
    KeyEvent::new(key.code, modifiers)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };

    raw.split("><")
        .map(|seq| {
            seq.strip_prefix('<')
                .or_else(|| seq.strip_suffix('>'))
                .unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("<q>", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("<ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("<right>", KeyCode::Right, KeyModifiers::NONE)]
    #[case("<esc>", KeyCode::Esc, KeyModifiers::NONE)]
    #[case("<->", KeyCode::Char('-'), KeyModifiers::NONE)]
    #[case("<+>", KeyCode::Char('+'), KeyModifiers::NONE)]
    #[case("<]>", KeyCode::Char(']'), KeyModifiers::NONE)]
    #[case("<shift-a>", KeyCode::Char('A'), KeyModifiers::SHIFT)]
    fn test_parse_single_key(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(
            parse_key_sequence(raw),
            Ok(vec![KeyEvent::new(code, modifiers)])
        );
    }

    #[test]
    fn test_parse_multi_key_sequence() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_sequence("<ctrl-c").is_err());
        assert!(parse_key_sequence("<nope>").is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let keybindings: KeyBindings = json5::from_str(r#"{ "<right>": "Next", "<q>": "Quit" }"#)?;
        assert_eq!(
            keybindings.action_for(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::Next)
        );
        assert_eq!(keybindings.len(), 2);
        Ok(())
    }

    #[test]
    fn test_normalize_drops_shift_on_symbols() {
        assert_eq!(
            normalize(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE)
        );
        assert_eq!(
            normalize(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)
        );
    }

    #[test]
    fn test_menu_actions() {
        assert!(Action::Confirm.is_menu_action());
        assert!(Action::Quit.is_menu_action());
        assert!(!Action::Next.is_menu_action());
        assert!(!Action::Toggle.is_menu_action());
    }
}
