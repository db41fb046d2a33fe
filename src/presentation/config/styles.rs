use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse `"bold light red on black"` style strings
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.find(" on ") {
        Some(index) => (&lower[..index], &lower[index + 4..]),
        None => match lower.strip_prefix("on ") {
            Some(background) => ("", background),
            None => (lower.as_str(), ""),
        },
    };

    let (fg, fg_modifiers) = process_color_string(foreground);
    let (bg, bg_modifiers) = process_color_string(background);

    let mut style = Style::default();
    if let Some(fg) = parse_color(&fg) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&bg) {
        style = style.bg(bg);
    }
    style.add_modifier(fg_modifiers | bg_modifiers)
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut words = vec![];
    for word in color_str.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" => modifiers |= Modifier::UNDERLINED,
            "inverse" => modifiers |= Modifier::REVERSED,
            "dim" => modifiers |= Modifier::DIM,
            word => words.push(word),
        }
    }
    (words.join(" "), modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Color::from_str(s).ok()
}

/// Resolved styles the views draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub accent: Style,
    pub muted: Style,
    pub text: Style,
    pub selected: Style,
    pub alert: Style,
    pub ok: Style,
    pub warn: Style,
    pub progress: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            accent: Style::new().fg(Color::Cyan),
            muted: Style::new().fg(Color::DarkGray),
            text: Style::new().fg(Color::Gray),
            selected: Style::new().fg(Color::Black).bg(Color::Cyan),
            alert: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ok: Style::new().fg(Color::LightGreen),
            warn: Style::new().fg(Color::Yellow),
            progress: Style::new().fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Missing names keep the built-in look
    pub fn from_styles(styles: &Styles) -> Self {
        let fallback = Self::default();
        let pick = |name: &str, default: Style| styles.get(name).copied().unwrap_or(default);
        Self {
            title: pick("title", fallback.title),
            accent: pick("accent", fallback.accent),
            muted: pick("muted", fallback.muted),
            text: pick("text", fallback.text),
            selected: pick("selected", fallback.selected),
            alert: pick("alert", fallback.alert),
            ok: pick("ok", fallback.ok),
            warn: pick("warn", fallback.warn),
            progress: pick("progress", fallback.progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("cyan", Style::default().fg(Color::Cyan))]
    #[case("bold cyan", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))]
    #[case("black on cyan", Style::default().fg(Color::Black).bg(Color::Cyan))]
    #[case("dark gray", Style::default().fg(Color::DarkGray))]
    #[case("bold light red", Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))]
    #[case("on blue", Style::default().bg(Color::Blue))]
    #[case("#ff8000", Style::default().fg(Color::Rgb(255, 128, 0)))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_unknown_color_is_ignored() {
        assert_eq!(parse_style("bold nonsense"), Style::default().add_modifier(Modifier::BOLD));
    }

    #[test]
    fn test_theme_falls_back_per_name() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "title": "bold yellow" }"#)?;
        let theme = Theme::from_styles(&styles);
        assert_eq!(
            theme.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        );
        assert_eq!(theme.accent, Theme::default().accent);
        Ok(())
    }
}
