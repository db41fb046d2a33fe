//! Slide menu overlay
//!
//! Lists every visible slide by title; the cursor row is highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::Theme};

#[derive(Debug, Clone)]
pub struct MenuComponent {
    theme: Theme,
}

impl MenuComponent {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let menu = state.deck.menu();
        if !menu.is_open() {
            return;
        }

        let slides = state.deck.slides();
        let items = slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let marker = if i == state.deck.current_index() { "●" } else { " " };
                ListItem::new(format!("{marker} {:>2}. {}", i + 1, slide.display_title()))
            })
            .collect::<Vec<_>>();

        let popup = popup_area(area, items.len());
        let list = List::new(items)
            .style(self.theme.text)
            .highlight_style(self.theme.selected)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.accent)
                    .title(Span::styled(" Slides ", self.theme.title))
                    .title_bottom(Span::styled(" ↑↓ move · Enter jump · Esc close ", self.theme.muted)),
            );
        let mut list_state = ListState::default().with_selected(Some(menu.cursor()));

        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    }
}

/// Centred box wide enough for titles, tall enough for `rows` entries when it fits
fn popup_area(area: Rect, rows: usize) -> Rect {
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let width = area.width.saturating_sub(4).min(72);
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(vertical);
    popup
}
