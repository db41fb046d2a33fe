//! Deck frame
//!
//! Slide area with an optional notes pane, a navigation footer, the status
//! line, and the slide menu drawn over everything when open.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        components::{menu::MenuComponent, slide::SlideComponent},
        config::Theme,
        widgets::{
            shrink_text::ShrinkText,
            status_bar::{StatusBarWidget, ViewContext as StatusBarViewContext},
        },
    },
};

pub const KEY_HINT: &str = "←/→ slides · m menu · n notes · q quit";
pub const COMPACT_KEY_HINT: &str = "m menu · q quit";

#[derive(Debug, Clone)]
pub struct DeckComponent {
    theme: Theme,
    slide: SlideComponent,
    menu: MenuComponent,
}

impl DeckComponent {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            slide: SlideComponent::new(theme),
            menu: MenuComponent::new(theme),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [main, footer, status] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let note = state
            .deck
            .current_slide()
            .and_then(|slide| slide.note.as_deref())
            .filter(|_| state.system.show_notes);
        let slide_area = match note {
            Some(note) => {
                let [slide_area, notes_area] = if state.is_compact() {
                    Layout::vertical([Constraint::Fill(3), Constraint::Fill(1)]).areas(main)
                } else {
                    Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1)]).areas(main)
                };
                self.notes(note, frame, notes_area);
                slide_area
            }
            None => main,
        };

        let padded = Block::new().padding(Padding::new(2, 2, 1, 0));
        self.slide.view(state, frame, padded.inner(slide_area));
        self.footer(state, frame, footer);

        let key_hint = if state.is_compact() {
            COMPACT_KEY_HINT
        } else {
            KEY_HINT
        };
        let ctx = StatusBarViewContext {
            theme: &self.theme,
            key_hint,
        };
        frame.render_widget(StatusBarWidget::new(&state.status_bar, ctx), status);

        self.menu.view(state, frame, main);
    }

    fn notes(&self, note: &str, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.muted)
            .title(Span::styled("Notes", self.theme.accent));
        let inner = block.inner(area);
        let text: Text =
            ShrinkText::new(note, usize::from(inner.width), usize::from(inner.height)).into();
        frame.render_widget(Paragraph::new(text).style(self.theme.text).block(block), area);
    }

    fn footer(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let position = state.deck.position_label();
        let next = if state.is_compact() {
            "m Menu".to_string()
        } else {
            format!("{} →", state.deck.next_label())
        };
        let [gauge, position_area, next_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(position.chars().count() as u16 + 2),
            Constraint::Length(next.chars().count() as u16 + 1),
        ])
        .areas(area);

        frame.render_widget(
            LineGauge::default()
                .filled_style(self.theme.progress)
                .unfilled_style(self.theme.muted)
                .label("")
                .ratio(state.deck.progress().clamp(0.0, 1.0)),
            gauge,
        );
        frame.render_widget(
            Line::styled(position, self.theme.text).alignment(Alignment::Center),
            position_area,
        );
        let next_style = if state.deck.is_drill_active() {
            self.theme.warn
        } else {
            self.theme.accent
        };
        frame.render_widget(
            Line::styled(next, next_style).alignment(Alignment::Right),
            next_area,
        );
    }
}
