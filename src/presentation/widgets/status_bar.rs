use crate::{model::status_bar::StatusBar, presentation::config::Theme};

use ratatui::{prelude::*, widgets::Paragraph};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    /// Shown on the right when there is room
    pub key_hint: &'a str,
}

pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    ctx: ViewContext<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, ctx: ViewContext<'a>) -> Self {
        Self { status_bar, ctx }
    }

    fn message_style(&self) -> Style {
        if self.status_bar.is_error() {
            self.ctx.theme.alert
        } else {
            self.ctx.theme.warn
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let message = self.status_bar.message().clone().unwrap_or_default();
        let hint_width = u16::try_from(self.ctx.key_hint.chars().count()).unwrap_or(u16::MAX);
        let [message_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

        Paragraph::new(Span::styled(message, self.message_style())).render(message_area, buf);
        Paragraph::new(Span::styled(self.ctx.key_hint, self.ctx.theme.muted))
            .alignment(Alignment::Right)
            .render(hint_area, buf);
    }
}
