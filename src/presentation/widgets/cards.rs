use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::content::{AttackDefense, Card, Stat, TeamMember},
    presentation::config::Theme,
};

/// Text cards side by side, one bordered block each
pub struct CardGrid<'a> {
    cards: &'a [Card],
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [Card], theme: &'a Theme) -> Self {
        Self { cards, theme }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            return;
        }
        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.cards.len()]).split(area);
        for (card, column) in self.cards.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.muted)
                .title(Span::styled(card.title, self.theme.accent));
            Paragraph::new(card.body)
                .style(self.theme.text)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*column, buf);
        }
    }
}

/// One headline figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView {
    pub label: String,
    pub value: String,
    pub sub: String,
}

impl From<&Stat> for StatView {
    fn from(stat: &Stat) -> Self {
        Self {
            label: stat.label.to_string(),
            value: stat.value.to_string(),
            sub: stat.sub.to_string(),
        }
    }
}

/// Row of headline figures, value centred under its label
pub struct StatRow<'a> {
    stats: Vec<StatView>,
    theme: &'a Theme,
}

impl<'a> StatRow<'a> {
    pub fn new(stats: impl IntoIterator<Item = StatView>, theme: &'a Theme) -> Self {
        Self {
            stats: stats.into_iter().collect(),
            theme,
        }
    }

    pub fn from_stats(stats: &[Stat], theme: &'a Theme) -> Self {
        Self::new(stats.iter().map(StatView::from), theme)
    }

    /// Rows needed to show a figure with its sub line
    pub fn height() -> u16 {
        5
    }
}

impl Widget for StatRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.stats.is_empty() {
            return;
        }
        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.stats.len()]).split(area);
        for (stat, column) in self.stats.iter().zip(columns.iter()) {
            let mut lines = vec![Line::styled(stat.value.clone(), self.theme.title)];
            if !stat.sub.is_empty() {
                lines.push(Line::styled(stat.sub.clone(), self.theme.muted));
            }
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.muted)
                .title(Span::styled(stat.label.clone(), self.theme.text));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(*column, buf);
        }
    }
}

/// Inline chips, e.g. `[Deauth] [Evil Twin]`
pub fn chips<'a, I, S>(labels: I, style: Style) -> Line<'a>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let spans = labels
        .into_iter()
        .flat_map(|label| {
            [
                Span::styled(format!("[{}]", label.into()), style),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Attack to countermeasure cards, three per row
pub struct AttackDefenseGrid<'a> {
    pairs: &'a [AttackDefense],
    theme: &'a Theme,
}

impl<'a> AttackDefenseGrid<'a> {
    pub fn new(pairs: &'a [AttackDefense], theme: &'a Theme) -> Self {
        Self { pairs, theme }
    }
}

impl Widget for AttackDefenseGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        const COLUMNS: usize = 3;
        let rows = self.pairs.len().div_ceil(COLUMNS);
        if rows == 0 {
            return;
        }
        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
        for (chunk, row_area) in self.pairs.chunks(COLUMNS).zip(row_areas.iter()) {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); COLUMNS]).split(*row_area);
            for (pair, cell) in chunk.iter().zip(cells.iter()) {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.muted)
                    .title(Line::from(vec![
                        Span::styled(pair.attack, self.theme.alert),
                        Span::styled(" → ", self.theme.muted),
                        Span::styled(pair.defense, self.theme.ok),
                    ]));
                Paragraph::new(pair.description)
                    .style(self.theme.text)
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(*cell, buf);
            }
        }
    }
}

/// Member cards: initial badge, name and role
pub struct TeamGrid<'a> {
    members: &'a [TeamMember],
    theme: &'a Theme,
}

impl<'a> TeamGrid<'a> {
    pub fn new(members: &'a [TeamMember], theme: &'a Theme) -> Self {
        Self { members, theme }
    }
}

impl Widget for TeamGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.members.is_empty() {
            return;
        }
        let columns =
            Layout::horizontal(vec![Constraint::Fill(1); self.members.len()]).split(area);
        for (member, column) in self.members.iter().zip(columns.iter()) {
            let initial = member.name.chars().next().unwrap_or(' ');
            Paragraph::new(vec![
                Line::styled(format!("( {initial} )"), self.theme.accent),
                Line::default(),
                Line::styled(member.name, self.theme.title),
                Line::styled(member.role, self.theme.muted),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.muted),
            )
            .render(*column, buf);
        }
    }
}
