use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::content::{SpecRow, ADAPTER_SPECS, DATA_PATH, PI_SPECS},
    model::hardware::{Hardware, HardwareMode, ImageSlot},
    presentation::{
        config::Theme,
        widgets::{
            cards::{StatRow, StatView},
            smart_image::SmartImageWidget,
        },
    },
};

/// Prototype slide body: figures, device cards and the on-device data path
pub struct HardwareWidget<'a> {
    hardware: &'a Hardware,
    theme: &'a Theme,
}

impl<'a> HardwareWidget<'a> {
    pub fn new(hardware: &'a Hardware, theme: &'a Theme) -> Self {
        Self { hardware, theme }
    }

    fn mode_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Mode ", self.theme.muted)];
        for (i, mode) in [HardwareMode::Bench, HardwareMode::Live].into_iter().enumerate() {
            let style = if mode == self.hardware.mode() {
                self.theme.selected
            } else {
                self.theme.text
            };
            spans.push(Span::styled(format!(" {} {mode} ", i + 1), style));
        }
        Line::from(spans)
    }

    fn figures(&self) -> Vec<StatView> {
        let mode = self.hardware.mode();
        [
            ("Latency", mode.latency()),
            ("Power", mode.power()),
            ("Cost", mode.cost()),
        ]
        .into_iter()
        .map(|(label, value)| StatView {
            label: label.to_string(),
            value: value.to_string(),
            sub: mode.to_string(),
        })
        .collect()
    }

    fn render_device(&self, slot: ImageSlot, specs: &[SpecRow], area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.muted)
            .title(Span::styled(slot.to_string(), self.theme.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let [image, rows] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);
        SmartImageWidget::new(self.hardware.image(slot), self.theme).render(image, buf);
        let lines = specs
            .iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{:<15}", row.key), self.theme.muted),
                    Span::styled(row.value, self.theme.text),
                ])
            })
            .collect::<Vec<_>>();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(rows, buf);
    }

    fn data_path(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(DATA_PATH.len() * 2);
        for (i, step) in DATA_PATH.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", self.theme.muted));
            }
            spans.push(Span::styled(*step, self.theme.accent));
        }
        Line::from(spans)
    }
}

impl Widget for HardwareWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [mode, figures, devices, path] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(StatRow::height()),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        self.mode_line().render(mode, buf);
        StatRow::new(self.figures(), self.theme).render(figures, buf);

        let [pi, adapter] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(devices);
        self.render_device(ImageSlot::RaspberryPi, &PI_SPECS, pi, buf);
        self.render_device(ImageSlot::Adapter, &ADAPTER_SPECS, adapter, buf);

        Paragraph::new(self.data_path())
            .wrap(Wrap { trim: true })
            .render(path, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::{model::hardware::Message, presentation::widgets::smart_image::NOT_FOUND_TEXT};

    fn render(hardware: &Hardware) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 24);
        let mut buf = Buffer::empty(area);
        HardwareWidget::new(hardware, &theme).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_live_mode_figures() {
        let mut hardware = Hardware::new(Path::new("assets"));
        assert!(render(&hardware).contains("< 0.8s"));
        hardware.update(Message::ModeToggled);
        let text = render(&hardware);
        assert!(text.contains("< 1.0s"));
        assert!(text.contains("~7.5W"));
    }

    #[test]
    fn test_missing_images_show_placeholder() {
        let mut hardware = Hardware::new(Path::new("assets"));
        for name in ["alfa-adapter.png", "alfa-adapter.jpg"] {
            hardware.update(Message::ImageProbed {
                slot: ImageSlot::Adapter,
                path: PathBuf::from("assets").join(name),
                loaded: false,
            });
        }
        let text = render(&hardware);
        assert!(text.contains(NOT_FOUND_TEXT));
        assert!(text.contains("Loading…"));
        assert!(text.contains("Realtek RTL8812AU"));
    }
}
