use ratatui::{prelude::*, widgets::*};

use crate::{
    model::smart_image::{ImageState, SmartImage},
    presentation::config::Theme,
};

pub const NOT_FOUND_TEXT: &str = "Image not found";

/// Terminal stand-in for an image: the resolved file name or a placeholder
pub struct SmartImageWidget<'a> {
    image: &'a SmartImage,
    theme: &'a Theme,
}

impl<'a> SmartImageWidget<'a> {
    pub fn new(image: &'a SmartImage, theme: &'a Theme) -> Self {
        Self { image, theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        match self.image.state() {
            ImageState::Loading { .. } => {
                vec![Line::styled("Loading…", self.theme.muted)]
            }
            ImageState::Loaded { path } => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                vec![
                    Line::styled(format!("▣ {name}"), self.theme.ok),
                    Line::styled(self.image.alt().to_string(), self.theme.muted),
                ]
            }
            ImageState::NotFound => vec![
                Line::styled(NOT_FOUND_TEXT, self.theme.warn),
                Line::styled(self.image.alt().to_string(), self.theme.muted),
            ],
        }
    }
}

impl Widget for SmartImageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(self.theme.muted);
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::smart_image::Message;
    use pretty_assertions::assert_eq;

    fn probe(image: &mut SmartImage, path: &str, loaded: bool) {
        image.update(Message::Probed {
            path: PathBuf::from(path),
            loaded,
        });
    }

    #[test]
    fn test_loading() {
        let theme = Theme::default();
        let image = SmartImage::new("Pi", vec![PathBuf::from("a.png")]);
        let lines = SmartImageWidget::new(&image, &theme).lines();
        assert_eq!(lines[0].to_string(), "Loading…");
    }

    #[test]
    fn test_loaded_shows_file_name() {
        let theme = Theme::default();
        let mut image = SmartImage::new(
            "Pi",
            vec![PathBuf::from("assets/a.png"), PathBuf::from("assets/a.jpg")],
        );
        probe(&mut image, "assets/a.png", false);
        probe(&mut image, "assets/a.jpg", true);
        let lines = SmartImageWidget::new(&image, &theme).lines();
        assert_eq!(lines[0].to_string(), "▣ a.jpg");
    }

    #[test]
    fn test_placeholder_after_chain_exhausted() {
        let theme = Theme::default();
        let mut image = SmartImage::new("Pi", vec![PathBuf::from("a.png")]);
        probe(&mut image, "a.png", false);
        let lines = SmartImageWidget::new(&image, &theme).lines();
        assert_eq!(lines[0].to_string(), NOT_FOUND_TEXT);
        assert_eq!(lines[1].to_string(), "Pi");
    }
}
