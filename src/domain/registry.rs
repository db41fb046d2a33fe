//! Slide registry
//!
//! Holds the ordered slide descriptors and the visible subset that navigation
//! works on. The built-in HawkShield deck is embedded at compile time; other
//! decks can be loaded from a JSON5 file with the same record shape.

use std::collections::HashSet;
use std::path::Path;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::domain::slide::SlideDescriptor;

const BUILTIN_DECK: &str = include_str!("../../.config/deck.json5");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideRegistry {
    slides: Vec<SlideDescriptor>,
}

impl SlideRegistry {
    /// Builds a registry, rejecting decks without any visible slide
    pub fn new(slides: Vec<SlideDescriptor>) -> Result<Self> {
        if !slides.iter().any(|slide| !slide.hidden) {
            bail!("Deck has no visible slides");
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                log::warn!("Duplicate slide id {} in deck", slide.id);
            }
        }

        Ok(Self { slides })
    }

    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_DECK).wrap_err("Failed to load built-in deck")
    }

    pub fn parse(source: &str) -> Result<Self> {
        let slides: Vec<SlideDescriptor> =
            json5::from_str(source).map_err(|e| eyre!("Invalid deck: {e}"))?;
        Self::new(slides)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read deck {}", path.display()))?;
        let registry = Self::parse(&source)
            .wrap_err_with(|| format!("Failed to load deck {}", path.display()))?;
        log::info!(
            "Loaded deck {} ({} slides, {} visible)",
            path.display(),
            registry.len(),
            registry.visible_count()
        );
        Ok(registry)
    }

    /// All descriptors in declaration order, hidden ones included
    pub fn all(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Navigable sequence: declaration order with hidden slides removed
    pub fn visible(&self) -> Vec<SlideDescriptor> {
        self.slides
            .iter()
            .filter(|slide| !slide.hidden)
            .cloned()
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.slides.iter().filter(|slide| !slide.hidden).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slide::{Interactive, SlideKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_deck_loads() -> Result<()> {
        let registry = SlideRegistry::builtin()?;
        assert_eq!(registry.len(), 19);
        assert_eq!(registry.visible_count(), 15);
        Ok(())
    }

    #[test]
    fn test_builtin_visible_order() -> Result<()> {
        let ids: Vec<u32> = SlideRegistry::builtin()?
            .visible()
            .iter()
            .map(|slide| slide.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 11, 12, 18, 13, 14, 15, 17, 16, 19]);
        Ok(())
    }

    #[test]
    fn test_builtin_hidden_slides_are_filtered() -> Result<()> {
        let registry = SlideRegistry::builtin()?;
        let hidden: Vec<u32> = registry
            .all()
            .iter()
            .filter(|slide| slide.hidden)
            .map(|slide| slide.id)
            .collect();
        assert_eq!(hidden, vec![7, 8, 9, 10]);
        assert!(registry.visible().iter().all(|slide| !slide.hidden));
        Ok(())
    }

    #[test]
    fn test_builtin_parses_types_and_interactives() -> Result<()> {
        let registry = SlideRegistry::builtin()?;
        let find = |id: u32| {
            registry
                .all()
                .iter()
                .find(|slide| slide.id == id)
                .cloned()
        };
        assert_eq!(find(1).and_then(|s| s.kind), Some(SlideKind::Cover));
        assert_eq!(
            find(6).and_then(|s| s.interactive),
            Some(Interactive::ZoomArchitecture)
        );
        assert_eq!(
            find(17).and_then(|s| s.interactive),
            Some(Interactive::EthicsCompliance)
        );
        assert_eq!(find(13).and_then(|s| s.kind), Some(SlideKind::Prototype));
        assert_eq!(find(19).and_then(|s| s.kind), Some(SlideKind::Qa));
        Ok(())
    }

    #[test]
    fn test_deck_without_visible_slides_is_rejected() {
        let result = SlideRegistry::parse("[{ id: 1, hidden: true }]");
        assert!(result.is_err());
        assert!(SlideRegistry::parse("[]").is_err());
    }

    #[test]
    fn test_malformed_deck_is_rejected() {
        let result = SlideRegistry::parse("[{ title: \"no id\" }]");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("deck.json5");
        std::fs::write(&path, r#"[{ id: 1, title: "Only" }, { id: 2, hidden: true }]"#)?;

        let registry = SlideRegistry::from_path(&path)?;
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.visible_count(), 1);
        assert_eq!(registry.visible()[0].display_title(), "Only");
        Ok(())
    }

    #[test]
    fn test_from_missing_path_fails() {
        let result = SlideRegistry::from_path(Path::new("/definitely/not/here.json5"));
        assert!(result.is_err());
    }
}
