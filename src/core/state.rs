pub mod slide;
pub mod system;

use crate::{
    domain::slide::SlideDescriptor,
    infrastructure::config::Config,
    model::{deck::Deck, status_bar::StatusBar},
};
use slide::{SlideState, WidgetContext};
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub deck: Deck,
    pub slide: SlideState,
    pub system: SystemState,
    pub status_bar: StatusBar,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Deck over `slides` (hidden ones are dropped) starting at visible index `start`
    pub fn new(
        slides: impl IntoIterator<Item = SlideDescriptor>,
        config: Config,
        start: usize,
    ) -> Self {
        let mut state = Self {
            deck: Deck::new(slides).starting_at(start),
            config: ConfigState { config },
            ..Default::default()
        };
        state.remount();
        state
    }

    pub fn widget_context(&self) -> WidgetContext {
        let config = &self.config.config;
        WidgetContext {
            assets_dir: config.assets_dir.clone(),
            count_up: config.count_up(),
            live_demo_interval: config.live_demo_interval(),
        }
    }

    pub fn is_compact(&self) -> bool {
        self.system.is_compact(self.config.config.compact_width)
    }

    /// Title shown in the slide frame
    pub fn frame_title(&self) -> String {
        self.slide.title_override.clone().unwrap_or_else(|| {
            self.deck
                .current_slide()
                .map(SlideDescriptor::display_title)
                .unwrap_or_default()
        })
    }

    /// Replaces the widget with a fresh one for the current slide
    pub fn remount(&mut self) {
        let ctx = self.widget_context();
        self.slide = self
            .deck
            .current_slide()
            .map(|slide| SlideState::mount(slide, &ctx))
            .unwrap_or_default();
    }
}
