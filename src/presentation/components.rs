//! Components
//!
//! Components place widgets on the frame. They hold only the theme and read
//! everything else from `AppState` at render time.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::config::Theme};

pub mod deck;
pub mod menu;
pub mod slide;

pub use deck::DeckComponent;

/// Collection of all components
pub struct Components {
    pub deck: DeckComponent,
}

impl Components {
    pub fn new(theme: Theme) -> Self {
        Self {
            deck: DeckComponent::new(theme),
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        self.deck.view(state, frame, frame.area());
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
