use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui,
    presentation::{components::Components, config::Theme},
};

/// Draws the whole frame from a state snapshot
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            components: Components::new(theme),
        }
    }

    /// Theme resolved from the state's configured styles
    pub fn for_state(state: &AppState) -> Self {
        Self::new(Theme::from_styles(&state.config.config.styles))
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::slide::SlideDescriptor, infrastructure::config::Config,
        infrastructure::tui::test::TestTui,
    };

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let state = AppState::new(
            [SlideDescriptor::new(1).title("Hello deck")],
            Config::default(),
            0,
        );
        Renderer::for_state(&state).render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.screen_text().contains("Hello deck"));
        Ok(())
    }
}
