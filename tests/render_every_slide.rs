use hawkdeck::{
    core::{
        msg::{widget::WidgetMsg, Msg},
        state::AppState,
        update::update,
    },
    domain::registry::SlideRegistry,
    infrastructure::config::Config,
    presentation::components::Components,
};
use ratatui::{backend::TestBackend, Terminal};
use rstest::rstest;

fn screen(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    let components = Components::default();
    terminal
        .draw(|frame| components.render(frame, state))
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[rstest]
#[case(120, 36)]
#[case(60, 20)]
#[case(20, 6)]
fn test_every_visible_slide_draws(#[case] width: u16, #[case] height: u16) {
    let slides = SlideRegistry::builtin()
        .expect("built-in deck parses")
        .visible();
    for index in 0..slides.len() {
        let mut state = AppState::new(slides.clone(), Config::default(), index);
        state.system.viewport = Some((width, height));
        let text = screen(&state, width, height);
        let position = state.deck.position_label();
        if width >= 60 {
            assert!(text.contains(&position), "slide {index} misses {position}");
        }
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_every_drill_leaf_draws(#[case] tile: u8) {
    let slides = SlideRegistry::builtin()
        .expect("built-in deck parses")
        .visible();
    let state = AppState::new(slides, Config::default(), 5);
    let (state, _) = update(Msg::Widget(WidgetMsg::Select(tile)), state);
    let title = state.frame_title();
    for (width, height) in [(120, 36), (40, 12)] {
        let text = screen(&state, width, height);
        if width == 120 {
            assert!(text.contains(&title), "leaf {tile} misses its title");
        }
    }
}

#[test]
fn test_hidden_slides_render_when_loaded_directly() {
    // hidden slides are only reachable from a deck that shows them
    let slides = SlideRegistry::builtin()
        .expect("built-in deck parses")
        .all()
        .iter()
        .cloned()
        .map(|mut slide| {
            slide.hidden = false;
            slide
        })
        .collect::<Vec<_>>();
    for index in 0..slides.len() {
        let state = AppState::new(slides.clone(), Config::default(), index);
        let title = state.frame_title();
        let text = screen(&state, 120, 36);
        assert!(text.contains(&title), "slide {index}: {title}");
    }
}
