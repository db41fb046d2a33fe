use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hawkdeck::{
    core::state::AppState,
    domain::registry::SlideRegistry,
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

const ARCHITECTURE: usize = 5;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn chars(s: &str) -> Vec<Event> {
    s.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn builtin_state(start: usize) -> Result<AppState> {
    let registry = SlideRegistry::builtin()?;
    Ok(AppState::new(registry.visible(), Config::embedded()?, start))
}

async fn run(state: AppState, width: u16, events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(width, 36, events)?));
    let mut runner = AppRunner::new(state, tui.clone())?;
    runner.run().await?;
    Ok((runner, tui))
}

#[tokio::test]
async fn test_next_inside_drill_exits_before_advancing() -> Result<()> {
    // open the preprocessing module, then press next twice
    let (runner, tui) = run(builtin_state(ARCHITECTURE)?, 120, chars("2l")).await?;
    let state = runner.runtime().state();
    assert_eq!(state.deck.current_index(), ARCHITECTURE);
    assert!(!state.deck.is_drill_active());
    assert_eq!(state.frame_title(), "System Architecture");
    assert!(tui.lock().await.screen_text().contains("1 Packet Capture"));

    let (runner, _) = run(builtin_state(ARCHITECTURE)?, 120, chars("2ll")).await?;
    assert_eq!(runner.runtime().state().deck.current_index(), ARCHITECTURE + 1);
    Ok(())
}

#[tokio::test]
async fn test_leaf_shows_exit_drill_hint() -> Result<()> {
    let (runner, tui) = run(builtin_state(ARCHITECTURE)?, 120, chars("3")).await?;
    assert!(runner.runtime().state().deck.is_drill_active());
    let screen = tui.lock().await.screen_text();
    assert!(screen.contains("ML Models"));
    assert!(screen.contains("Exit Drill →"));
    Ok(())
}

#[tokio::test]
async fn test_escape_returns_to_overview() -> Result<()> {
    let mut events = chars("1");
    events.push(key(KeyCode::Esc));
    let (runner, _) = run(builtin_state(ARCHITECTURE)?, 120, events).await?;
    let state = runner.runtime().state();
    assert!(!state.deck.is_drill_active());
    assert_eq!(state.deck.current_index(), ARCHITECTURE);
    Ok(())
}

#[tokio::test]
async fn test_menu_jump() -> Result<()> {
    let mut events = chars("m");
    events.extend(chars("jjj"));
    events.push(key(KeyCode::Enter));
    let (runner, tui) = run(builtin_state(0)?, 120, events).await?;
    let state = runner.runtime().state();
    assert_eq!(state.deck.current_index(), 3);
    assert!(!state.deck.menu().is_open());
    assert!(tui.lock().await.screen_text().contains("Problem Statement"));
    Ok(())
}

#[tokio::test]
async fn test_compact_terminal_ignores_next() -> Result<()> {
    let (runner, tui) = run(builtin_state(0)?, 60, chars("ll")).await?;
    assert_eq!(runner.runtime().state().deck.current_index(), 0);
    assert!(tui.lock().await.screen_text().contains("[Compact view]"));
    Ok(())
}

#[tokio::test]
async fn test_previous_from_first_wraps_to_last() -> Result<()> {
    let (runner, tui) = run(builtin_state(0)?, 120, chars("h")).await?;
    let state = runner.runtime().state();
    assert_eq!(state.deck.current_index(), state.deck.visible_count() - 1);
    assert!(tui.lock().await.screen_text().contains("Q&A"));
    Ok(())
}

#[tokio::test]
async fn test_notes_toggle() -> Result<()> {
    let (_, tui) = run(builtin_state(0)?, 120, chars("n")).await?;
    assert!(tui.lock().await.screen_text().contains("Notes"));
    Ok(())
}
