use crate::{
    core::cmd::Cmd,
    core::msg::{system::SystemMsg, widget::WidgetMsg, Msg},
    core::state::AppState,
    model::{deck, drill_down, status_bar},
};

/// Commands to run once the initial state is in place
pub fn init(state: &AppState) -> Vec<Cmd> {
    let mut cmds = state.slide.initial_commands();
    cmds.push(Cmd::RequestRender);
    cmds
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Status line messages (delegated to StatusBar)
        Msg::System(SystemMsg::ShowHint { label, message }) => {
            state
                .status_bar
                .update(status_bar::Message::HintShown { label, message });
            (state, vec![Cmd::RequestRender])
        }
        Msg::System(SystemMsg::ShowError { label, message }) => {
            state
                .status_bar
                .update(status_bar::Message::ErrorShown { label, message });
            (state, vec![Cmd::RequestRender])
        }
        Msg::System(SystemMsg::ClearStatus) => {
            state.status_bar.update(status_bar::Message::Cleared);
            (state, vec![Cmd::RequestRender])
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Navigation (delegated to Deck)
        Msg::Deck(deck_msg) => {
            let commands = update_deck(deck_msg, &mut state);
            (state, commands)
        }

        // Widget controls (delegated to SlideState)
        Msg::Widget(widget_msg) => {
            let redraw = !matches!(widget_msg, WidgetMsg::Ticked { .. });
            let (mut commands, events) = state.slide.update(widget_msg);
            apply_drill_events(events, &mut state);
            if redraw {
                commands.push(Cmd::RequestRender);
            }
            (state, commands)
        }
    }
}

fn update_deck(msg: deck::Message, state: &mut AppState) -> Vec<Cmd> {
    match state.deck.update(msg) {
        deck::Outcome::Unchanged => vec![Cmd::RequestRender],
        deck::Outcome::SlideChanged { from, to } => {
            log::debug!("Slide changed: {from} -> {to}");
            state.status_bar.update(status_bar::Message::Cleared);
            state.remount();
            let mut commands = state.slide.initial_commands();
            commands.push(Cmd::RequestRender);
            commands
        }
        deck::Outcome::ExitDrillRequested => {
            let events = state.slide.exit_drill();
            apply_drill_events(events, state);
            vec![Cmd::RequestRender]
        }
    }
}

/// Feeds drill-down notifications back to the deck and the slide frame
fn apply_drill_events(events: Vec<drill_down::Event>, state: &mut AppState) {
    for event in events {
        match event {
            drill_down::Event::DrillActivityChanged { active } => {
                state
                    .deck
                    .update(deck::Message::DrillActivityChanged { active });
            }
            // The override only holds while drilled in
            drill_down::Event::TitleChanged { title } => {
                state.slide.title_override = state.deck.is_drill_active().then_some(title);
            }
        }
    }
}
