use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::{init, update},
};

/// Integration point between the Elm loop and the host (terminal, filesystem)
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: Option<mpsc::UnboundedSender<Msg>>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: Option<mpsc::UnboundedSender<RawMsg>>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let cmd_queue = init(&initial_state).into();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue,
            msg_tx: Some(msg_tx),
            msg_rx,
            raw_msg_tx: Some(raw_msg_tx),
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with command executor
    ///
    /// Side-effect results (image probes) come back through the runtime's own raw channel.
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor();
        runtime
    }

    /// Set command executor wired to this runtime's raw channel
    pub fn set_executor(&mut self) {
        let mut executor = CmdExecutor::new();
        if let Some(raw_tx) = &self.raw_msg_tx {
            executor.set_raw_msg_sender(raw_tx.clone());
        }
        self.cmd_executor = Some(executor);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> Option<mpsc::UnboundedSender<Msg>> {
        self.msg_tx.clone()
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use set_executor() first.".to_string())
        }
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_render_request_sender(render_sender);
            Ok(())
        } else {
            Err("No executor available. Use set_executor() first.".to_string())
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> Option<mpsc::UnboundedSender<RawMsg>> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state they arrive in,
        // so each one is applied before the next is translated
        loop {
            let raw_msg = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => raw_msg,
                None => match self.raw_msg_rx.try_recv() {
                    Ok(raw_msg) => raw_msg,
                    Err(_) => break,
                },
            };
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            current_slide: self.state.deck.current_index(),
            visible_slides: self.state.deck.visible_count(),
            is_menu_open: self.state.deck.menu().is_open(),
            is_drill_active: self.state.deck.is_drill_active(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub current_slide: usize,
    pub visible_slides: usize,
    pub is_menu_open: bool,
    pub is_drill_active: bool,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            msg::{system::SystemMsg, widget::WidgetMsg},
            state::slide::Widget,
        },
        domain::slide::{Interactive, SlideDescriptor, SlideKind},
        infrastructure::config::Config,
        model::{deck, hardware::ImageSlot, smart_image::ImageState},
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn slides() -> Vec<SlideDescriptor> {
        vec![
            SlideDescriptor::new(1).kind(SlideKind::Cover).title("Cover"),
            SlideDescriptor::new(2)
                .title("Architecture")
                .interactive(Interactive::ZoomArchitecture),
            SlideDescriptor::new(3).kind(SlideKind::Prototype).title("Prototype"),
        ]
    }

    fn create_test_runtime() -> Runtime {
        let config = Config::embedded().expect("embedded config parses");
        Runtime::new(AppState::new(slides(), config, 0))
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_runtime_creation() {
        let mut runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 1);
        assert_eq!(stats.visible_slides, 3);
        assert!(!stats.has_executor);
        assert_eq!(runtime.pending_commands(), vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_send_message() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Deck(deck::Message::MenuToggled));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        runtime.process_all_messages();
        let stats = runtime.get_stats();
        assert_eq!(stats.queued_messages, 0);
        assert!(stats.is_menu_open);
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_raw_keys_drive_drill_down() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(key(KeyCode::Right));
        runtime.send_raw_msg(key(KeyCode::Char('2')));
        runtime.process_all_messages();
        assert!(runtime.get_stats().is_drill_active);
        assert_eq!(runtime.state().frame_title(), "Preprocessing");

        // Next exits the leaf instead of leaving the slide
        runtime.send_raw_msg(key(KeyCode::Right));
        runtime.process_all_messages();
        let stats = runtime.get_stats();
        assert_eq!(stats.current_slide, 1);
        assert!(!stats.is_drill_active);
    }

    #[test]
    fn test_external_senders() {
        let mut runtime = create_test_runtime();
        let raw_tx = runtime.get_raw_sender().expect("raw sender");
        let msg_tx = runtime.get_sender().expect("msg sender");

        raw_tx.send(RawMsg::Resize(120, 40)).expect("send raw");
        msg_tx
            .send(Msg::Widget(WidgetMsg::Ticked { now: None }))
            .expect("send msg");
        runtime.process_all_messages();

        assert_eq!(runtime.state().system.viewport, Some((120, 40)));
    }

    #[test]
    fn test_execute_without_executor_fails() {
        let mut runtime = create_test_runtime();
        assert!(runtime.execute_pending_commands().is_err());
        assert!(runtime.add_tui_sender(mpsc::unbounded_channel().0).is_err());
    }

    #[test]
    fn test_image_probe_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("raspberry-pi.jpg"), [0xFF, 0xD8, 0xFF, 0xE0]).expect("write jpeg");

        let config = Config {
            assets_dir: dir.path().to_path_buf(),
            ..Config::embedded().expect("embedded config parses")
        };
        let mut runtime = Runtime::new_with_executor(AppState::new(slides(), config, 2));

        // Each cycle executes probes whose results arrive on the raw channel
        for _ in 0..4 {
            runtime.run_update_cycle().expect("update cycle");
        }

        let Widget::Hardware(hardware) = &runtime.state().slide.widget else {
            panic!("expected hardware widget");
        };
        assert_eq!(
            hardware.image(ImageSlot::RaspberryPi).state(),
            &ImageState::Loaded {
                path: dir.path().join("raspberry-pi.jpg")
            }
        );
        assert_eq!(hardware.image(ImageSlot::Adapter).state(), &ImageState::NotFound);
    }
}
