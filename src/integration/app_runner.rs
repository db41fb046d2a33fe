use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, TuiLike},
    integration::{coalescer::FrameRequests, renderer::Renderer, runtime::Runtime},
};

/// Bounded so repeated render requests within one loop collapse into one
const RENDER_REQUEST_CAPACITY: usize = 1;

/// Drives the runtime from terminal events and draws when asked to
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    render_req_rx: mpsc::Receiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn new(state: AppState, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Result<Self> {
        let renderer = Renderer::for_state(&state);
        let mut runtime = Runtime::new_with_executor(state);

        let (render_req_tx, render_req_rx) = mpsc::channel(RENDER_REQUEST_CAPACITY);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_req_tx).map_err(|e| eyre!(e))?;
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            renderer,
            render_req_rx,
            tui_cmd_rx,
            last_size: None,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Runs until the state asks to quit or the event source closes
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));

        let result = async {
            while self.run_one_cycle().await? {}
            Ok(())
        }
        .await;

        self.tui.lock().await.exit()?;
        result
    }

    /// One loop iteration; returns `false` once the app should stop
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let mut requests = FrameRequests::default();

        let event = {
            let mut tui = self.tui.lock().await;
            tui.next().await
        };
        let Some(event) = event else {
            log::info!("Event source closed");
            return Ok(false);
        };
        match event {
            tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => requests.saw_render(),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("Terminal event error".to_string()))
            }
            tui::Event::Closed => return Ok(false),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => {}
        }

        self.update()?;
        self.flush(&mut requests).await?;

        if self.runtime.state().system.should_suspend {
            {
                let mut tui = self.tui.lock().await;
                tui.suspend()?;
                tui.resume()?;
            }
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.update()?;
            let mut requests = FrameRequests::default();
            requests.saw_render();
            self.flush(&mut requests).await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    fn update(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
        Ok(())
    }

    /// Applies the coalesced resize and draws at most once
    async fn flush(&mut self, requests: &mut FrameRequests) -> Result<()> {
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => requests.resize(width, height),
            }
        }
        while self.render_req_rx.try_recv().is_ok() {
            requests.request_render();
        }

        if let Some((width, height)) = requests.final_size(self.last_size) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.last_size = Some((width, height));
            requests.request_render();
        }

        if requests.should_render() {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }
        Ok(())
    }
}
