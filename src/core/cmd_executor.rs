use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::assets,
};

/// Command executor that bridges Elm commands to the host channels
#[derive(Clone, Default)]
pub struct CmdExecutor {
    raw_msg_sender: Option<mpsc::UnboundedSender<RawMsg>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor with no channels attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the sender that carries side-effect results back into the runtime
    pub fn set_raw_msg_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_msg_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ProbeImage { slot, path } => {
                let result = assets::probe_image(path).map_err(|e| format!("{e:#}"));
                match &result {
                    Ok(format) => log::debug!("Probed {} as {}", path.display(), format),
                    Err(e) => log::debug!("Probe failed: {}", e),
                }
                if let Some(tx) = &self.raw_msg_sender {
                    tx.send(RawMsg::ImageProbed {
                        slot: *slot,
                        path: path.clone(),
                        result,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: raw message sender not configured; dropping probe result for {}",
                        path.display()
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending render
                    let _ = rtx.try_send(());
                } else {
                    log::debug!("CmdExecutor: render sender not configured; dropping RequestRender");
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            },
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::ProbeImage { slot, .. } => format!("ProbeImage({slot})"),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{infrastructure::assets::ImageFormat, model::hardware::ImageSlot};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_execute_resize() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        }))?;

        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
        Ok(())
    }

    #[test]
    fn test_render_requests_coalesce_in_bounded_channel() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (render_tx, mut render_rx) = mpsc::channel::<()>(1);
        executor.set_render_request_sender(render_tx);

        executor.execute_command(&Cmd::RequestRender)?;
        executor.execute_command(&Cmd::RequestRender)?;

        assert!(render_rx.try_recv().is_ok());
        assert!(render_rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_probe_missing_file_reports_error() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        executor.set_raw_msg_sender(raw_tx);
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("raspberry-pi.png");

        executor.execute_command(&Cmd::ProbeImage {
            slot: ImageSlot::RaspberryPi,
            path: path.clone(),
        })?;

        match raw_rx.try_recv()? {
            RawMsg::ImageProbed {
                slot,
                path: probed,
                result,
            } => {
                assert_eq!(slot, ImageSlot::RaspberryPi);
                assert_eq!(probed, path);
                assert!(result.is_err());
            }
            other => panic!("Expected ImageProbed, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_probe_existing_image_reports_format() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        executor.set_raw_msg_sender(raw_tx);
        let dir = tempfile::tempdir()?;
        let path: PathBuf = dir.path().join("alfa-adapter.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0])?;

        executor.execute_command(&Cmd::ProbeImage {
            slot: ImageSlot::Adapter,
            path,
        })?;

        assert!(matches!(
            raw_rx.try_recv()?,
            RawMsg::ImageProbed {
                result: Ok(ImageFormat::Jpeg),
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_execute_commands_runs_in_order() -> Result<()> {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);
        let (render_tx, mut render_rx) = mpsc::channel::<()>(1);
        executor.set_render_request_sender(render_tx);

        executor.execute_commands(&[
            Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 50,
            }),
            Cmd::RequestRender,
        ])?;

        assert!(render_rx.try_recv().is_ok());
        assert!(tui_rx.try_recv().is_ok());
        Ok(())
    }

    #[test]
    fn test_execute_commands_log() -> Result<()> {
        let executor = CmdExecutor::new();
        let log = executor.execute_commands(&[
            Cmd::RequestRender,
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }),
        ])?;
        assert_eq!(
            log,
            vec!["✓ Executed: RequestRender", "✓ Executed: Tui(Resize)"]
        );
        Ok(())
    }
}
