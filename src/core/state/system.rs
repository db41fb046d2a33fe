use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Last known terminal size; unknown until the first resize
    pub viewport: Option<(u16, u16)>,
    pub show_notes: bool,
}

impl SystemState {
    /// Compact layout applies once the terminal is known to be narrower than the breakpoint
    pub fn is_compact(&self, compact_width: u16) -> bool {
        self.viewport
            .is_some_and(|(width, _)| width < compact_width)
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Some((width, height));
                vec![
                    Cmd::Tui(TuiCommand::Resize { width, height }),
                    Cmd::RequestRender,
                ]
            }

            SystemMsg::ToggleNotes => {
                self.show_notes = !self.show_notes;
                vec![Cmd::RequestRender]
            }

            // Status messages live in the status bar model
            SystemMsg::ShowHint { .. } | SystemMsg::ShowError { .. } | SystemMsg::ClearStatus => {
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quit() {
        let mut system = SystemState::default();
        assert_eq!(system.update(SystemMsg::Quit), vec![]);
        assert!(system.should_quit);
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert_eq!(system.update(SystemMsg::Resume), vec![Cmd::RequestRender]);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(120, 40));
        assert_eq!(system.viewport, Some((120, 40)));
        assert_eq!(
            cmds[0],
            Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_compact_breakpoint() {
        let mut system = SystemState::default();
        assert!(!system.is_compact(80));
        system.update(SystemMsg::Resize(79, 24));
        assert!(system.is_compact(80));
        system.update(SystemMsg::Resize(80, 24));
        assert!(!system.is_compact(80));
    }

    #[test]
    fn test_toggle_notes() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ToggleNotes);
        assert!(system.show_notes);
        system.update(SystemMsg::ToggleNotes);
        assert!(!system.show_notes);
    }
}
