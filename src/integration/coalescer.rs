/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Pure decision function: whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

/// What one loop iteration asked of the terminal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameRequests {
    render_requests: usize,
    saw_render_event: bool,
    resizes: Vec<(u16, u16)>,
}

impl FrameRequests {
    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    pub fn saw_render(&mut self) {
        self.saw_render_event = true;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.resizes.push((width, height));
    }

    pub fn should_render(&self) -> bool {
        Coalescer::decide_render(self.render_requests, self.saw_render_event)
    }

    /// Size to apply, if any resize arrived that differs from `last`
    pub fn final_size(&self, last: Option<(u16, u16)>) -> Option<(u16, u16)> {
        Coalescer::decide_resize(last, &self.resizes).filter(|size| Some(*size) != last)
    }
}

#[cfg(test)]
mod tests {
    use super::{Coalescer, FrameRequests};
    use pretty_assertions::assert_eq;

    #[test]
    fn decide_render_table_tests() {
        assert!(!Coalescer::decide_render(0, false));
        assert!(Coalescer::decide_render(1, false));
        assert!(Coalescer::decide_render(2, false));
        assert!(Coalescer::decide_render(0, true));
        assert!(Coalescer::decide_render(3, true));
    }

    #[test]
    fn decide_resize_last_only_table_tests() {
        assert_eq!(Coalescer::decide_resize(None, &[]), None);
        assert_eq!(Coalescer::decide_resize(None, &[(10, 10)]), Some((10, 10)));
        assert_eq!(
            Coalescer::decide_resize(None, &[(10, 10), (20, 30)]),
            Some((20, 30))
        );
        assert_eq!(
            Coalescer::decide_resize(Some((5, 5)), &[(100, 200)]),
            Some((100, 200))
        );
        assert_eq!(Coalescer::decide_resize(Some((5, 5)), &[]), Some((5, 5)));
    }

    #[test]
    fn frame_requests_collapse() {
        let mut requests = FrameRequests::default();
        assert!(!requests.should_render());
        assert_eq!(requests.final_size(Some((80, 24))), None);

        requests.request_render();
        requests.request_render();
        requests.resize(100, 30);
        requests.resize(120, 40);
        assert!(requests.should_render());
        assert_eq!(requests.final_size(Some((80, 24))), Some((120, 40)));
        assert_eq!(requests.final_size(Some((120, 40))), None);
    }
}
