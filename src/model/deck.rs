use crate::domain::slide::{Interactive, SlideDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Advanced,
    Retreated,
    Jumped { index: usize },
    DrillActivityChanged { active: bool },
    MenuToggled,
    MenuClosed,
    MenuCursorMoved { delta: isize },
    MenuConfirmed,
}

/// What the caller has to do after a deck message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    SlideChanged { from: usize, to: usize },
    /// The drill-down on the current slide should return to its overview
    ExitDrillRequested,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    open: bool,
    cursor: usize,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Deck controller over the visible slides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<SlideDescriptor>,
    current: usize,
    drill_active: bool,
    menu: Menu,
}

impl Deck {
    /// Hidden descriptors are dropped here and never reachable afterwards
    pub fn new(slides: impl IntoIterator<Item = SlideDescriptor>) -> Self {
        Self {
            slides: slides.into_iter().filter(|slide| !slide.hidden).collect(),
            ..Default::default()
        }
    }

    /// Starts on `index`, clamped into the visible range
    pub fn starting_at(mut self, index: usize) -> Self {
        self.current = index.min(self.slides.len().saturating_sub(1));
        self
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn visible_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.get(self.current)
    }

    pub fn is_drill_active(&self) -> bool {
        self.drill_active
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Fraction of the deck shown so far, `(index + 1) / visible_count`
    pub fn progress(&self) -> f64 {
        if self.slides.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.slides.len() as f64
    }

    /// Position indicator, e.g. `3 / 15`
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.slides.len())
    }

    /// Advance intercepts only while the architecture drill-down is open
    pub fn intercepts_advance(&self) -> bool {
        self.drill_active
            && self
                .current_slide()
                .is_some_and(|slide| slide.interactive == Some(Interactive::ZoomArchitecture))
    }

    pub fn next_label(&self) -> &'static str {
        if self.intercepts_advance() {
            "Exit Drill"
        } else {
            "Next"
        }
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        match message {
            Message::Advanced => {
                if self.intercepts_advance() {
                    return Outcome::ExitDrillRequested;
                }
                let len = self.slides.len();
                if len == 0 {
                    return Outcome::Unchanged;
                }
                self.go_to((self.current + 1) % len)
            }
            Message::Retreated => {
                let len = self.slides.len();
                if len == 0 {
                    return Outcome::Unchanged;
                }
                self.go_to((self.current + len - 1) % len)
            }
            Message::Jumped { index } => {
                if index >= self.slides.len() {
                    return Outcome::Unchanged;
                }
                self.menu.open = false;
                self.go_to(index)
            }
            Message::DrillActivityChanged { active } => {
                self.drill_active = active;
                Outcome::Unchanged
            }
            Message::MenuToggled => {
                self.menu.open = !self.menu.open;
                if self.menu.open {
                    self.menu.cursor = self.current;
                }
                Outcome::Unchanged
            }
            Message::MenuClosed => {
                self.menu.open = false;
                Outcome::Unchanged
            }
            Message::MenuCursorMoved { delta } => {
                if self.menu.open && !self.slides.is_empty() {
                    let last = self.slides.len() - 1;
                    self.menu.cursor = self.menu.cursor.saturating_add_signed(delta).min(last);
                }
                Outcome::Unchanged
            }
            Message::MenuConfirmed => {
                if !self.menu.open {
                    return Outcome::Unchanged;
                }
                let index = self.menu.cursor;
                self.update(Message::Jumped { index })
            }
        }
    }

    fn go_to(&mut self, index: usize) -> Outcome {
        let from = self.current;
        if from == index {
            // staying put keeps the mounted drill-down and its leaf
            return Outcome::Unchanged;
        }
        self.current = index;
        // the next slide mounts a fresh drill-down at its overview
        self.drill_active = false;
        Outcome::SlideChanged { from, to: index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slide::SlideKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn deck_of(count: u32) -> Deck {
        Deck::new((1..=count).map(|id| SlideDescriptor::new(id).title(format!("S{id}"))))
    }

    fn architecture_deck() -> Deck {
        Deck::new([
            SlideDescriptor::new(1).kind(SlideKind::Cover),
            SlideDescriptor::new(6)
                .title("System Architecture")
                .interactive(Interactive::ZoomArchitecture),
            SlideDescriptor::new(11).title("Results"),
        ])
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(4)]
    fn test_advancing_remaining_slides_wraps_to_zero(#[case] start: usize) {
        let mut deck = deck_of(5).starting_at(start);
        for _ in 0..(deck.visible_count() - start) {
            deck.update(Message::Advanced);
        }
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_retreat_from_first_wraps_to_last() {
        let mut deck = deck_of(5);
        let outcome = deck.update(Message::Retreated);
        assert_eq!(outcome, Outcome::SlideChanged { from: 0, to: 4 });
        assert_eq!(deck.current_index(), 4);
    }

    #[test]
    fn test_hidden_slides_are_never_navigable() {
        let mut deck = Deck::new([
            SlideDescriptor::new(1),
            SlideDescriptor::new(2).hidden(),
            SlideDescriptor::new(3),
            SlideDescriptor::new(4).hidden(),
        ]);
        assert_eq!(deck.visible_count(), 2);

        let mut seen = vec![];
        for _ in 0..6 {
            seen.push(deck.current_slide().map(|s| s.id));
            deck.update(Message::Advanced);
        }
        assert!(seen.iter().all(|id| matches!(id, Some(1) | Some(3))));
    }

    #[test]
    fn test_advance_in_drill_requests_exit_without_moving() {
        let mut deck = architecture_deck().starting_at(1);
        deck.update(Message::DrillActivityChanged { active: true });
        assert_eq!(deck.next_label(), "Exit Drill");

        assert_eq!(deck.update(Message::Advanced), Outcome::ExitDrillRequested);
        assert_eq!(deck.current_index(), 1);

        deck.update(Message::DrillActivityChanged { active: false });
        assert_eq!(
            deck.update(Message::Advanced),
            Outcome::SlideChanged { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_retreat_is_not_intercepted_by_drill() {
        let mut deck = architecture_deck().starting_at(1);
        deck.update(Message::DrillActivityChanged { active: true });
        assert_eq!(
            deck.update(Message::Retreated),
            Outcome::SlideChanged { from: 1, to: 0 }
        );
        assert!(!deck.is_drill_active());
    }

    #[test]
    fn test_jump_to_current_slide_keeps_drill() {
        let mut deck = architecture_deck().starting_at(1);
        deck.update(Message::DrillActivityChanged { active: true });
        deck.update(Message::MenuToggled);
        assert_eq!(deck.update(Message::MenuConfirmed), Outcome::Unchanged);
        assert!(!deck.menu().is_open());
        assert!(deck.is_drill_active());
        assert_eq!(deck.update(Message::Advanced), Outcome::ExitDrillRequested);
    }

    #[test]
    fn test_stale_drill_flag_does_not_intercept_other_slides() {
        let mut deck = architecture_deck();
        deck.update(Message::DrillActivityChanged { active: true });
        assert!(!deck.intercepts_advance());
        assert_eq!(deck.next_label(), "Next");
        assert_eq!(
            deck.update(Message::Advanced),
            Outcome::SlideChanged { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_progress_and_position() {
        let deck = deck_of(4).starting_at(1);
        assert_eq!(deck.progress(), 0.5);
        assert_eq!(deck.position_label(), "2 / 4");
    }

    #[test]
    fn test_menu_jump() {
        let mut deck = deck_of(5);
        deck.update(Message::MenuToggled);
        assert!(deck.menu().is_open());
        assert_eq!(deck.menu().cursor(), 0);

        deck.update(Message::MenuCursorMoved { delta: 3 });
        assert_eq!(
            deck.update(Message::MenuConfirmed),
            Outcome::SlideChanged { from: 0, to: 3 }
        );
        assert!(!deck.menu().is_open());
    }

    #[test]
    fn test_menu_cursor_is_clamped() {
        let mut deck = deck_of(3).starting_at(1);
        deck.update(Message::MenuToggled);
        deck.update(Message::MenuCursorMoved { delta: -5 });
        assert_eq!(deck.menu().cursor(), 0);
        deck.update(Message::MenuCursorMoved { delta: 10 });
        assert_eq!(deck.menu().cursor(), 2);
    }

    #[test]
    fn test_menu_closed_ignores_cursor_and_confirm() {
        let mut deck = deck_of(3);
        deck.update(Message::MenuCursorMoved { delta: 2 });
        assert_eq!(deck.update(Message::MenuConfirmed), Outcome::Unchanged);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut deck = deck_of(3);
        assert_eq!(deck.update(Message::Jumped { index: 3 }), Outcome::Unchanged);
    }

    #[test]
    fn test_empty_deck_does_not_move() {
        let mut deck = Deck::default();
        assert_eq!(deck.update(Message::Advanced), Outcome::Unchanged);
        assert_eq!(deck.update(Message::Retreated), Outcome::Unchanged);
        assert_eq!(deck.progress(), 0.0);
    }

    #[test]
    fn test_single_slide_deck_stays_put() {
        let mut deck = deck_of(1);
        assert_eq!(deck.update(Message::Advanced), Outcome::Unchanged);
        assert_eq!(deck.current_index(), 0);
    }
}
