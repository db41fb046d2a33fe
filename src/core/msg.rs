pub mod system;
pub mod widget;

use crate::model::deck;
use system::SystemMsg;
use widget::WidgetMsg;

/// Domain messages representing presenter intent
/// These are processed by the update function; key decoding happens earlier in the translator
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Process and chrome (delegated to SystemState / StatusBar)
    System(SystemMsg),

    // Slide navigation and the slide menu (delegated to Deck)
    Deck(deck::Message),

    // Controls of the interactive widget mounted on the current slide
    Widget(WidgetMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Widget(msg) => msg.is_frequent(),
            Msg::Deck(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Widget(WidgetMsg::Ticked { now: None }).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Deck(deck::Message::Advanced).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Deck(deck::Message::Jumped { index: 2 }),
            Msg::Deck(deck::Message::Jumped { index: 2 })
        );
        assert_ne!(
            Msg::Deck(deck::Message::Advanced),
            Msg::Deck(deck::Message::Retreated)
        );
    }
}
