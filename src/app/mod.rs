//! The two page controllers and the messages/effects they exchange with a host.

mod effects;
mod messages;
pub mod navigator;
pub mod presenter;

pub use effects::{Effect, PresenterWindow, WindowGeometry};
pub use messages::{Message, PresenterMessage};
pub use navigator::{NavIntent, Navigator};
pub use presenter::{PresenterController, PresenterIntent};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::ManualClock;
    use crate::config::DeckConfig;
    use crate::input::KeyInput;
    use crate::page::{DeckPosition, Target};
    use crate::session::MemorySessionStore;

    fn key(input: &str) -> Message {
        Message::KeyPressed {
            input: KeyInput::dom(input),
            at_millis: 0,
        }
    }

    #[test]
    fn audience_and_presenter_walkthrough() {
        let mut nav = Navigator::new(DeckPosition::new(3, 10), DeckConfig::default());
        assert!(nav.reduce(key("ArrowRight")).contains(&Effect::Navigate(Target::Slide(4))));
        assert!(nav.reduce(key("End")).contains(&Effect::Navigate(Target::Slide(10))));

        let mut first = Navigator::new(DeckPosition::new(1, 10), DeckConfig::default());
        for _ in 0..2 {
            assert!(
                !first
                    .reduce(key("ArrowLeft"))
                    .iter()
                    .any(|effect| matches!(effect, Effect::Navigate(_)))
            );
        }

        let store = MemorySessionStore::new();
        let clock = ManualClock::at(0);
        let mut presenter =
            PresenterController::new(DeckPosition::new(10, 10), store, clock, &DeckConfig::default());
        let right = PresenterMessage::KeyPressed(KeyInput::dom("ArrowRight"));
        assert!(presenter.reduce(right).is_empty());
        let escape = PresenterMessage::KeyPressed(KeyInput::dom("Escape"));
        assert_eq!(
            presenter
                .reduce(escape)
                .iter()
                .find_map(|effect| match effect {
                    Effect::Navigate(target) => Some(target.href()),
                    _ => None,
                })
                .as_deref(),
            Some("../slide-10.html")
        );
    }
}
