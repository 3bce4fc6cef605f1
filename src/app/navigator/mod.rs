//! Audience-page navigation.
//!
//! Keyboard and touch input become [`NavIntent`]s, intents resolve to page
//! [`Target`]s against the loaded [`DeckPosition`], and the reducer emits the
//! [`Effect`]s the host has to carry out.

mod shortcuts;
mod touch;

pub use shortcuts::intent_for_key;
pub use touch::classify_swipe;

use super::effects::{Effect, PresenterWindow};
use super::messages::Message;
use crate::config::DeckConfig;
use crate::input::KeyInput;
use crate::page::{DeckPosition, Target};
use tracing::{debug, info};

/// What an input asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
    First,
    Last,
    /// `g`: jump to the first slide only if it repeats a recent `g`.
    FirstOnDoublePress,
    Overview,
    OpenPresenter,
    /// Reload the slide's own page, leaving any alternate view.
    CanonicalSlide,
}

impl NavIntent {
    /// Resolve a stateless intent to its page target. `None` means there is
    /// nowhere to go: a clamped target equal to the current slide, or the
    /// double-press intent, which needs the navigator's timing state.
    pub fn resolve(self, position: DeckPosition) -> Option<Target> {
        let current = i64::from(position.current());
        match self {
            NavIntent::Advance => go_target(position, current + 1),
            NavIntent::Retreat => go_target(position, current - 1),
            NavIntent::First => go_target(position, 1),
            NavIntent::Last => go_target(position, i64::from(position.total())),
            NavIntent::FirstOnDoublePress => None,
            NavIntent::Overview => Some(Target::Overview),
            NavIntent::OpenPresenter => Some(Target::PresenterSlide(position.current())),
            NavIntent::CanonicalSlide => Some(Target::Slide(position.current())),
        }
    }
}

/// Clamp `n` into the deck; `None` when that lands on the current slide.
pub fn go_target(position: DeckPosition, n: i64) -> Option<Target> {
    let target = position.clamp(n);
    (target != position.current()).then_some(Target::Slide(target))
}

#[derive(Debug, Clone)]
pub struct Navigator {
    position: DeckPosition,
    config: DeckConfig,
    last_g_press: Option<u64>,
    touch_start_x: Option<f64>,
}

impl Navigator {
    pub fn new(position: DeckPosition, config: DeckConfig) -> Self {
        Self {
            position,
            config,
            last_g_press: None,
            touch_start_x: None,
        }
    }

    pub fn position(&self) -> DeckPosition {
        self.position
    }

    pub fn current(&self) -> u32 {
        self.position.current()
    }

    pub fn total(&self) -> u32 {
        self.position.total()
    }

    pub fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::KeyPressed { input, at_millis } => {
                self.handle_key(&input, at_millis, &mut effects);
            }
            Message::TouchStarted { screen_x } => self.handle_touch_started(screen_x),
            Message::TouchEnded { screen_x } => self.handle_touch_ended(screen_x, &mut effects),
            Message::Go(n) => effects.extend(self.go(n)),
        }

        effects
    }

    /// Navigate to slide `n`, clamped into the deck. Going to the current
    /// slide does nothing.
    pub fn go(&self, n: i64) -> Option<Effect> {
        let target = go_target(self.position, n)?;
        info!(from = self.current(), to = %target, "Navigating to slide");
        Some(Effect::Navigate(target))
    }

    fn handle_key(&mut self, input: &KeyInput, at_millis: u64, effects: &mut Vec<Effect>) {
        let Some(key) = input.unmodified_key() else {
            return;
        };
        let Some(intent) = intent_for_key(key) else {
            return;
        };
        effects.push(Effect::PreventDefault);

        let intent = match intent {
            NavIntent::FirstOnDoublePress => {
                let repeated = self.register_g_press(at_millis);
                if !repeated {
                    return;
                }
                NavIntent::First
            }
            other => other,
        };
        debug!(?intent, current = self.current(), "Resolved key intent");
        self.apply_intent(intent, effects);
    }

    /// Record a `g` press; true when it follows another within the window.
    fn register_g_press(&mut self, at_millis: u64) -> bool {
        let repeated = self.last_g_press.is_some_and(|last| {
            at_millis.saturating_sub(last) < self.config.double_press_window_ms
        });
        self.last_g_press = Some(at_millis);
        repeated
    }

    fn apply_intent(&self, intent: NavIntent, effects: &mut Vec<Effect>) {
        let Some(target) = intent.resolve(self.position) else {
            debug!(?intent, "Already there; nothing to navigate");
            return;
        };

        if intent == NavIntent::OpenPresenter {
            info!(%target, "Opening presenter window");
            effects.push(Effect::OpenPresenterWindow(PresenterWindow::for_target(
                target,
                &self.config,
            )));
        } else {
            info!(from = self.current(), to = %target, "Navigating");
            effects.push(Effect::Navigate(target));
        }
    }
}
