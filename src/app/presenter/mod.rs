//! Presenter-page controller: session timer, wall clock and navigation
//! restricted to presenter pages plus the two exits back to the audience deck.

mod shortcuts;

pub use shortcuts::intent_for_key;

use super::effects::Effect;
use super::messages::PresenterMessage;
use crate::clock::{Clock, elapsed_secs, format_elapsed};
use crate::config::DeckConfig;
use crate::input::KeyInput;
use crate::page::{DeckPosition, Target};
use crate::session::{SessionStore, load_or_seed_start_time, stored_start_time};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterIntent {
    Advance,
    Retreat,
    First,
    Last,
    ExitToSlide,
    ExitToOverview,
}

impl PresenterIntent {
    /// Resolve to a page target. Advance and retreat are guarded at the deck
    /// edges instead of clamped.
    pub fn resolve(self, position: DeckPosition) -> Option<Target> {
        let current = position.current();
        match self {
            PresenterIntent::Advance => (!position.is_last()).then(|| Target::Slide(current + 1)),
            PresenterIntent::Retreat => (!position.is_first()).then(|| Target::Slide(current - 1)),
            PresenterIntent::First => Some(Target::Slide(1)),
            PresenterIntent::Last => Some(Target::Slide(position.total())),
            PresenterIntent::ExitToSlide => Some(Target::ParentSlide(current)),
            PresenterIntent::ExitToOverview => Some(Target::ParentOverview),
        }
    }
}

pub struct PresenterController<S, C> {
    position: DeckPosition,
    store: S,
    clock: C,
    start_time_key: String,
    start_millis: u64,
    last_elapsed_secs: u64,
    running: bool,
}

impl<S: SessionStore, C: Clock> PresenterController<S, C> {
    /// Load (or seed) the session start time. Rendering begins with [`start`].
    ///
    /// [`start`]: PresenterController::start
    pub fn new(position: DeckPosition, store: S, clock: C, config: &DeckConfig) -> Self {
        let start_millis = load_or_seed_start_time(&store, &clock, &config.start_time_key);
        Self {
            position,
            store,
            clock,
            start_time_key: config.start_time_key.clone(),
            start_millis,
            last_elapsed_secs: 0,
            running: false,
        }
    }

    pub fn start_millis(&self) -> u64 {
        self.start_millis
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin ticking and render both displays right away. Restarting a
    /// stopped controller adopts an epoch another page of the same session
    /// may have persisted meanwhile; the in-memory epoch is kept otherwise.
    /// The displayed value never drops.
    pub fn start(&mut self) -> Vec<Effect> {
        if !self.running {
            if let Some(stored) = stored_start_time(&self.store, &self.start_time_key) {
                self.start_millis = stored;
            }
            debug!(key = %self.start_time_key, start = self.start_millis, "Presenter timers started");
        }
        self.running = true;
        self.render()
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("Presenter timers stopped");
        }
        self.running = false;
    }

    pub fn reduce(&mut self, message: PresenterMessage) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            PresenterMessage::KeyPressed(input) => self.handle_key(&input, &mut effects),
            PresenterMessage::Tick => {
                if self.running {
                    effects.extend(self.render());
                }
            }
        }

        effects
    }

    /// Elapsed session time as `HH:MM:SS`; never moves backwards on this page.
    pub fn elapsed_label(&mut self) -> String {
        let elapsed = elapsed_secs(self.start_millis, self.clock.now_millis());
        self.last_elapsed_secs = self.last_elapsed_secs.max(elapsed);
        format_elapsed(self.last_elapsed_secs)
    }

    fn render(&mut self) -> Vec<Effect> {
        vec![
            Effect::RenderTimer(self.elapsed_label()),
            Effect::RenderClock(self.clock.wall_clock_label()),
        ]
    }

    fn handle_key(&self, input: &KeyInput, effects: &mut Vec<Effect>) {
        let Some(intent) = input.unmodified_key().and_then(intent_for_key) else {
            return;
        };
        let Some(target) = intent.resolve(self.position) else {
            debug!(?intent, current = self.position.current(), "At deck edge");
            return;
        };
        info!(?intent, to = %target, "Presenter navigating");
        effects.push(Effect::PreventDefault);
        effects.push(Effect::Navigate(target));
    }
}
