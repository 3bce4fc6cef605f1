//! Client-side runtime for static slide decks.
//!
//! Two controllers, one per page type:
//! - [`Navigator`] drives audience pages (`slide-N.html`): keyboard and swipe
//!   navigation, a double-`g` jump to the first slide, and the presenter window.
//! - [`PresenterController`] drives presenter pages (`presenter/slide-N.html`):
//!   a session timer that survives page loads within a tab, a wall clock, and
//!   navigation limited to presenter pages plus the exits back to the deck.
//!
//! Both are pure reducers returning [`Effect`]s; the `web` module (wasm only)
//! feeds them DOM events and carries the effects out.

pub mod app;
pub mod clock;
pub mod config;
pub mod input;
pub mod logging;
pub mod page;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::{
    Effect, Message, NavIntent, Navigator, PresenterController, PresenterIntent,
    PresenterMessage, PresenterWindow, WindowGeometry,
};
pub use clock::{Clock, SystemClock, format_elapsed};
pub use config::{DeckConfig, LogLevel, parse_config};
pub use page::{DeckPosition, Target};
pub use session::{MemorySessionStore, SessionStore};

#[cfg(target_arch = "wasm32")]
pub use web::{Presenter, Slides, mount_navigator, mount_presenter};
