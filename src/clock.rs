//! Time sources and the elapsed-time display format.

use chrono::{Local, Utc};

/// Milliseconds in one second.
const MILLIS_PER_SEC: u64 = 1000;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Current wall-clock time in a human-readable, locale-appropriate form.
    fn wall_clock_label(&self) -> String;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn wall_clock_label(&self) -> String {
        Local::now().format("%X").to_string()
    }
}

/// Whole seconds elapsed between `start_millis` and `now_millis`, never negative.
pub fn elapsed_secs(start_millis: u64, now_millis: u64) -> u64 {
    now_millis.saturating_sub(start_millis) / MILLIS_PER_SEC
}

/// Render seconds as `HH:MM:SS`. Hours keep counting past 24 and widen past 99.
pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hand-driven clock; clones share the same time.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct ManualClock {
        now: Rc<Cell<u64>>,
    }

    impl ManualClock {
        pub(crate) fn at(millis: u64) -> Self {
            Self {
                now: Rc::new(Cell::new(millis)),
            }
        }

        pub(crate) fn set(&self, millis: u64) {
            self.now.set(millis);
        }

        pub(crate) fn advance(&self, millis: u64) {
            self.now.set(self.now.get() + millis);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            self.now.get()
        }

        fn wall_clock_label(&self) -> String {
            chrono::DateTime::from_timestamp_millis(self.now.get() as i64)
                .map(|at| at.format("%H:%M:%S").to_string())
                .unwrap_or_default()
        }
    }
}
