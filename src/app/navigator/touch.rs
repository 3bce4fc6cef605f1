use super::{Navigator, NavIntent};
use crate::app::effects::Effect;
use tracing::debug;

/// Classify a horizontal touch gesture. Finger moving left advances.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold_px: f64) -> Option<NavIntent> {
    let displacement = end_x - start_x;
    if displacement.abs() > threshold_px {
        Some(if displacement < 0.0 {
            NavIntent::Advance
        } else {
            NavIntent::Retreat
        })
    } else {
        None
    }
}

impl Navigator {
    pub(super) fn handle_touch_started(&mut self, screen_x: f64) {
        self.touch_start_x = Some(screen_x);
    }

    pub(super) fn handle_touch_ended(&mut self, screen_x: f64, effects: &mut Vec<Effect>) {
        let Some(start_x) = self.touch_start_x.take() else {
            return;
        };
        match classify_swipe(start_x, screen_x, self.config.swipe_threshold_px) {
            Some(intent) => {
                debug!(?intent, start_x, end_x = screen_x, "Swipe");
                self.apply_intent(intent, effects);
            }
            None => debug!(start_x, end_x = screen_x, "Touch below swipe threshold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_swipe(100.0, 50.0, 50.0), None);
        assert_eq!(classify_swipe(100.0, 150.0, 50.0), None);
        assert_eq!(classify_swipe(100.0, 49.0, 50.0), Some(NavIntent::Advance));
        assert_eq!(classify_swipe(100.0, 151.0, 50.0), Some(NavIntent::Retreat));
    }

    #[test]
    fn nan_coordinates_are_not_swipes() {
        assert_eq!(classify_swipe(f64::NAN, 0.0, 50.0), None);
    }
}
