use crate::config::DeckConfig;
use crate::page::Target;

/// Describes work that must be performed by the host outside the pure reducers.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Suppress the browser's default action for the triggering event.
    PreventDefault,
    /// Replace the current page. Terminal: nothing after it runs on this page.
    Navigate(Target),
    OpenPresenterWindow(PresenterWindow),
    RenderTimer(String),
    RenderClock(String),
}

/// Screen placement of the window that opens the presenter view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowGeometry {
    pub screen_x: f64,
    pub screen_y: f64,
    pub outer_width: f64,
}

/// A named secondary window; reopening the same name refocuses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterWindow {
    pub target: Target,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl PresenterWindow {
    pub(crate) fn for_target(target: Target, config: &DeckConfig) -> Self {
        Self {
            target,
            name: config.presenter_window_name.clone(),
            width: config.presenter_window_width,
            height: config.presenter_window_height,
        }
    }

    pub fn href(&self) -> String {
        self.target.href()
    }

    /// `window.open` feature string placing the window just right of the opener.
    pub fn features(&self, opener: WindowGeometry) -> String {
        let left = (opener.screen_x + opener.outer_width).round() as i64;
        let top = opener.screen_y.round() as i64;
        format!(
            "width={},height={},left={left},top={top}",
            self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_window_right_of_opener() {
        let window = PresenterWindow::for_target(Target::PresenterSlide(3), &DeckConfig::default());
        let features = window.features(WindowGeometry {
            screen_x: 100.0,
            screen_y: 40.0,
            outer_width: 1280.0,
        });

        assert_eq!(features, "width=1200,height=800,left=1380,top=40");
        assert_eq!(window.name, "presenter");
        assert_eq!(window.href(), "presenter/slide-3.html");
    }
}
