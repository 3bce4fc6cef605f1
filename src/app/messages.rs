use crate::input::KeyInput;

/// Events delivered to the audience-page navigator.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    KeyPressed { input: KeyInput, at_millis: u64 },
    TouchStarted { screen_x: f64 },
    TouchEnded { screen_x: f64 },
    /// Programmatic navigation from an embedding script.
    Go(i64),
}

/// Events delivered to the presenter controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterMessage {
    KeyPressed(KeyInput),
    Tick,
}
