//! Host-independent keyboard input.
//!
//! Keys arrive as DOM `KeyboardEvent.key` strings and are folded into a small
//! enum so the shortcut tables can match on them exhaustively.

/// Named keys the runtime reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Named {
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Escape,
    Space,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Named(Named),
    Character(char),
    Unidentified(String),
}

impl Key {
    /// Parse a DOM key value. Characters stay case-sensitive (`g` vs `G`).
    pub fn from_dom(value: &str) -> Self {
        let named = match value {
            "ArrowLeft" => Some(Named::ArrowLeft),
            "ArrowRight" => Some(Named::ArrowRight),
            "PageUp" => Some(Named::PageUp),
            "PageDown" => Some(Named::PageDown),
            "Home" => Some(Named::Home),
            "End" => Some(Named::End),
            "Escape" => Some(Named::Escape),
            " " | "Spacebar" => Some(Named::Space),
            _ => None,
        };
        if let Some(named) = named {
            return Key::Named(named);
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Key::Character(ch),
            _ => Key::Unidentified(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        meta: false,
        shift: false,
    };

    /// True when a browser or OS shortcut is likely in progress. Shift does
    /// not count: it is how `G`, `O` and `P` are typed.
    pub fn reserved_by_host(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Shorthand for an unmodified key given as a DOM key value.
    pub fn dom(value: &str) -> Self {
        Self::plain(Key::from_dom(value))
    }

    /// The key to dispatch on, or `None` when modifiers reserve the event.
    pub fn unmodified_key(&self) -> Option<&Key> {
        (!self.modifiers.reserved_by_host()).then_some(&self.key)
    }
}
