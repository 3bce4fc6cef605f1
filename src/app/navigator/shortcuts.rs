use super::NavIntent;
use crate::input::{Key, Named};

/// Map an unmodified key to the navigator intent it triggers, if any.
pub fn intent_for_key(key: &Key) -> Option<NavIntent> {
    let intent = match key {
        Key::Named(Named::ArrowRight | Named::PageDown | Named::Space) => NavIntent::Advance,
        Key::Named(Named::ArrowLeft | Named::PageUp) => NavIntent::Retreat,
        Key::Named(Named::Home) => NavIntent::First,
        Key::Named(Named::End) => NavIntent::Last,
        Key::Named(Named::Escape) => NavIntent::CanonicalSlide,
        Key::Character(ch) => match ch {
            'j' | 'l' => NavIntent::Advance,
            'k' | 'h' => NavIntent::Retreat,
            'G' => NavIntent::Last,
            'g' => NavIntent::FirstOnDoublePress,
            'o' | 'O' => NavIntent::Overview,
            'p' | 'P' => NavIntent::OpenPresenter,
            _ => return None,
        },
        Key::Unidentified(_) => return None,
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_keys_are_case_sensitive() {
        assert_eq!(intent_for_key(&Key::Character('j')), Some(NavIntent::Advance));
        assert_eq!(intent_for_key(&Key::Character('J')), None);
        assert_eq!(intent_for_key(&Key::Character('g')), Some(NavIntent::FirstOnDoublePress));
        assert_eq!(intent_for_key(&Key::Character('G')), Some(NavIntent::Last));
    }
}
