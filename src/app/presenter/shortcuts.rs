use super::PresenterIntent;
use crate::input::{Key, Named};

/// Map an unmodified key to the presenter intent it triggers, if any.
pub fn intent_for_key(key: &Key) -> Option<PresenterIntent> {
    let intent = match key {
        Key::Named(Named::ArrowRight | Named::PageDown | Named::Space) => PresenterIntent::Advance,
        Key::Named(Named::ArrowLeft | Named::PageUp) => PresenterIntent::Retreat,
        Key::Named(Named::Home) => PresenterIntent::First,
        Key::Named(Named::End) => PresenterIntent::Last,
        Key::Named(Named::Escape) => PresenterIntent::ExitToSlide,
        Key::Character(ch) => match ch {
            'j' | 'l' => PresenterIntent::Advance,
            'k' | 'h' => PresenterIntent::Retreat,
            'G' => PresenterIntent::Last,
            'o' => PresenterIntent::ExitToOverview,
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
    fn navigator_only_keys_are_unmapped() {
        for ch in ['g', 'O', 'p', 'P'] {
            assert_eq!(intent_for_key(&Key::Character(ch)), None, "{ch}");
        }
        assert_eq!(
            intent_for_key(&Key::Character('o')),
            Some(PresenterIntent::ExitToOverview)
        );
    }
}
