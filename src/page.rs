//! Deck position and the page addresses derived from it.
//!
//! Slide pages live side by side as `slide-N.html` next to `overview.html`;
//! presenter pages live one directory below as `presenter/slide-N.html`.

use tracing::warn;

/// `<body>` data attribute holding the current slide on audience pages.
pub const AUDIENCE_CURRENT_ATTR: &str = "slide";
/// `<body>` data attribute holding the current slide on presenter pages.
pub const PRESENTER_CURRENT_ATTR: &str = "current";
/// `<body>` data attribute holding the slide count on both page types.
pub const TOTAL_ATTR: &str = "total";

/// Position of the loaded page within the deck; `1 <= current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckPosition {
    current: u32,
    total: u32,
}

impl DeckPosition {
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Build a position from the raw page attributes, defaulting each
    /// unreadable value to `1`.
    pub fn from_attributes(current: Option<&str>, total: Option<&str>) -> Self {
        let parsed_current = current.and_then(parse_page_number);
        let parsed_total = total.and_then(parse_page_number);
        if parsed_current.is_none() || parsed_total.is_none() {
            warn!(
                current = current.unwrap_or("<missing>"),
                total = total.unwrap_or("<missing>"),
                "Unreadable deck metadata; defaulting to 1"
            );
        }
        Self::new(parsed_current.unwrap_or(1), parsed_total.unwrap_or(1))
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Clamp an arbitrary slide number into `[1, total]`.
    pub fn clamp(&self, n: i64) -> u32 {
        n.clamp(1, i64::from(self.total)) as u32
    }
}

/// Parse a positive page number the way `parseInt` reads a data attribute:
/// leading whitespace and sign allowed, trailing junk ignored.
pub fn parse_page_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return None;
    }
    // Saturate absurdly long digit runs instead of rejecting them.
    let value = digits[..end].parse::<u32>().unwrap_or(u32::MAX);
    (value > 0).then_some(value)
}

/// Every page address the runtime can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A sibling slide page, relative to the page being shown.
    Slide(u32),
    Overview,
    /// The presenter page for a slide, seen from an audience page.
    PresenterSlide(u32),
    /// The audience page for a slide, seen from a presenter page.
    ParentSlide(u32),
    ParentOverview,
}

impl Target {
    pub fn href(&self) -> String {
        match self {
            Target::Slide(n) => format!("slide-{n}.html"),
            Target::Overview => "overview.html".to_string(),
            Target::PresenterSlide(n) => format!("presenter/slide-{n}.html"),
            Target::ParentSlide(n) => format!("../slide-{n}.html"),
            Target::ParentOverview => "../overview.html".to_string(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_page_number("7"), Some(7));
        assert_eq!(parse_page_number("  12"), Some(12));
        assert_eq!(parse_page_number("+3"), Some(3));
        assert_eq!(parse_page_number("4px"), Some(4));
        assert_eq!(parse_page_number(""), None);
        assert_eq!(parse_page_number("abc"), None);
        assert_eq!(parse_page_number("0"), None);
        assert_eq!(parse_page_number("-2"), None);
        assert_eq!(parse_page_number("99999999999"), Some(u32::MAX));
    }

    #[test]
    fn unreadable_metadata_defaults_to_one() {
        let position = DeckPosition::from_attributes(Some("NaN"), None);
        assert_eq!(position, DeckPosition::new(1, 1));
    }

    #[test]
    fn current_is_clamped_into_total() {
        let position = DeckPosition::from_attributes(Some("12"), Some("10"));
        assert_eq!(position.current(), 10);
        assert!(position.is_last());
        assert!(!position.is_first());

        let position = DeckPosition::from_attributes(Some("3"), Some("x"));
        assert_eq!((position.current(), position.total()), (1, 1));
    }

    #[test]
    fn clamp_handles_extremes() {
        let position = DeckPosition::new(3, 10);
        assert_eq!(position.clamp(-5), 1);
        assert_eq!(position.clamp(0), 1);
        assert_eq!(position.clamp(4), 4);
        assert_eq!(position.clamp(i64::MAX), 10);
    }

    #[test]
    fn targets_render_relative_addresses() {
        assert_eq!(Target::Slide(4).href(), "slide-4.html");
        assert_eq!(Target::Overview.href(), "overview.html");
        assert_eq!(Target::PresenterSlide(2).href(), "presenter/slide-2.html");
        assert_eq!(Target::ParentSlide(10).href(), "../slide-10.html");
        assert_eq!(Target::ParentOverview.to_string(), "../overview.html");
    }
}
