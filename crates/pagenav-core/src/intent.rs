//! Navigation intents and target resolution.
//!
//! A user interaction is turned into a [`NavIntent`], resolved against the
//! currently active page into a candidate target, and validated against the
//! last page. Nothing here touches controller state.

use strum::Display;

use crate::error::Rejection;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NavIntent {
    /// Previous page.
    Prev,
    /// Next page.
    Next,
    /// An explicit page number, possibly out of range.
    Page(i64),
    /// Jump to the page typed into the jump input.
    Go(String),
    /// The total indicator. Re-asserts the current page.
    Total,
}

impl NavIntent {
    /// Interpret a control label.
    ///
    /// Numeric text is a page number; `Prev`, `Next` and `Go` are the
    /// navigation buttons (`Go` reads `jump_text`); `Total:<n>` is the total
    /// indicator. Anything else is not a navigation.
    pub fn from_label(label: &str, jump_text: &str) -> Option<Self> {
        let label = label.trim();
        if is_numeric(label) {
            return parse_page_input(label).map(Self::Page);
        }
        match label {
            "Prev" => Some(Self::Prev),
            "Next" => Some(Self::Next),
            "Go" => Some(Self::Go(jump_text.to_string())),
            _ if label.starts_with("Total:") => Some(Self::Total),
            _ => None,
        }
    }
}

fn is_numeric(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Parse the leading integer of user input.
///
/// Leading whitespace and a sign are accepted and trailing garbage is
/// ignored, so `" 7"`, `"7abc"` and `"7.9"` all give 7. Input without leading
/// digits gives `None`. Values past the `i64` range saturate.
pub fn parse_page_input(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = digits
        .find(|c: char| !c.is_ascii_digit())
        .map_or(digits, |end| &digits[..end]);
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolve an intent to a candidate page.
///
/// `old_page` is the page marked active in the last render. Intents that are
/// relative to it resolve to `None` when nothing is active.
pub fn resolve_target(intent: &NavIntent, old_page: Option<u64>) -> Option<i64> {
    let old = old_page.and_then(|page| i64::try_from(page).ok());
    match intent {
        NavIntent::Page(page) => Some(*page),
        NavIntent::Prev => old.map(|page| page - 1),
        NavIntent::Next => old.map(|page| page.saturating_add(1)),
        NavIntent::Go(text) => parse_page_input(text),
        NavIntent::Total => old,
    }
}

/// Accept only candidates in `[1, last_page]`.
pub fn validate_target(candidate: Option<i64>, last_page: u64) -> Result<u64, Rejection> {
    let page = candidate.ok_or(Rejection::NotANumber)?;
    if u64::try_from(page).is_ok_and(|p| p > last_page) {
        return Err(Rejection::BeyondLastPage { page, last_page });
    }
    if page <= 0 {
        return Err(Rejection::NotPositive { page });
    }
    u64::try_from(page).map_err(|_| Rejection::NotPositive { page })
}
