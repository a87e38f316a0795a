/*!
 * Merge direction heuristic for short units.
 */

use super::markup::strip_markup;

/// Which neighbour a short unit should be merged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDirection {
    /// Merge into the previous unit
    Prev,
    /// Merge into the next unit
    Next,
    /// No neighbour to merge with
    None,
}

const TRAILING_QUOTES: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}'];

/// Whether `text` closes a sentence, ignoring markup and trailing quotes
pub fn ends_sentence(text: &str) -> bool {
    let stripped = strip_markup(text);
    stripped
        .trim_end()
        .trim_end_matches(TRAILING_QUOTES)
        .ends_with(['.', '?', '!'])
}

/// Decide the merge direction from the neighbours' texts.
///
/// With both neighbours present, a previous unit that closes a sentence sends
/// the short unit forward to open the next block; otherwise it extends the
/// previous one.
pub fn direction(prev: Option<&str>, next: Option<&str>) -> MergeDirection {
    match (prev, next) {
        (None, None) => MergeDirection::None,
        (Some(_), None) => MergeDirection::Prev,
        (None, Some(_)) => MergeDirection::Next,
        (Some(prev), Some(_)) if ends_sentence(prev) => MergeDirection::Next,
        (Some(_), Some(_)) => MergeDirection::Prev,
    }
}
