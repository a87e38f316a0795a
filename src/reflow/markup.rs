/*!
 * Markup stripping for length measurement.
 *
 * Subtitle text may carry inline tags such as `<i>` or `<font color="red">`.
 * Lengths are always measured on the text with those tags removed, while the
 * stored text keeps them (extraction output being the only exception).
 */

use once_cell::sync::Lazy;
use regex::Regex;

// No nesting support: the first `>` closes the tag
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove every `<...>` tag from `text`
pub fn strip_markup(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Character count of `text` once markup is removed
pub fn stripped_len(text: &str) -> usize {
    TAG_REGEX.replace_all(text, "").chars().count()
}
