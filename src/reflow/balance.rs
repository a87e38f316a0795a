/*!
 * Balanced splitting of an over-length combined text.
 */

use super::markup::stripped_len;

/// Split `text` at the word boundary closest to its midpoint.
///
/// The midpoint is measured on stripped word lengths, spaces excluded. Ties
/// go to the leftmost boundary. Returns `None` when the text has fewer than
/// two words or when either half still exceeds `max_length`.
pub fn balanced_split(text: &str, max_length: usize) -> Option<(String, String)> {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() < 2 {
        return None;
    }

    let lengths: Vec<usize> = words.iter().map(|w| stripped_len(w)).collect();
    let total: usize = lengths.iter().sum();

    // Compare doubled distances to keep the midpoint integral
    let mut best_idx = 0;
    let mut best_diff = usize::MAX;
    let mut running = 0;
    for (idx, len) in lengths.iter().take(words.len() - 1).enumerate() {
        running += len;
        let diff = (2 * running).abs_diff(total);
        if diff < best_diff {
            best_diff = diff;
            best_idx = idx;
        }
    }

    let first = words[..=best_idx].join(" ");
    let second = words[best_idx + 1..].join(" ");

    if stripped_len(&first) > max_length || stripped_len(&second) > max_length {
        return None;
    }

    Some((first, second))
}
