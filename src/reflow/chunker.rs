/*!
 * Greedy word-wrap chunking.
 */

use super::markup::stripped_len;

/// Split `text` into word-bounded chunks whose stripped length fits `max_length`.
///
/// Text that already fits comes back as a single chunk, which callers read as
/// "no split needed". Words are never broken: a word longer than `max_length`
/// ends up alone in its own chunk.
pub fn chunk(text: &str, max_length: usize) -> Vec<String> {
    if stripped_len(text) <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let word_len = stripped_len(word);
        let separator = usize::from(!current.is_empty());

        if !current.is_empty() && current_len + word_len + separator > max_length {
            chunks.push(current.join(" "));
            current.clear();
            current_len = 0;
        }

        if !current.is_empty() {
            current_len += 1;
        }
        current.push(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
