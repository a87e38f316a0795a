/*!
 * Subtitle cue adapter for the reflow engine.
 *
 * Splitting a cue interpolates its interval across the chunks by their share
 * of the stripped text. Merging spans both intervals, and rebalancing moves
 * the shared edge in proportion to the new texts.
 */

use super::engine::{reflow, ReflowLimits, ReflowUnit};
use super::markup::stripped_len;
use crate::subtitle_processor::Cue;

impl ReflowUnit for Cue {
    fn text(&self) -> &str {
        &self.text
    }

    fn split_into(self, chunks: Vec<String>) -> Vec<Self> {
        let duration = self.duration_ms();
        let total_len = stripped_len(&self.text).max(1) as u64;
        let last_idx = chunks.len().saturating_sub(1);

        let mut cues = Vec::with_capacity(chunks.len());
        let mut start = self.start_ms;

        for (idx, text) in chunks.into_iter().enumerate() {
            let end = if idx == last_idx {
                self.end_ms
            } else {
                let share = duration * stripped_len(&text) as u64 / total_len;
                // Every boundary advances; the original end caps it
                (start + share).max(start + 1).min(self.end_ms)
            };

            cues.push(Cue {
                label: None,
                start_ms: start,
                end_ms: end,
                text,
            });
            start = end;
        }

        cues
    }

    fn merge(self, later: Self, text: String) -> Self {
        Cue {
            label: self.label.or(later.label),
            start_ms: self.start_ms,
            end_ms: later.end_ms.max(self.start_ms),
            text,
        }
    }

    fn rebalance(self, later: Self, first: String, second: String) -> (Self, Self) {
        let start = self.start_ms;
        let end = later.end_ms.max(start);
        let first_len = stripped_len(&first) as u64;
        let combined_len = first_len + 1 + stripped_len(&second) as u64;
        let boundary = start + (end - start) * first_len / combined_len;

        let first = Cue {
            label: self.label,
            start_ms: start,
            end_ms: boundary,
            text: first,
        };
        let second = Cue {
            label: later.label,
            start_ms: boundary,
            end_ms: end,
            text: second,
        };
        (first, second)
    }
}

/// Split long cues, then merge and rebalance short ones
pub fn reflow_cues(cues: Vec<Cue>, limits: ReflowLimits) -> Vec<Cue> {
    reflow(cues, limits)
}
