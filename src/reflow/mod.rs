/*!
 * Line-length reflowing for subtitle cues and plain text lines.
 *
 * This module contains:
 * - `markup`: Markup stripping for length measurement
 * - `chunker`: Greedy word-wrap chunking of over-length text
 * - `balance`: Midpoint splitting of an over-length pair
 * - `direction`: Choosing which neighbour a short unit merges into
 * - `engine`: The split pass and the merge/balance loop
 * - `cues`: Subtitle cue adapter with time interpolation
 * - `lines`: Plain text line adapter
 */

pub mod markup;
pub mod chunker;
pub mod balance;
pub mod direction;
pub mod engine;
pub mod cues;
pub mod lines;

pub use markup::{strip_markup, stripped_len};
pub use chunker::chunk;
pub use balance::balanced_split;
pub use direction::{direction, ends_sentence, MergeDirection};
pub use engine::{optimize, reflow, split_long, ReflowLimits, ReflowUnit, MAX_PASSES};
pub use cues::reflow_cues;
pub use lines::{join_lines, parse_lines, reflow_lines, Line};
