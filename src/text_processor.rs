/*!
 * Entry points for reformatting and extracting subtitle or plain text.
 *
 * Input is classified once (SubRip or plain text), parsed into units, run
 * through the reflow engine (or stripped, in extraction mode) and serialized
 * back. A bounded preview variant serves interactive display.
 */

use log::{debug, info};

use crate::errors::ReflowError;
use crate::reflow::{self, join_lines, parse_lines, reflow_cues, reflow_lines, ReflowLimits};
use crate::subtitle_processor::{serialize_srt, ParseDiagnostics, SubtitleCollection};

/// Marker appended to a preview when output was cut off
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Token that identifies SubRip content
const TIMECODE_ARROW: &str = "-->";

/// Kind of content handed to the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// SubRip subtitles
    Subtitle,
    /// Anything else, handled line by line
    PlainText,
}

impl TextFormat {
    /// Extension of the file written in the given mode
    pub fn output_extension(&self, mode: &Mode) -> &'static str {
        match (mode, self) {
            (Mode::Reformat(_), TextFormat::Subtitle) => "srt",
            _ => "txt",
        }
    }
}

/// What to do with the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Split long units and merge short ones within the given bounds
    Reformat(ReflowLimits),
    /// Produce plain text only, one unit per line
    Extract,
}

impl Mode {
    pub fn reformat(min_length: usize, max_length: usize) -> Self {
        Mode::Reformat(ReflowLimits::new(min_length, max_length))
    }
}

/// Result of processing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Serialized output
    pub text: String,
    /// Number of cues or lines in the output
    pub unit_count: usize,
    /// Detected input format
    pub format: TextFormat,
    /// Subtitle parsing diagnostics (all zero for plain text)
    pub diagnostics: ParseDiagnostics,
}

/// Bounds applied by [`preview_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    /// Characters of input considered
    pub max_input_chars: usize,
    /// Parsed units considered
    pub max_units: usize,
    /// Output lines shown
    pub max_lines: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_input_chars: 5000,
            max_units: 8,
            max_lines: 5,
        }
    }
}

/// Classify input as SubRip or plain text.
///
/// Any occurrence of the timecode arrow is enough. This also covers the
/// stricter "number line followed by timecode line" shape, so ambiguous
/// input without an arrow falls back to plain text.
pub fn detect_format(raw: &str) -> TextFormat {
    if raw.contains(TIMECODE_ARROW) {
        TextFormat::Subtitle
    } else {
        TextFormat::PlainText
    }
}

/// Process a whole document.
///
/// Fails with [`ReflowError::EmptyInput`] when the input is blank.
pub fn process_text(raw: &str, mode: Mode) -> Result<ProcessOutput, ReflowError> {
    if raw.trim().is_empty() {
        return Err(ReflowError::EmptyInput);
    }

    let (output, _) = run(raw, mode, None);
    info!(
        "Processed {:?} input in {:?} mode: {} unit(s)",
        output.format, mode, output.unit_count
    );
    Ok(output)
}

/// Process a bounded prefix of the input for quick display.
///
/// Only the first `max_input_chars` characters and `max_units` parsed units
/// are processed, and at most `max_lines` output lines are returned. When
/// either cap cut the input or more lines exist than shown,
/// [`PREVIEW_ELLIPSIS`] is appended as a final line. Blank input yields an
/// empty preview.
pub fn preview_text(raw: &str, mode: Mode, limits: PreviewLimits) -> String {
    let prefix = match raw.char_indices().nth(limits.max_input_chars) {
        Some((byte_idx, _)) => &raw[..byte_idx],
        None => raw,
    };
    if prefix.trim().is_empty() {
        return String::new();
    }

    let (output, units_cut) = run(prefix, mode, Some(limits.max_units));
    let input_cut = units_cut || !raw[prefix.len()..].trim().is_empty();
    let lines: Vec<&str> = output.text.lines().collect();
    debug!("Preview produced {} line(s), showing up to {}", lines.len(), limits.max_lines);

    let mut preview = lines
        .iter()
        .take(limits.max_lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if input_cut || lines.len() > limits.max_lines {
        preview.push('\n');
        preview.push_str(PREVIEW_ELLIPSIS);
    }
    preview
}

// Also reports whether `unit_cap` dropped any parsed units
fn run(raw: &str, mode: Mode, unit_cap: Option<usize>) -> (ProcessOutput, bool) {
    let format = detect_format(raw);
    let cap = unit_cap.unwrap_or(usize::MAX);

    match format {
        TextFormat::Subtitle => {
            let SubtitleCollection { mut entries, diagnostics } = SubtitleCollection::parse(raw);
            let truncated = entries.len() > cap;
            entries.truncate(cap);

            let (text, unit_count) = match mode {
                Mode::Extract => {
                    let stripped: Vec<String> = entries
                        .iter()
                        .map(|cue| reflow::strip_markup(&cue.text))
                        .collect();
                    (stripped.join("\n"), stripped.len())
                }
                Mode::Reformat(limits) => {
                    let cues = reflow_cues(entries, limits);
                    (serialize_srt(&cues), cues.len())
                }
            };

            (ProcessOutput { text, unit_count, format, diagnostics }, truncated)
        }
        TextFormat::PlainText => {
            let mut lines = parse_lines(raw);
            let truncated = lines.len() > cap;
            lines.truncate(cap);

            let lines = match mode {
                Mode::Extract => lines,
                Mode::Reformat(limits) => reflow_lines(lines, limits),
            };

            let output = ProcessOutput {
                text: join_lines(&lines),
                unit_count: lines.len(),
                format,
                diagnostics: ParseDiagnostics::default(),
            };
            (output, truncated)
        }
    }
}
