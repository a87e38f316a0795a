use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, warn};

// @module: SubRip parsing, serialization and timestamp codec

// @const: Single timestamp, 1-2 digit hours, comma or period before millis
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2}):(\d{2})[,.](\d{3})").unwrap()
});

// @const: Timecode line "start --> end"
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}:\d{2}:\d{2}[,.]\d{3})\s*-->\s*(\d{1,2}:\d{2}:\d{2}[,.]\d{3})").unwrap()
});

// @const: One or more blank lines between blocks
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n(?:[ \t]*\n)+").unwrap()
});

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Parse a SubRip timestamp (`H:MM:SS,mmm` or `H:MM:SS.mmm`) into milliseconds.
///
/// Malformed input degrades to `0` instead of failing.
pub fn parse_time(text: &str) -> u64 {
    let Some(caps) = TIME_REGEX.captures(text) else {
        return 0;
    };

    let field = |idx: usize| -> u64 {
        caps.get(idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0))
    };

    field(1) * 3_600_000 + field(2) * 60_000 + field(3) * 1_000 + field(4)
}

/// Format milliseconds as a SubRip timestamp (`HH:MM:SS,mmm`).
///
/// Always uses a comma before the milliseconds, whatever the input used.
pub fn format_time(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Sequence label as found in the source, if any
    pub label: Option<String>,

    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms
    pub end_ms: u64,

    // @field: Cue text, markup retained
    pub text: String,
}

impl Cue {
    /// Creates a cue without a sequence label
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Cue {
            label: None,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Duration of the cue in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        format_time(self.start_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        format_time(self.end_ms)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {}\n{}", self.format_start_time(), self.format_end_time(), self.text)
    }
}

/// Data-quality counters collected while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    /// Blocks without a timecode line or without any text
    pub dropped_blocks: usize,

    /// Cues whose end preceded their start (end clamped to start)
    pub inverted_intervals: usize,
}

/// Parsed subtitle document
#[derive(Debug, Clone, Default)]
pub struct SubtitleCollection {
    /// Cues in source order
    pub entries: Vec<Cue>,

    /// What the parser had to drop or repair
    pub diagnostics: ParseDiagnostics,
}

impl SubtitleCollection {
    /// Parse SubRip content.
    ///
    /// Blocks are separated by blank lines. Each block may start with a
    /// sequence label, followed by a timecode line and one or more text
    /// lines. Text lines are joined with single spaces. Blocks that do not
    /// fit this shape are dropped and counted in the diagnostics.
    pub fn parse(content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let mut collection = SubtitleCollection::default();

        for (block_idx, block) in BLOCK_SEPARATOR_REGEX.split(&normalized).enumerate() {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }

            match Self::parse_block(block) {
                Some(mut cue) => {
                    if cue.end_ms < cue.start_ms {
                        warn!(
                            "Cue {} ends before it starts ({} --> {}), clamping end",
                            block_idx + 1, cue.format_start_time(), cue.format_end_time()
                        );
                        cue.end_ms = cue.start_ms;
                        collection.diagnostics.inverted_intervals += 1;
                    }
                    collection.entries.push(cue);
                }
                None => {
                    debug!("Dropping subtitle block {}: {:?}", block_idx + 1, block);
                    collection.diagnostics.dropped_blocks += 1;
                }
            }
        }

        if collection.diagnostics.dropped_blocks > 0 {
            warn!("Dropped {} malformed subtitle block(s)", collection.diagnostics.dropped_blocks);
        }

        collection
    }

    fn parse_block(block: &str) -> Option<Cue> {
        let lines: Vec<&str> = block.split('\n').collect();

        let (label, time_line_idx) = if TIMECODE_REGEX.is_match(lines[0]) {
            (None, 0)
        } else if lines.len() > 1 && TIMECODE_REGEX.is_match(lines[1]) {
            (Some(lines[0].trim().to_string()), 1)
        } else {
            return None;
        };

        let caps = TIMECODE_REGEX.captures(lines[time_line_idx])?;
        let joined = lines[time_line_idx + 1..].join(" ");
        let text = WHITESPACE_REGEX.replace_all(&joined, " ").trim().to_string();
        if text.is_empty() {
            return None;
        }

        Some(Cue {
            label,
            start_ms: parse_time(&caps[1]),
            end_ms: parse_time(&caps[2]),
            text,
        })
    }

    /// Serialize to SubRip, renumbering cues from 1
    pub fn to_srt_string(&self) -> String {
        serialize_srt(&self.entries)
    }

    /// Number of cues
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no cues
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialize cues as SubRip blocks separated by blank lines, numbered from 1
pub fn serialize_srt(cues: &[Cue]) -> String {
    cues.iter()
        .enumerate()
        .map(|(idx, cue)| format!("{}\n{}", idx + 1, cue))
        .collect::<Vec<_>>()
        .join("\n\n")
}
