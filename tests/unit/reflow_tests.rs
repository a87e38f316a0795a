/*!
 * Tests for the line-length engine
 */

use subfit::reflow::{
    balanced_split, chunk, direction, optimize, reflow, reflow_cues, split_long, stripped_len,
    Line, MergeDirection, ReflowLimits,
};
use subfit::subtitle_processor::Cue;
use crate::common;

const SAMPLE_TEXTS: &[&str] = &[
    "Short",
    "A line of moderate length here",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor",
    "<i>Italic words</i> mixed with <b>bold</b> and plain words in one long cue",
    "Antidisestablishmentarianism is long",
    "가나다 라마바사 아자차카 타파하 가나다라 마바사아 자차카타파하",
];

/// Every chunk fits, or is a single oversized word, and no word is lost
#[test]
fn test_chunk_withSampleTexts_shouldRespectLimitAndKeepWords() {
    for text in SAMPLE_TEXTS {
        for max_length in 1..=50 {
            let chunks = chunk(text, max_length);

            let rebuilt: Vec<&str> = chunks.iter().flat_map(|c| c.split(' ')).collect();
            let original: Vec<&str> = text.split(' ').collect();
            assert_eq!(rebuilt, original);

            for c in &chunks {
                assert!(
                    stripped_len(c) <= max_length || !c.contains(' '),
                    "chunk {:?} exceeds {}", c, max_length
                );
            }
        }
    }
}

/// A successful balanced split yields fitting halves that rebuild the input
#[test]
fn test_balancedSplit_withSampleTexts_shouldRebuildInput() {
    for text in SAMPLE_TEXTS {
        for max_length in 1..=50 {
            if let Some((first, second)) = balanced_split(text, max_length) {
                assert!(stripped_len(&first) <= max_length);
                assert!(stripped_len(&second) <= max_length);
                assert_eq!(format!("{} {}", first, second), *text);
            }
        }
    }
}

/// Direction heuristic on the documented cases
#[test]
fn test_direction_withDocumentedCases_shouldMatch() {
    assert_eq!(direction(Some("Hello."), Some("World")), MergeDirection::Next);
    assert_eq!(direction(Some("Hello"), Some("World")), MergeDirection::Prev);
    assert_eq!(direction(None, Some("World")), MergeDirection::Next);
    assert_eq!(direction(Some("Hello"), None), MergeDirection::Prev);
}

/// Split children partition their parent's interval
#[test]
fn test_splitLong_withLongCues_shouldPartitionIntervals() {
    let parents = vec![
        Cue::new(0, 10_000, SAMPLE_TEXTS[2]),
        Cue::new(12_345, 12_400, SAMPLE_TEXTS[3]),
        Cue::new(20_000, 20_000, SAMPLE_TEXTS[5]),
    ];

    for parent in parents {
        let children = split_long(vec![parent.clone()], 20);
        assert!(children.len() > 1);
        assert_eq!(children.first().map(|c| c.start_ms), Some(parent.start_ms));
        assert_eq!(children.last().map(|c| c.end_ms), Some(parent.end_ms));
        for pair in children.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
        for child in &children {
            assert!(child.start_ms <= child.end_ms);
        }
        let text: Vec<&str> = children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(text.join(" "), parent.text);
    }
}

/// Once converged, another optimize run changes nothing
#[test]
fn test_optimize_withConvergedCues_shouldBeIdempotent() {
    common::init_logging();
    let limits = ReflowLimits::default();
    let cues: Vec<Cue> = SAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| Cue::new(i as u64 * 4_000, i as u64 * 4_000 + 3_500, *text))
        .collect();

    let once = reflow_cues(cues, limits);
    let twice = optimize(once.clone(), limits);
    assert_eq!(once, twice);
}

/// Reflowed lines keep the original word order
#[test]
fn test_reflow_withLines_shouldPreserveWords() {
    let lines: Vec<Line> = SAMPLE_TEXTS.iter().map(|t| Line::new(*t)).collect();
    let original: Vec<String> = SAMPLE_TEXTS.iter().flat_map(|t| common::words(t)).collect();

    let result = reflow(lines, ReflowLimits::new(10, 24));
    let rebuilt: Vec<String> = result.iter().flat_map(|l| common::words(&l.text)).collect();

    assert_eq!(rebuilt, original);
    for line in &result {
        assert!(stripped_len(&line.text) <= 24 || !line.text.contains(' '));
    }
}

/// Short units left after convergence only appear where no merge is possible
#[test]
fn test_reflow_withManyShortLines_shouldMergeThemAll() {
    let lines: Vec<Line> = ["So", "we", "meet", "again", "my", "old", "friend"]
        .iter()
        .map(|t| Line::new(*t))
        .collect();

    let result = reflow(lines, ReflowLimits::default());
    assert_eq!(result, vec![Line::new("So we meet again my old friend")]);
}
