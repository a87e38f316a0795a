/*!
 * Tests for format detection, processing and preview
 */

use subfit::errors::ReflowError;
use subfit::text_processor::{
    detect_format, preview_text, process_text, Mode, PreviewLimits, TextFormat, PREVIEW_ELLIPSIS,
};
use crate::common;

/// Arrow anywhere means subtitles
#[test]
fn test_detectFormat_withSubtitleAndPlainText_shouldClassify() {
    assert_eq!(detect_format(common::SHORT_CUES_SRT), TextFormat::Subtitle);
    assert_eq!(detect_format("Just a paragraph\nand another"), TextFormat::PlainText);
    assert_eq!(detect_format(""), TextFormat::PlainText);
}

/// Two short cues merge into one spanning both intervals
#[test]
fn test_processText_withTwoShortCues_shouldMergeIntoOne() {
    let input = "1\n00:00:01,000 --> 00:00:03,000\nHi\n\n2\n00:00:03,000 --> 00:00:05,000\nThere\n";

    let output = process_text(input, Mode::reformat(10, 32)).unwrap();

    assert_eq!(output.text, "1\n00:00:01,000 --> 00:00:05,000\nHi There");
    assert_eq!(output.unit_count, 1);
    assert_eq!(output.format, TextFormat::Subtitle);
}

/// A merge that overflows gets rebalanced and the shared edge moves
#[test]
fn test_processText_withOverflowingMerge_shouldRebalanceTiming() {
    let output = process_text(common::SHORT_CUES_SRT, Mode::reformat(10, 32)).unwrap();

    let expected = "1\n00:00:01,000 --> 00:00:04,500\nHi There This cue\n\n\
                    2\n00:00:04,500 --> 00:00:08,000\nends a sentence.";
    assert_eq!(output.text, expected);
    assert_eq!(output.unit_count, 2);
}

/// A 40-character line splits into two lines at max 20
#[test]
fn test_processText_withLongPlainLine_shouldSplitIntoTwo() {
    let input = "The cat sat on a mat and it slept there.\n";

    let output = process_text(input, Mode::reformat(5, 20)).unwrap();

    assert_eq!(output.format, TextFormat::PlainText);
    assert_eq!(output.text, "The cat sat on a mat\nand it slept there.");
    assert_eq!(output.unit_count, 2);
}

/// Extraction yields one stripped line per cue
#[test]
fn test_processText_withExtractMode_shouldEmitOneLinePerCue() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\n<i>Hi</i>\n\n\
                 2\n00:00:02,000 --> 00:00:03,000\nThere\n\n\
                 3\n00:00:03,000 --> 00:00:04,000\n<b>You</b> two\n";

    let output = process_text(input, Mode::Extract).unwrap();

    assert_eq!(output.text, "Hi\nThere\nYou two");
    assert_eq!(output.unit_count, 3);
}

/// Plain text extraction only trims and drops blank lines
#[test]
fn test_processText_withExtractModeOnPlainText_shouldKeepLines() {
    let input = "  first line  \n\n\nsecond line\n";

    let output = process_text(input, Mode::Extract).unwrap();

    assert_eq!(output.text, "first line\nsecond line");
    assert_eq!(output.unit_count, 2);
}

/// Blank input is rejected
#[test]
fn test_processText_withBlankInput_shouldReturnEmptyInput() {
    assert_eq!(process_text("", Mode::Extract), Err(ReflowError::EmptyInput));
    assert_eq!(process_text("\n \r\n\t", Mode::reformat(10, 32)), Err(ReflowError::EmptyInput));
}

/// Diagnostics flow through from the parser
#[test]
fn test_processText_withBrokenBlocks_shouldReportDiagnostics() {
    let input = "garbage block\n\n\
                 1\n00:00:05,000 --> 00:00:04,000\nA cue that ends before it starts\n";

    let output = process_text(input, Mode::Extract).unwrap();

    assert_eq!(output.unit_count, 1);
    assert_eq!(output.diagnostics.dropped_blocks, 1);
    assert_eq!(output.diagnostics.inverted_intervals, 1);
}

/// CRLF input processes like LF input
#[test]
fn test_processText_withCrlfInput_shouldMatchLfOutput() {
    let crlf = common::SHORT_CUES_SRT.replace('\n', "\r\n");

    let from_crlf = process_text(&crlf, Mode::reformat(10, 32)).unwrap();
    let from_lf = process_text(common::SHORT_CUES_SRT, Mode::reformat(10, 32)).unwrap();

    assert_eq!(from_crlf.text, from_lf.text);
}

/// Preview shows the first lines and marks the cut
#[test]
fn test_previewText_withManyLines_shouldTruncateWithEllipsis() {
    let input: String = (1..=10).map(|i| format!("line number {}\n", i)).collect();

    let preview = preview_text(&input, Mode::Extract, PreviewLimits::default());

    let lines: Vec<&str> = preview.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "line number 1");
    assert_eq!(lines[4], "line number 5");
    assert_eq!(lines[5], PREVIEW_ELLIPSIS);
}

/// Preview only looks at the first units and marks the rest as cut
#[test]
fn test_previewText_withUnitCap_shouldMarkLaterUnitsAsCut() {
    let input: String = (1..=10).map(|i| format!("entry {}\n", i)).collect();
    let limits = PreviewLimits { max_input_chars: 5000, max_units: 3, max_lines: 5 };

    let preview = preview_text(&input, Mode::Extract, limits);

    assert_eq!(preview, format!("entry 1\nentry 2\nentry 3\n{}", PREVIEW_ELLIPSIS));
}

/// A unit cap that drops nothing leaves the preview unmarked
#[test]
fn test_previewText_withUnitCapMatchingInput_shouldNotAddEllipsis() {
    let input: String = (1..=3).map(|i| format!("entry {}\n", i)).collect();
    let limits = PreviewLimits { max_input_chars: 5000, max_units: 3, max_lines: 5 };

    assert_eq!(preview_text(&input, Mode::Extract, limits), "entry 1\nentry 2\nentry 3");
}

/// Subtitle cues beyond the unit cap are marked as cut
#[test]
fn test_previewText_withSubtitleUnitCap_shouldAddEllipsis() {
    let limits = PreviewLimits { max_input_chars: 5000, max_units: 2, max_lines: 5 };

    let preview = preview_text(common::SHORT_CUES_SRT, Mode::Extract, limits);

    assert_eq!(preview, format!("Hi\nThere\n{}", PREVIEW_ELLIPSIS));
}

/// Preview cuts input on a character boundary and marks the cut
#[test]
fn test_previewText_withInputCap_shouldCutOnCharBoundary() {
    let limits = PreviewLimits { max_input_chars: 4, max_units: 8, max_lines: 5 };

    let preview = preview_text("한국어 자막", Mode::Extract, limits);

    assert_eq!(preview, format!("한국어\n{}", PREVIEW_ELLIPSIS));
}

/// Blank preview input gives an empty preview
#[test]
fn test_previewText_withBlankInput_shouldBeEmpty() {
    assert_eq!(preview_text("   \n", Mode::Extract, PreviewLimits::default()), "");
}

/// Subtitle preview counts serialized lines, blank separators included
#[test]
fn test_previewText_withSubtitles_shouldShowFirstLines() {
    let preview = preview_text(common::SHORT_CUES_SRT, Mode::reformat(10, 32), PreviewLimits::default());

    let expected = format!(
        "1\n00:00:01,000 --> 00:00:04,500\nHi There This cue\n\n2\n{}",
        PREVIEW_ELLIPSIS
    );
    assert_eq!(preview, expected);
}

/// Output extension follows format and mode
#[test]
fn test_outputExtension_withModes_shouldPickSrtOnlyForReformattedSubtitles() {
    let reformat = Mode::reformat(10, 32);
    assert_eq!(TextFormat::Subtitle.output_extension(&reformat), "srt");
    assert_eq!(TextFormat::Subtitle.output_extension(&Mode::Extract), "txt");
    assert_eq!(TextFormat::PlainText.output_extension(&reformat), "txt");
}
