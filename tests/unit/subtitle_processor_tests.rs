/*!
 * Tests for subtitle processing functionality
 */

use std::fmt::Write;
use subfit::subtitle_processor::{Cue, SubtitleCollection, format_time, parse_time, serialize_srt};
use crate::common;

/// Test timestamp parsing and formatting
#[test]
fn test_timestamp_parsing_withValidTimestamp_shouldParseAndFormat() {
    let ts = "01:23:45,678";
    let ms = parse_time(ts);
    assert_eq!(ms, 5025678);

    let formatted = format_time(ms);
    assert_eq!(formatted, ts);
}

/// Period separators are read but never written
#[test]
fn test_timestamp_formatting_withPeriodInput_shouldWriteComma() {
    assert_eq!(format_time(parse_time("0:00:07.250")), "00:00:07,250");
}

/// Every millisecond of a day survives a format/parse round trip
#[test]
fn test_timestamp_roundTrip_withEveryMinuteOfDay_shouldBeExact() {
    for minute in 0..(24 * 60) {
        for offset in [0u64, 1, 999, 59_999] {
            let ms = minute * 60_000 + offset;
            assert_eq!(parse_time(&format_time(ms)), ms, "round trip failed for {}", ms);
        }
    }
}

/// Malformed timestamps degrade to zero
#[test]
fn test_timestamp_parsing_withMalformedTimestamp_shouldReturnZero() {
    assert_eq!(parse_time("12:34"), 0);
    assert_eq!(parse_time("aa:bb:cc,ddd"), 0);
}

/// Test cue display formatting
#[test]
fn test_cue_display_withValidCue_shouldFormatCorrectly() {
    let cue = Cue::new(5000, 10000, "Test subtitle");
    let mut output = String::new();
    write!(output, "{}", cue).unwrap();

    assert_eq!(output, "00:00:05,000 --> 00:00:10,000\nTest subtitle");
    assert_eq!(cue.duration_ms(), 5000);
}

/// Test parsing a whole file
#[test]
fn test_parse_withSampleFile_shouldReadAllCues() {
    let collection = SubtitleCollection::parse(common::SHORT_CUES_SRT);

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.entries[0].text, "Hi");
    assert_eq!(collection.entries[1].start_ms, 3_000);
    assert_eq!(collection.entries[2].end_ms, 8_000);
    assert_eq!(collection.diagnostics.dropped_blocks, 0);
}

/// Blocks with extra blank lines and stray text are tolerated
#[test]
fn test_parse_withNoiseBetweenBlocks_shouldKeepValidCues() {
    let content = "\u{feff}stray header\n\n\n1\n00:00:01,000 --> 00:00:02,000\nOne\n\n\n\n2\n00:00:02,000 --> 00:00:03,000\nTwo\n   \n";
    let collection = SubtitleCollection::parse(content);

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.entries[1].text, "Two");
    assert_eq!(collection.diagnostics.dropped_blocks, 1);
}

/// Serializing renumbers from 1 and separates blocks with a blank line
#[test]
fn test_serialize_withParsedCues_shouldRenumber() {
    let content = "7\n00:00:01,000 --> 00:00:02,000\nSeven\n\n9\n00:00:02,000 --> 00:00:03,000\nNine";
    let collection = SubtitleCollection::parse(content);

    assert_eq!(
        collection.to_srt_string(),
        "1\n00:00:01,000 --> 00:00:02,000\nSeven\n\n2\n00:00:02,000 --> 00:00:03,000\nNine"
    );
    assert_eq!(serialize_srt(&[]), "");
}
