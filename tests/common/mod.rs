/*!
 * Common test utilities for the subfit test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Three short cues: "Hi", "There", and a sentence that closes
pub const SHORT_CUES_SRT: &str = "1
00:00:01,000 --> 00:00:03,000
Hi

2
00:00:03,000 --> 00:00:05,000
There

3
00:00:05,500 --> 00:00:08,000
This cue ends a sentence.
";

/// Initialize logging once for tests that want to see debug output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle with a line that is much too long to read.

2
00:00:05,000 --> 00:00:09,000
<i>It contains</i>

3
00:00:10,000 --> 00:00:14,000
multiple entries.
"#;
    create_test_file(dir, filename, content)
}

/// Words of a text, in order
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
