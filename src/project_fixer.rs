/*!
 * Unicode normalization repair for editor project files.
 *
 * Project files are gzip-compressed XML. File paths written on macOS are
 * stored decomposed (NFD) while Windows expects composed text (NFC), so
 * Hangul and accented names break when a project moves between the two.
 * The fix normalizes the whole document to one form and re-compresses it.
 */

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::errors::ProjectFixError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Normalization form to convert a project to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationTarget {
    /// Composed form, for projects moving from macOS to Windows
    Nfc,
    /// Decomposed form, for projects moving from Windows to macOS
    Nfd,
}

impl std::fmt::Display for NormalizationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nfc => write!(f, "NFC"),
            Self::Nfd => write!(f, "NFD"),
        }
    }
}

/// Repaired project content
#[derive(Debug, Clone)]
pub struct ProjectFixResult {
    /// Output bytes, gzip-compressed when the input was
    pub bytes: Vec<u8>,
    /// Whether normalization altered the text
    pub changed: bool,
    /// Whether the input was gzip-compressed
    pub compressed: bool,
}

/// Whether `bytes` start with the gzip magic number
pub fn is_gzipped(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Normalize `text` to the given form
pub fn normalize(text: &str, target: NormalizationTarget) -> String {
    match target {
        NormalizationTarget::Nfc => text.nfc().collect(),
        NormalizationTarget::Nfd => text.nfd().collect(),
    }
}

/// Normalize a project file, transparently handling gzip compression
pub fn fix_project(bytes: &[u8], target: NormalizationTarget) -> Result<ProjectFixResult, ProjectFixError> {
    let compressed = is_gzipped(bytes);

    let raw = if compressed {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut decoded)
            .map_err(ProjectFixError::Decompress)?;
        decoded
    } else {
        bytes.to_vec()
    };

    let xml = String::from_utf8(raw)?;
    let fixed = normalize(&xml, target);
    let changed = fixed != xml;
    debug!(
        "Normalized project to {} ({} -> {} bytes, changed: {})",
        target, xml.len(), fixed.len(), changed
    );

    let bytes = if compressed {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(fixed.as_bytes())
            .map_err(ProjectFixError::Compress)?;
        encoder.finish().map_err(ProjectFixError::Compress)?
    } else {
        fixed.into_bytes()
    };

    Ok(ProjectFixResult { bytes, changed, compressed })
}
