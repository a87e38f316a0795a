use anyhow::{Result, Context};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use tempfile::NamedTempFile;

// @module: File and directory utilities

/// Prefix of reformatted and repaired outputs
pub const FIXED_PREFIX: &str = "FIXED_";

/// Prefix of extracted plain text outputs
pub const TEXT_PREFIX: &str = "TEXT_";

/// Extensions accepted as subtitle or text input
pub const TEXT_EXTENSIONS: &[&str] = &["srt", "txt"];

/// Extensions accepted as project input
pub const PROJECT_EXTENSIONS: &[&str] = &["prproj"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a processed file
    // @params: input_file, output_dir, prefix, extension (None keeps the input's)
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        prefix: &str,
        extension: Option<&str>,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();

        let extension = match extension {
            Some(ext) => Some(ext.to_string()),
            None => input_file.extension().map(|e| e.to_string_lossy().to_string()),
        };

        let output_filename = match extension {
            Some(ext) => format!("{}{}.{}", prefix, stem, ext),
            None => format!("{}{}", prefix, stem),
        };

        output_dir.as_ref().join(output_filename)
    }

    /// Whether a file name carries one of our output prefixes
    pub fn is_generated_output<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .file_name()
            .map(|name| {
                let name = name.to_string_lossy();
                name.starts_with(FIXED_PREFIX) || name.starts_with(TEXT_PREFIX)
            })
            .unwrap_or(false)
    }

    /// Find files with any of the given extensions, skipping our own outputs
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() || Self::is_generated_output(path) {
                continue;
            }

            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy();
                if extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)) {
                    result.push(path.to_path_buf());
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Read a file to bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        Self::write_bytes(path, content.as_bytes())
    }

    /// Write bytes to a file through a temporary file in the same directory,
    /// so a failed write never leaves a truncated output behind
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::ensure_dir(&parent)?;

        let mut temp = NamedTempFile::new_in(&parent)
            .with_context(|| format!("Failed to create temporary file in: {:?}", parent))?;
        temp.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", path))?;
        temp.persist(path)
            .with_context(|| format!("Failed to write to file: {:?}", path))?;

        Ok(())
    }
}
