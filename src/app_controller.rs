use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::file_utils::{FileManager, FIXED_PREFIX, PROJECT_EXTENSIONS, TEXT_EXTENSIONS, TEXT_PREFIX};
use crate::project_fixer::{fix_project, NormalizationTarget};
use crate::text_processor::{preview_text, process_text, Mode, TextFormat};

// @module: Application controller for batch file processing

/// What to do with each input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Reflow subtitle or text lines
    Reformat,
    /// Extract plain text
    Extract,
    /// Repair Unicode normalization in a project file
    FixProject(NormalizationTarget),
}

impl Job {
    fn input_extensions(&self) -> &'static [&'static str] {
        match self {
            Job::FixProject(_) => PROJECT_EXTENSIONS,
            _ => TEXT_EXTENSIONS,
        }
    }
}

/// Where outputs go and whether existing ones are replaced
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Output directory; defaults to each input's directory
    pub output_dir: Option<PathBuf>,
    /// Replace outputs that already exist
    pub force_overwrite: bool,
}

/// Outcome of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Completed,
    Skipped,
    Failed,
}

/// Per-file record kept by the batch
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    /// Cues or lines written, or 1/0 for changed/unchanged projects
    pub unit_count: usize,
    pub message: String,
}

impl FileReport {
    fn failed(input: &Path, error: &anyhow::Error) -> Self {
        Self {
            input: input.to_path_buf(),
            output: None,
            status: FileStatus::Failed,
            unit_count: 0,
            message: format!("{:#}", error),
        }
    }

    fn skipped(input: &Path, output: PathBuf) -> Self {
        Self {
            input: input.to_path_buf(),
            output: Some(output),
            status: FileStatus::Skipped,
            unit_count: 0,
            message: "Output already exists (use -f to force overwrite)".to_string(),
        }
    }
}

/// Reports of a whole batch, in processing order
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    fn count(&self, status: FileStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    pub fn completed(&self) -> usize {
        self.count(FileStatus::Completed)
    }

    pub fn skipped(&self) -> usize {
        self.count(FileStatus::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(FileStatus::Failed)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} completed, {} skipped, {} failed",
            self.completed(), self.skipped(), self.failed()
        )
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // @returns: Text mode for a job, None for project repair
    pub fn text_mode(&self, job: Job) -> Option<Mode> {
        match job {
            Job::Reformat => Some(Mode::Reformat(self.config.reflow.limits())),
            Job::Extract => Some(Mode::Extract),
            Job::FixProject(_) => None,
        }
    }

    /// Process a single file or every matching file under a directory
    pub async fn run(&self, input_path: &Path, job: Job, options: &RunOptions) -> Result<BatchSummary> {
        let files = if input_path.is_file() {
            vec![input_path.to_path_buf()]
        } else if input_path.is_dir() {
            let files = FileManager::find_files(input_path, job.input_extensions())?;
            if files.is_empty() {
                return Err(anyhow!(
                    "No {} files found in directory: {:?}",
                    job.input_extensions().join("/"), input_path
                ));
            }
            files
        } else {
            return Err(anyhow!("Input path does not exist: {:?}", input_path));
        };

        Ok(self.run_files(&files, job, options).await)
    }

    /// Process files one after another; a failing file never stops the batch
    pub async fn run_files(&self, files: &[PathBuf], job: Job, options: &RunOptions) -> BatchSummary {
        let start_time = std::time::Instant::now();
        let progress = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("█▓▒░"));

        let delay = Duration::from_millis(self.config.batch.file_delay_ms);
        let mut summary = BatchSummary::default();

        for (idx, file) in files.iter().enumerate() {
            let file_name = file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress.set_message(format!("Processing: {}", file_name));

            let report = match self.process_file(file, job, options) {
                Ok(report) => report,
                Err(e) => FileReport::failed(file, &e),
            };

            match report.status {
                FileStatus::Completed => info!("{}: {}", file_name, report.message),
                FileStatus::Skipped => warn!("Skipping {}: {}", file_name, report.message),
                FileStatus::Failed => error!("Error processing file {}: {}", file_name, report.message),
            }

            summary.reports.push(report);
            progress.inc(1);

            if idx + 1 < files.len() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        progress.finish_and_clear();
        info!("Finished in {:.1?}: {}", start_time.elapsed(), summary);
        summary
    }

    /// Process one file end to end
    pub fn process_file(&self, input: &Path, job: Job, options: &RunOptions) -> Result<FileReport> {
        let output_dir = match &options.output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        match job {
            Job::FixProject(target) => self.fix_project_file(input, &output_dir, target, options.force_overwrite),
            Job::Reformat | Job::Extract => {
                let mode = self.text_mode(job)
                    .ok_or_else(|| anyhow!("No text mode for job {:?}", job))?;
                self.process_text_file(input, &output_dir, mode, options.force_overwrite)
            }
        }
    }

    fn process_text_file(&self, input: &Path, output_dir: &Path, mode: Mode, force_overwrite: bool) -> Result<FileReport> {
        let content = FileManager::read_to_string(input)?;
        let output = process_text(&content, mode)
            .with_context(|| format!("Cannot process {:?}", input))?;

        let prefix = match mode {
            Mode::Extract => TEXT_PREFIX,
            Mode::Reformat(_) => FIXED_PREFIX,
        };
        let output_path = FileManager::generate_output_path(
            input,
            output_dir,
            prefix,
            Some(output.format.output_extension(&mode)),
        );

        if output_path.exists() && !force_overwrite {
            return Ok(FileReport::skipped(input, output_path));
        }

        FileManager::write_to_file(&output_path, &output.text)?;
        debug!("Wrote {:?}", output_path);

        let mut message = match (mode, output.format) {
            (Mode::Extract, _) => format!("Extracted text ({} lines)", output.unit_count),
            (Mode::Reformat(_), TextFormat::Subtitle) => format!("Reformatted subtitles ({} cues)", output.unit_count),
            (Mode::Reformat(_), TextFormat::PlainText) => format!("Reformatted text ({} lines)", output.unit_count),
        };
        if output.diagnostics.dropped_blocks > 0 {
            message.push_str(&format!(
                "; dropped {} malformed block(s)",
                output.diagnostics.dropped_blocks
            ));
        }

        Ok(FileReport {
            input: input.to_path_buf(),
            output: Some(output_path),
            status: FileStatus::Completed,
            unit_count: output.unit_count,
            message,
        })
    }

    fn fix_project_file(&self, input: &Path, output_dir: &Path, target: NormalizationTarget, force_overwrite: bool) -> Result<FileReport> {
        let output_path = FileManager::generate_output_path(input, output_dir, FIXED_PREFIX, None);
        if output_path.exists() && !force_overwrite {
            return Ok(FileReport::skipped(input, output_path));
        }

        let bytes = FileManager::read_bytes(input)?;
        let result = fix_project(&bytes, target)
            .with_context(|| format!("Cannot repair project {:?}", input))?;
        FileManager::write_bytes(&output_path, &result.bytes)?;

        let state = if result.changed { "changed" } else { "unchanged" };
        Ok(FileReport {
            input: input.to_path_buf(),
            output: Some(output_path),
            status: FileStatus::Completed,
            unit_count: usize::from(result.changed),
            message: format!("Project normalized to {} ({})", target, state),
        })
    }

    /// Preview the processing of a single file
    pub fn preview_file(&self, input: &Path, mode: Mode) -> Result<String> {
        let content = FileManager::read_to_string(input)?;
        Ok(preview_text(&content, mode, self.config.preview.limits()))
    }
}
