// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subfit::app_config::{self, Config};
use subfit::app_controller::{Controller, FileStatus, Job, RunOptions};
use subfit::project_fixer::NormalizationTarget;
use subfit::text_processor::Mode;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for NormalizationTarget to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliNormalization {
    /// Composed form (project moving from macOS to Windows)
    Nfc,
    /// Decomposed form (project moving from Windows to macOS)
    Nfd,
}

impl From<CliNormalization> for NormalizationTarget {
    fn from(cli_target: CliNormalization) -> Self {
        match cli_target {
            CliNormalization::Nfc => NormalizationTarget::Nfc,
            CliNormalization::Nfd => NormalizationTarget::Nfd,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
struct LengthArgs {
    /// Merge units at or below this many characters
    #[arg(long)]
    min_length: Option<usize>,

    /// Split units above this many characters
    #[arg(long)]
    max_length: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Directory for output files (defaults to each input's directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reflow subtitle or text lines to readable lengths (default command)
    Reformat {
        /// Input .srt/.txt file or directory to process
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        #[command(flatten)]
        lengths: LengthArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract plain text from subtitles, one cue per line
    Extract {
        /// Input .srt/.txt file or directory to process
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a short preview of the processed output of a file
    Preview {
        /// Input file to preview
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Preview extraction instead of reformatting
        #[arg(short, long)]
        extract: bool,

        #[command(flatten)]
        lengths: LengthArgs,
    },

    /// Repair Unicode normalization of file names inside project files
    FixProject {
        /// Input .prproj file or directory to process
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Normalization form to convert to
        #[arg(long, value_enum)]
        to: CliNormalization,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions for subfit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subfit - Subtitle and text line fitting
///
/// Splits long subtitle cues and text lines, merges short ones, and keeps
/// subtitle timing consistent while doing so.
#[derive(Parser, Debug)]
#[command(name = "subfit")]
#[command(version)]
#[command(about = "Reflow subtitle and text lines to readable lengths")]
#[command(long_about = "subfit splits long subtitle cues and text lines at word boundaries and merges
short ones into their neighbours, interpolating subtitle timing as it goes.

EXAMPLES:
    subfit movie.srt                              # Reformat with default bounds (10..32)
    subfit reformat --max-length 40 movie.srt     # Allow longer lines
    subfit extract movie.srt                      # Write TEXT_movie.txt
    subfit preview movie.srt                      # Show the first lines of the result
    subfit fix-project --to nfc edit.prproj       # Compose file names for Windows
    subfit --log-level debug /subtitles/          # Process a whole directory
    subfit completions bash > subfit.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .srt/.txt file or directory to reformat
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    #[command(flatten)]
    lengths: LengthArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself lets everything through; log::max_level does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (emoji, colour) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            writeln!(
                stderr,
                "\x1B[{}m{} {}{}\x1B[0m",
                colour, now, emoji, record.args()
            )
            .ok();
        }
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config has been read
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = cli.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subfit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Reformat { input_path, lengths, output }) => {
            let config = load_config(&cli.config_path, cli.log_level, &lengths)?;
            run_batch(config, &input_path, Job::Reformat, output).await
        }
        Some(Commands::Extract { input_path, output }) => {
            let config = load_config(&cli.config_path, cli.log_level, &LengthArgs::default())?;
            run_batch(config, &input_path, Job::Extract, output).await
        }
        Some(Commands::FixProject { input_path, to, output }) => {
            let config = load_config(&cli.config_path, cli.log_level, &LengthArgs::default())?;
            run_batch(config, &input_path, Job::FixProject(to.into()), output).await
        }
        Some(Commands::Preview { input_file, extract, lengths }) => {
            let config = load_config(&cli.config_path, cli.log_level, &lengths)?;
            let controller = Controller::with_config(config)?;
            let mode = if extract {
                Mode::Extract
            } else {
                Mode::Reformat(controller.config().reflow.limits())
            };
            let preview = controller.preview_file(&input_file, mode)?;
            println!("{}", preview);
            Ok(())
        }
        None => {
            // Default behavior - reformat the top-level input path
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;
            let config = load_config(&cli.config_path, cli.log_level, &cli.lengths)?;
            run_batch(config, &input_path, Job::Reformat, cli.output).await
        }
    }
}

/// Load or create the configuration, then apply command line overrides
fn load_config(config_path: &str, log_level: Option<CliLogLevel>, lengths: &LengthArgs) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)
            .context("Failed to write default config")?;
        config
    };

    if let Some(min_length) = lengths.min_length {
        config.reflow.min_length = min_length;
    }
    if let Some(max_length) = lengths.max_length {
        config.reflow.max_length = max_length;
    }
    if let Some(level) = log_level {
        config.log_level = level.into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

async fn run_batch(config: Config, input_path: &Path, job: Job, output: OutputArgs) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let options = RunOptions {
        output_dir: output.output_dir,
        force_overwrite: output.force_overwrite,
    };

    let summary = controller.run(input_path, job, &options).await?;
    for report in summary.reports.iter().filter(|r| r.status == FileStatus::Completed) {
        if let Some(output) = &report.output {
            info!("{:?} -> {:?}", report.input, output);
        }
    }

    if summary.failed() > 0 {
        return Err(anyhow!("{} file(s) failed ({})", summary.failed(), summary));
    }

    Ok(())
}
