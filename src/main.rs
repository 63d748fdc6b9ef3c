// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use vetreport::app_config::{Config, LogLevel};
use vetreport::app_controller::Controller;
use vetreport::exam::model::{Patient, Sex};
use vetreport::language_utils::ReportLanguage;
use vetreport::report::render::OutputFormat;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSex {
    Male,
    Female,
}

impl From<CliSex> for Sex {
    fn from(cli_sex: CliSex) -> Self {
        match cli_sex {
            CliSex::Male => Sex::Male,
            CliSex::Female => Sex::Female,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile an exam bundle into a report document
    Compile {
        /// JSON file holding { "patient": ..., "exam": ... }
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,

        /// Report language ('pt' or 'en'); defaults to the configured language
        #[arg(short = 'L', long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: CliOutputFormat,

        /// Output file; defaults to a name derived from the patient
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate text with the clinical glossary
    Translate {
        /// Target language ('pt' or 'en')
        #[arg(short, long)]
        to: String,

        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the ordered structures of an exam type
    Structures {
        /// Exam type tag, e.g. 'ultrasound_abd'
        #[arg(value_name = "EXAM_TYPE")]
        exam_type: String,

        /// Patient sex, selects reproductive organs for abdominal ultrasound
        #[arg(short, long, value_enum)]
        sex: Option<CliSex>,

        /// Patient is neutered
        #[arg(short, long)]
        neutered: bool,

        /// Language of the structure names
        #[arg(short = 'L', long)]
        language: Option<String>,
    },

    /// Generate shell completions for vetreport
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// vetreport - Veterinary exam report compiler
///
/// Compiles veterinary exam records into structured report documents and
/// localizes them between Portuguese and English with a clinical glossary.
#[derive(Parser, Debug)]
#[command(name = "vetreport")]
#[command(version)]
#[command(about = "Veterinary exam report compiler")]
#[command(long_about = "vetreport compiles veterinary exam records into report documents.

EXAMPLES:
    vetreport compile exam.json                      # Compile in the configured language
    vetreport compile exam.json -L en -f text        # English plain text outline
    vetreport translate --to en \"Fígado aumentado\"    # Glossary translation
    vetreport structures ultrasound_abd -s male      # Structure order for an intact male
    vetreport completions bash > vetreport.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config: String,

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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is the global max level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "vetreport", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_create(Path::new(&cli.config))?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Compile { bundle, language, format, output } => {
            let language = resolve_language(&controller, language.as_deref())?;
            let bundle = Controller::load_bundle(&bundle)?;
            let path = controller.export_to_file(&bundle, language, format.into(), output.as_deref())?;
            info!("Compiled {} report: {}", language.english_name(), path.display());
        }
        Commands::Translate { to, text } => {
            let translated = controller.translate_text(&text, &to)?;
            println!("{}", translated);
        }
        Commands::Structures { exam_type, sex, neutered, language } => {
            let language = resolve_language(&controller, language.as_deref())?;
            let patient = sex.map(|sex| Patient::new("", "").with_sex(sex.into(), neutered));
            for name in controller.structures(&exam_type, patient.as_ref(), language) {
                println!("{}", name);
            }
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn resolve_language(controller: &Controller, tag: Option<&str>) -> Result<ReportLanguage> {
    match tag {
        Some(tag) => ReportLanguage::parse(tag).context("Invalid --language"),
        None => controller.default_language(),
    }
}
