// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod prompts;
mod providers;
mod script_parser;
mod script_stats;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a YouTube script and split it into narration and shot list
    Generate(GenerateArgs),

    /// Split an existing raw script file without calling any API
    Split(SplitArgs),

    /// Generate shell completions for scriptforge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Video topic or description
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Video tone (e.g. 'High Energy', 'Storytelling', 'Educational')
    #[arg(long)]
    tone: Option<String>,

    /// Target duration (e.g. 'Shorts (<60s)', 'Standard (5-10 mins)')
    #[arg(long)]
    duration: Option<String>,

    /// Creativity of the hook, 0.1 to 1.5 (sampling temperature)
    #[arg(long)]
    creativity: Option<f32>,

    /// Write the narration stream to this file
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct SplitArgs {
    /// Raw script file to split
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Directory for the narration and shot-list files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ScriptForge - AI YouTube Script Generator & Splitter
///
/// Generates tagged video scripts with an LLM and splits them into spoken
/// narration (for text-to-speech) and visual directions (for a shot list).
#[derive(Parser, Debug)]
#[command(name = "scriptforge")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered YouTube script generator and splitter")]
#[command(long_about = "ScriptForge generates YouTube scripts with a language model and splits them
into a narration stream and a shot list.

EXAMPLES:
    scriptforge generate \"How to build a PC in 2025\"
    scriptforge generate --tone Storytelling --creativity 1.2 \"Ancient Rome\"
    scriptforge generate --save narration.txt \"Espresso basics\"
    scriptforge split raw_script.txt              # Split without any API call
    scriptforge split -f -o out/ raw_script.txt
    scriptforge completions bash > scriptforge.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file does
    not exist, a default one will be created automatically. The Groq API key
    is read from the config file or the GROQ_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color code for log level
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scriptforge", &mut std::io::stdout());
            Ok(())
        }
        Commands::Generate(args) => run_generate(args).await,
        Commands::Split(args) => run_split(args),
    }
}

/// Load the config file, creating a default one on first run
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let mut config = load_or_create_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(tone) = &options.tone {
        config.generation.tone = tone.clone();
    }
    if let Some(duration) = &options.duration {
        config.generation.target_duration = duration.clone();
    }
    if let Some(creativity) = options.creativity {
        config.generation.creativity = creativity;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let mut controller = Controller::with_config(config)?;
    let outcome = controller.generate(&options.topic).await?;

    println!("=== Narration (TTS) ===\n");
    println!("{}\n", outcome.narration);
    println!("=== Shot list ===\n");
    println!("{}\n", outcome.shot_list);
    info!(
        "Narration: {} words, about {}",
        outcome.stats.word_count, outcome.stats
    );

    if let Some(save_path) = &options.save {
        Controller::save_narration(&outcome.narration, save_path)?;
    }

    Ok(())
}

fn run_split(options: SplitArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let output_dir = options.output_dir.clone().unwrap_or_else(|| {
        options
            .input_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    });

    let outcome = Controller::split_file(&options.input_path, &output_dir, options.force_overwrite)?;

    info!(
        "Narration: {} words, about {}",
        outcome.stats.word_count, outcome.stats
    );

    Ok(())
}
