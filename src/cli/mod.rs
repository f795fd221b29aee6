//! Command line interface.
//!
//! Parses arguments, collects input, validates it, runs the analyzer and
//! renders the report. Printing is left to the binary.

mod input;

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use input::{media_input, text_input};

use crate::analysis::{ContentInput, MediaKind, analyze};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::render::{TextReport, render_json};
use crate::validate::InputValidator;

#[derive(Parser, Debug)]
#[command(
    name = "synthscore",
    version,
    about = "Estimate how likely text or media is machine generated"
)]
pub struct Cli {
    /// Report format (overrides SYNTHSCORE_OUTPUT)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include internal metadata entries in the text report
    #[arg(long, global = true)]
    pub show_metadata: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text given inline, from a file, or on stdin
    Text {
        /// Text to analyze
        text: Option<String>,

        /// Read the text from this file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Analyze an image file's name, size and type
    Image(MediaArgs),

    /// Analyze a video file's size
    Video(MediaArgs),

    /// Analyze an audio file's size
    Audio(MediaArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MediaArgs {
    /// Path to the file
    pub path: PathBuf,

    /// MIME type to use instead of guessing from the extension
    #[arg(long)]
    pub mime: Option<String>,
}

impl Command {
    fn collect<R: Read>(&self, stdin: R) -> Result<ContentInput> {
        match self {
            Self::Text { text, file } => text_input(text.clone(), file.as_deref(), stdin),
            Self::Image(args) => media_input(&args.path, args.mime.as_deref(), MediaKind::Image),
            Self::Video(args) => media_input(&args.path, args.mime.as_deref(), MediaKind::Video),
            Self::Audio(args) => media_input(&args.path, args.mime.as_deref(), MediaKind::Audio),
        }
    }
}

/// Run a parsed command line and return the rendered report.
pub fn run<R: Read>(cli: &Cli, config: &Config, stdin: R) -> Result<String> {
    let input = cli.command.collect(stdin)?;

    let warnings = InputValidator::new()
        .with_max_text_bytes(config.max_text_bytes)
        .validate(&input)
        .into_result()?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let result = analyze(&input);

    let report = match cli.format.unwrap_or(config.output) {
        OutputFormat::Text => TextReport::new(&result)
            .with_metadata(cli.show_metadata || config.show_metadata)
            .to_string(),
        OutputFormat::Json => render_json(&result)?,
    };
    Ok(report)
}
