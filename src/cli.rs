use crate::matcher::{Engine, EngineOptions};
use crate::render::{render_diagnostic, CountRender, JsonRender, Render, TextRender};
use crate::scanner::PatternScanner;
use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use encoding_rs::Encoding;
use std::{
    fs,
    io::{stderr, stdin, stdout, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Text,
    Json,
    Count,
}

#[derive(Parser)]
#[command(name = "patscan")]
#[command(version)]
#[command(
    about = "patscan scans a text for all matches of a list of regex patterns and prints them with the elapsed time.",
    long_about = None
)]
pub struct Cli {
    /// Regex pattern to search for, can be given multiple times.
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Read patterns from a file, one per line.
    #[arg(short = 'f', long)]
    pattern_file: Option<PathBuf>,

    /// Read the text to scan from a file.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Encoding of the file given with --file.
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Regex engine used to compile the patterns.
    #[arg(long, value_enum, default_value_t = Engine::Adaptive, env = "PATSCAN_ENGINE")]
    engine: Engine,

    /// Maximum size in bytes of a compiled pattern.
    #[arg(long, env = "PATSCAN_SIZE_LIMIT")]
    size_limit: Option<usize>,

    /// Maximum number of backtracking steps of the fancy engine.
    #[arg(long, env = "PATSCAN_BACKTRACK_LIMIT")]
    backtrack_limit: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, env = "PATSCAN_FORMAT")]
    format: Format,

    /// Do not output matches. instead, exit with status 0 when there is a match and with non-zero status when there isn’t.
    #[arg(short, long)]
    quiet: bool,

    /// Not colored the error messages.
    #[arg(long)]
    no_color: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Text to scan, `-` reads from stdin.
    text: Option<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let mut out = BufWriter::new(stdout().lock());
        let mut err = stderr().lock();
        self.run_with(stdin().lock(), &mut out, &mut err)?;
        out.flush().map_err(|_| anyhow!("Failed write"))
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    fn run_with<R: Read, W: Write, E: Write>(
        &self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        let patterns = self.read_patterns()?;
        if patterns.is_empty() {
            return Err(anyhow!("no pattern given, use --regexp or --pattern-file"));
        }

        let text = self.read_text_from(input)?;
        debug!(patterns = patterns.len(), bytes = text.len(), "scanning");

        let report = PatternScanner::new(text, patterns)
            .with_options(self.engine_options())
            .scan()?;

        if let Some(error) = &report.error {
            render_diagnostic(err, error)?;
        }

        if self.quiet {
            return if report.is_empty() {
                Err(anyhow!("not found"))
            } else {
                Ok(())
            };
        }

        match self.format {
            Format::Text => TextRender {}.render(out, &report),
            Format::Json => JsonRender {}.render(out, &report),
            Format::Count => CountRender {}.render(out, &report),
        }
    }

    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            engine: self.engine,
            size_limit: self.size_limit,
            backtrack_limit: self.backtrack_limit,
        }
    }

    fn read_patterns(&self) -> Result<Vec<String>> {
        let from_file = match &self.pattern_file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.to_string())
                .collect(),
            None => vec![],
        };

        Ok(itertools::concat(vec![self.patterns.clone(), from_file]))
    }

    fn read_text_from<R: Read>(&self, mut input: R) -> Result<String> {
        match (&self.file, self.text.as_deref()) {
            (Some(path), _) => read_file(path, &self.encoding),
            (None, Some(text)) if text != "-" => Ok(text.to_string()),
            (None, _) => {
                let mut bytes = vec![];
                input
                    .read_to_end(&mut bytes)
                    .context("failed to read stdin")?;
                decode(&bytes, &self.encoding)
            }
        }
    }
}

fn read_file(path: &Path, label: &str) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode(&bytes, label)
}

fn decode(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| anyhow!("unknown encoding `{}`", label))?;
    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!(
            encoding = used.name(),
            "malformed sequences were replaced while decoding"
        );
    }

    Ok(text.into_owned())
}
