//! Batch number extraction.
//!
//! Prints one JSON record per path. Paths come from the command line, or
//! one per line on stdin when none are given.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bangou_core::{MatchSource, NumberParser, ParserConfig, UncensoredClassifier};
use clap::Parser;
use serde::Serialize;
use tracing::Level;

/// CLI arguments
#[derive(Parser)]
#[command(name = "bangou-parse")]
#[command(about = "Extract catalog numbers from media file paths")]
#[command(version)]
struct Cli {
    /// Paths to parse (reads stdin when empty)
    paths: Vec<String>,

    /// Comma-separated uncensored prefix patterns
    #[arg(
        short = 'u',
        long,
        env = "BANGOU_UNCENSORED_PREFIXES",
        default_value = bangou_core::DEFAULT_UNCENSORED_PREFIXES
    )]
    uncensored_prefixes: String,

    /// Print only the number, one per line
    #[arg(long)]
    plain: bool,

    /// Log cascade decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub input: String,
    pub number: Option<String>,
    pub source: Option<MatchSource>,
    pub rule: Option<String>,
    pub uncensored: Option<bool>,
    pub error: Option<String>,
}

struct Driver {
    parser: NumberParser,
    classifier: UncensoredClassifier,
    config: ParserConfig,
}

impl Driver {
    fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            parser: NumberParser::new().context("failed to build number parser")?,
            classifier: UncensoredClassifier::new()
                .context("failed to build uncensored classifier")?,
            config,
        })
    }

    fn process(&self, path: &str) -> ParseOutput {
        let parsed = match self.parser.parse(path) {
            Ok(parsed) => parsed,
            Err(err) => {
                return ParseOutput {
                    input: path.to_string(),
                    number: None,
                    source: None,
                    rule: None,
                    uncensored: None,
                    error: Some(err.to_string()),
                };
            }
        };

        let (uncensored, error) = match parsed
            .number
            .as_deref()
            .map(|number| self.classifier.is_uncensored(number, &self.config))
        {
            Some(Ok(flag)) => (Some(flag), None),
            Some(Err(err)) => (None, Some(err.to_string())),
            None => (None, None),
        };

        ParseOutput {
            input: parsed.input,
            number: parsed.number,
            source: parsed.source,
            rule: parsed.rule,
            uncensored,
            error,
        }
    }
}

fn emit(out: &mut impl Write, output: &ParseOutput, plain: bool) -> Result<()> {
    if plain {
        writeln!(out, "{}", output.number.as_deref().unwrap_or(""))?;
    } else {
        serde_json::to_writer(&mut *out, output)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = ParserConfig::new().with_uncensored_csv(&cli.uncensored_prefixes);
    let driver = Driver::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.paths.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            emit(&mut out, &driver.process(line), cli.plain)?;
        }
    } else {
        for path in &cli.paths {
            emit(&mut out, &driver.process(path), cli.plain)?;
        }
    }

    Ok(())
}
