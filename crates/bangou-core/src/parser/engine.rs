//! # Number Parser
//!
//! Drives the extraction cascade: studio rules, then the subtitle branch,
//! then the separator heuristic, then the CID fallback. Every candidate goes
//! through the length/noise filter.

use once_cell::sync::OnceCell;
use tracing::{debug, error};

use crate::error::{BangouError, Result};
use crate::parser::cid::CidFallback;
use crate::parser::filter::filter;
use crate::parser::normalize::{basename, Normalizer};
use crate::parser::separator::SeparatorHeuristic;
use crate::parser::studio::StudioTable;
use crate::parser::subtitle::SubtitleBranch;
use crate::types::{MatchSource, ParsedNumber};

/// Extracts catalog numbers from file paths.
///
/// Construction compiles every pattern once; afterwards the parser is
/// immutable and can be shared between threads.
pub struct NumberParser {
    normalizer: Normalizer,
    studios: StudioTable,
    subtitle: SubtitleBranch,
    separator: SeparatorHeuristic,
    cid: CidFallback,
}

impl NumberParser {
    /// Compiles all rule patterns.
    ///
    /// # Errors
    ///
    /// Returns `BangouError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            studios: StudioTable::new()?,
            subtitle: SubtitleBranch::new()?,
            separator: SeparatorHeuristic::new()?,
            cid: CidFallback::new()?,
        })
    }

    /// The studio rule table, in probe order.
    pub fn studios(&self) -> &StudioTable {
        &self.studios
    }

    /// Parses a path and reports the number together with the branch that
    /// produced it.
    ///
    /// # Errors
    ///
    /// Returns `BangouError::EmptyInput` if the input is empty or whitespace-only.
    ///
    /// # Examples
    /// ```
    /// use bangou_core::parser::NumberParser;
    /// use bangou_core::types::MatchSource;
    ///
    /// let parser = NumberParser::new().unwrap();
    /// let result = parser.parse("/videos/sbw99.cc@heyzo_hd_2636_full.mp4").unwrap();
    ///
    /// assert_eq!(result.number.as_deref(), Some("HEYZO-2636"));
    /// assert_eq!(result.source, Some(MatchSource::Studio));
    /// ```
    pub fn parse(&self, input: &str) -> Result<ParsedNumber> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BangouError::EmptyInput);
        }

        let name = basename(trimmed);
        let mut result = ParsedNumber::new(trimmed, name);

        // A studio hit is final, even when the filter rejects it.
        if let Some((rule, number)) = self.studios.match_special(name) {
            result.source = Some(MatchSource::Studio);
            result.rule = Some(rule.to_string());
            result.number = filter(number);
            return Ok(result);
        }

        let (source, candidate) = if self.subtitle.applies(name) {
            (MatchSource::Subtitle, self.subtitle.extract(&self.normalizer, name))
        } else if self.separator.applies(name) {
            (MatchSource::Separator, self.separator.extract(&self.normalizer, name))
        } else {
            (MatchSource::Cid, self.cid.extract(name))
        };

        debug!(%source, candidate = ?candidate, "cascade branch finished");
        result.source = Some(source);
        result.number = candidate.and_then(filter);
        Ok(result)
    }

    /// Returns just the number, or `None` when nothing usable was found.
    pub fn extract(&self, input: &str) -> Option<String> {
        self.parse(input).ok()?.number
    }
}

static PARSER: OnceCell<NumberParser> = OnceCell::new();

fn shared_parser() -> Result<&'static NumberParser> {
    PARSER.get_or_try_init(NumberParser::new)
}

/// Parses a path with the process-wide parser.
pub fn parse(input: &str) -> Result<ParsedNumber> {
    shared_parser()?.parse(input)
}

/// Extracts the catalog number from a path with the process-wide parser.
///
/// Never fails: any problem, including a bad filename, yields `None` so a
/// batch over many files keeps going.
///
/// ```
/// assert_eq!(
///     bangou_core::extract_identifier(r"C:\videos\snis-829-C.mp4").as_deref(),
///     Some("SNIS-829")
/// );
/// ```
pub fn extract_identifier(path: &str) -> Option<String> {
    match shared_parser() {
        Ok(parser) => parser.extract(path),
        Err(err) => {
            error!(error = %err, "number parser unavailable");
            None
        }
    }
}
