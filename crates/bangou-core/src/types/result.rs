use serde::{Deserialize, Serialize};

use super::source::MatchSource;

/// The output of the number extraction cascade.
///
/// Carries the extracted number together with provenance: which branch
/// produced it and, for studio rules, which rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumber {
    /// Original input path.
    pub input: String,

    /// File name with directory components removed.
    pub basename: String,

    /// Extracted number, `None` when nothing survived the filter.
    pub number: Option<String>,

    /// Branch that produced the candidate.
    pub source: Option<MatchSource>,

    /// Studio rule name when `source` is [`MatchSource::Studio`].
    pub rule: Option<String>,
}

impl ParsedNumber {
    /// Creates an empty `ParsedNumber` for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            basename: basename.into(),
            number: None,
            source: None,
            rule: None,
        }
    }

    /// Returns `true` if a number was extracted.
    #[must_use]
    pub fn has_number(&self) -> bool {
        self.number.is_some()
    }
}

impl std::fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedNumber(")?;
        match self.number {
            Some(ref number) => write!(f, "number={number:?}")?,
            None => write!(f, "number=None")?,
        }
        if let Some(ref source) = self.source {
            write!(f, ", source={source}")?;
        }
        if let Some(ref rule) = self.rule {
            write!(f, ", rule={rule}")?;
        }
        write!(f, ")")
    }
}
