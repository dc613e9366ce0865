use std::fmt;

use serde::{Deserialize, Serialize};

/// Which branch of the extraction cascade produced a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSource {
    /// A special-studio rule recognized the name.
    Studio,
    /// Subtitle-group / release title; the "number" is free text.
    Subtitle,
    /// Generic `-`/`_`/space separated code.
    Separator,
    /// Separator-less content ID or dotted western code.
    Cid,
}

impl MatchSource {
    /// Returns `true` for branches that produce a code rather than a title.
    #[must_use]
    pub fn is_code(self) -> bool {
        !matches!(self, Self::Subtitle)
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Studio => write!(f, "studio"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::Separator => write!(f, "separator"),
            Self::Cid => write!(f, "cid"),
        }
    }
}
