//! # Configuration
//!
//! The uncensored classifier needs an ordered list of user prefixes. It is
//! read through [`PrefixSource`] so callers can back it with whatever
//! configuration store they already have.

/// Stock prefix list used when no configuration overrides it.
pub const DEFAULT_UNCENSORED_PREFIXES: &str = "PT-,S2M,BT,LAF,SMD,SMBD,SM3D2DBD,SKY-,SKYHD,CWP,CWDV,CWBD,CW3D2DBD,MKD,MKBD,MXBD,MK3D2DBD,MCB3DBD,MCBD,RHJ,MMDV";

/// Supplies the ordered list of uncensored prefix patterns.
///
/// Each entry is a regex fragment. The classifier reads the list once and
/// caches the compiled matcher.
pub trait PrefixSource {
    /// Returns the configured prefixes, in priority order.
    fn uncensored_prefixes(&self) -> Vec<String>;
}

/// Splits a comma-separated prefix list, keeping empty entries so that
/// validation can see them.
pub fn split_prefix_list(csv: &str) -> Vec<String> {
    csv.split(',').map(|s| s.trim().to_string()).collect()
}

impl PrefixSource for str {
    fn uncensored_prefixes(&self) -> Vec<String> {
        split_prefix_list(self)
    }
}

impl PrefixSource for &str {
    fn uncensored_prefixes(&self) -> Vec<String> {
        split_prefix_list(self)
    }
}

impl PrefixSource for [String] {
    fn uncensored_prefixes(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl PrefixSource for Vec<String> {
    fn uncensored_prefixes(&self) -> Vec<String> {
        self.clone()
    }
}

/// Configuration for number parsing and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Ordered uncensored prefix patterns.
    pub uncensored_prefixes: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            uncensored_prefixes: split_prefix_list(DEFAULT_UNCENSORED_PREFIXES),
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with the stock prefix list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prefix list.
    pub fn with_uncensored_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uncensored_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the prefix list from a comma-separated string.
    pub fn with_uncensored_csv(mut self, csv: &str) -> Self {
        self.uncensored_prefixes = split_prefix_list(csv);
        self
    }
}

impl PrefixSource for ParserConfig {
    fn uncensored_prefixes(&self) -> Vec<String> {
        self.uncensored_prefixes.clone()
    }
}
