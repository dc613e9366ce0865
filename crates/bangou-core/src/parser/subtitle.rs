//! # Subtitle/Language Branch
//!
//! Fan-subbed releases are named after their (usually Japanese) title
//! rather than a catalog code. For those the "number" is the title itself,
//! with release-group brackets and noise tokens removed.

use regex::Regex;

use super::normalize::{strip_language_suffix, Normalizer};
use crate::error::Result;

const SUBTITLE_GROUP_MARKER: &str = "字幕组";

/// Detector and title extractor for subtitle-group releases.
pub struct SubtitleBranch {
    re_katakana_lead: Regex,
}

impl SubtitleBranch {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_katakana_lead: Regex::new(r"^[\x{30A0}-\x{30FF}]+")?,
        })
    }

    /// Returns `true` for names carrying a subtitle-group marker, `SUB`, or
    /// a leading Katakana run.
    pub fn applies(&self, basename: &str) -> bool {
        basename.contains(SUBTITLE_GROUP_MARKER)
            || basename.to_uppercase().contains("SUB")
            || self.re_katakana_lead.is_match(basename)
    }

    /// Returns the cleaned title: everything before the first `.`.
    pub fn extract(&self, normalizer: &Normalizer, basename: &str) -> Option<String> {
        let cleaned = normalizer.strip_noise(basename);
        let cleaned = normalizer.strip_brackets(&cleaned);
        let cleaned = strip_language_suffix(&cleaned);
        cleaned
            .split_once('.')
            .map(|(title, _)| title.to_string())
    }
}
