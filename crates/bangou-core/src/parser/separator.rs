//! # Generic Separator Heuristic
//!
//! Handles the common `LABEL-123` family. The true code is a pair of word
//! runs joined by `-` or `_`, but names also carry decorative joined pairs
//! (site codes, dates), so the pair holding a digit run is preferred. When
//! the code itself spans three tokens (`prefix-subprefix-number`) the digit
//! segment and its predecessor are taken instead.

use regex::Regex;
use tracing::debug;

use super::normalize::Normalizer;
use crate::error::Result;

/// Separator-based number extraction.
pub struct SeparatorHeuristic {
    re_disc: Regex,
    re_word: Regex,
    re_pair: Regex,
    re_pair_unicode: Regex,
    re_triple_unicode: Regex,
    re_digits: Regex,
    re_subtitle_suffix: Regex,
    re_ch_suffix: Regex,
}

impl SeparatorHeuristic {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_disc: Regex::new(r"(?i)[-_]cd\d{1,2}")?,
            re_word: Regex::new(r"[0-9A-Za-z_]+")?,
            re_pair: Regex::new(r"[0-9A-Za-z_]+[-_][0-9A-Za-z_]+")?,
            re_pair_unicode: Regex::new(r"\w+[-_]\w+")?,
            re_triple_unicode: Regex::new(r"\w+[-_]\w+[-_]\w+")?,
            re_digits: Regex::new(r"\d{2,}")?,
            re_subtitle_suffix: Regex::new(r"(?i)[-_]c$")?,
            re_ch_suffix: Regex::new(r"(?i)\d+ch$")?,
        })
    }

    /// Returns `true` when the name contains `-`, `_` or a space.
    pub fn applies(&self, basename: &str) -> bool {
        basename.contains(['-', '_', ' '])
    }

    /// Runs the heuristic on a basename.
    pub fn extract(&self, normalizer: &Normalizer, basename: &str) -> Option<String> {
        let name = normalizer.strip_noise(basename);
        let name = normalizer.strip_date_prefix(&name);
        let name = if name.to_lowercase().contains("fc2") {
            rewrite_fc2(&name)
        } else {
            name
        };
        let name = self.re_disc.replace_all(&name, "").into_owned();

        // n1012-CD1.wmv: nothing left to split on once the disc marker is gone
        if !name.contains(['-', '_']) {
            let stem = name.split_once('.').map_or(name.as_str(), |(stem, _)| stem);
            return self.re_word.find(stem).map(|m| m.as_str().to_string());
        }

        let mut number = self.pick_span(&name)?;
        if !self.re_digits.is_match(&number) {
            number = self.widen_span(&name, &number)?;
        }

        let mut number = self.re_subtitle_suffix.replace(&number, "").into_owned();
        if self.re_ch_suffix.is_match(&number) {
            number.truncate(number.len() - 2);
        }

        Some(number.to_uppercase())
    }

    /// First joined pair carrying a 2+ digit run, else the first pair.
    fn pick_span(&self, name: &str) -> Option<String> {
        let spans: Vec<&str> = self.re_pair.find_iter(name).map(|m| m.as_str()).collect();
        let chosen = spans
            .iter()
            .find(|span| self.re_digits.is_match(span))
            .or(spans.first())?;
        debug!(spans = spans.len(), chosen = %chosen, "separator span");
        Some((*chosen).to_string())
    }

    /// Three-token codes: pair the first digit-bearing segment (third
    /// onward) with the segment before it.
    fn widen_span(&self, name: &str, span: &str) -> Option<String> {
        let mut candidate = span.to_string();

        if self.re_triple_unicode.is_match(name) {
            let joined = name.replace('_', "-").replace("--", "-");
            let segments: Vec<&str> = joined.split('-').collect();
            if segments.len() > 2 {
                if let Some(idx) = (2..segments.len()).find(|&i| self.re_digits.is_match(segments[i])) {
                    candidate = format!("{}-{}", segments[idx - 1], segments[idx]);
                }
            }
        }

        self.re_pair_unicode
            .find(&candidate)
            .map(|m| m.as_str().to_string())
    }
}

/// FC2 releases are spelled every way imaginable; fold them to
/// `FC2-<digits>`.
fn rewrite_fc2(name: &str) -> String {
    name.to_lowercase()
        .replace("ppv", "")
        .replace(' ', "-")
        .replace("--", "-")
        .replace('_', "-")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str) -> Option<String> {
        let heuristic = SeparatorHeuristic::new().unwrap();
        let normalizer = Normalizer::new().unwrap();
        heuristic.extract(&normalizer, name)
    }

    #[test]
    fn applies_only_with_separators() {
        let h = SeparatorHeuristic::new().unwrap();
        assert!(h.applies("snis-829.mp4"));
        assert!(h.applies("SSIS101_C.mp4"));
        assert!(h.applies("abc 123.mp4"));
        assert!(!h.applies("ssni984.mp4"));
    }

    #[test]
    fn plain_code_is_upper_cased() {
        assert_eq!(run("snis-829.mp4").as_deref(), Some("SNIS-829"));
        assert_eq!(run("MEYD-594-C.mp4").as_deref(), Some("MEYD-594"));
    }

    #[test]
    fn strips_hardcoded_subtitle_marker() {
        assert_eq!(run("snis-829-C.mp4").as_deref(), Some("SNIS-829"));
        assert_eq!(run("SSIS-001_C.mp4").as_deref(), Some("SSIS-001"));
        assert_eq!(run("SSIS100-C.mp4").as_deref(), Some("SSIS100"));
        assert_eq!(run("SSIS101_C.mp4").as_deref(), Some("SSIS101"));
    }

    #[test]
    fn strips_ch_marker() {
        assert_eq!(run("rctd-460ch.mp4").as_deref(), Some("RCTD-460"));
        assert_eq!(run("rctd-461CH-CD2.mp4").as_deref(), Some("RCTD-461"));
    }

    #[test]
    fn strips_disc_marker_in_any_position() {
        assert_eq!(run("ADV-R0624-CD3.wmv").as_deref(), Some("ADV-R0624"));
        assert_eq!(run("rctd-461-Cd3-C.mp4").as_deref(), Some("RCTD-461"));
        assert_eq!(run("rctd-461-C-cD4.mp4").as_deref(), Some("RCTD-461"));
    }

    #[test]
    fn disc_only_separator_keeps_word_run() {
        assert_eq!(run("n1012-CD1.wmv").as_deref(), Some("n1012"));
        assert_eq!(run("[]n1012-CD2.wmv").as_deref(), Some("n1012"));
    }

    #[test]
    fn strips_noise_tokens_first() {
        assert_eq!(run("SDDE-625_uncensored_C.mp4").as_deref(), Some("SDDE-625"));
        assert_eq!(
            run("SDDE-625_uncensored_leak_C_cd1.mp4").as_deref(),
            Some("SDDE-625")
        );
        assert_eq!(run("hhd800.com@STARS-566-HD.mp4").as_deref(), Some("STARS-566"));
        assert_eq!(run("jav20s8.com@GIGL-677_4K.mp4").as_deref(), Some("GIGL-677"));
        assert_eq!(run("sbw99.cc@iesp-653-4K.mp4").as_deref(), Some("IESP-653"));
        assert_eq!(run("4K-ABP-358_C.mkv").as_deref(), Some("ABP-358"));
    }

    #[test]
    fn strips_date_prefix_before_span_scan() {
        assert_eq!(run("[2021-08-05] - ABP-123.mp4").as_deref(), Some("ABP-123"));
    }

    #[test]
    fn fc2_variants_fold_together() {
        assert_eq!(run("FC2-PPV-1234567.mp4").as_deref(), Some("FC2-1234567"));
        assert_eq!(run("FC2 PPV 1234567.mp4").as_deref(), Some("FC2-1234567"));
        assert_eq!(
            run("vAAXV.a234=XYZ-FC2-1945430.MP4").as_deref(),
            Some("FC2-1945430")
        );
    }

    #[test]
    fn prefers_digit_bearing_span() {
        assert_eq!(run("site-tag ABP-123.mp4").as_deref(), Some("ABP-123"));
    }

    #[test]
    fn three_segment_code_takes_digit_segment() {
        assert_eq!(run("xyz-abc-12.mp4").as_deref(), Some("ABC-12"));
    }

    #[test]
    fn no_digits_anywhere_uses_first_span() {
        assert_eq!(run("abc-def ghi-jkl.mp4").as_deref(), Some("ABC-DEF"));
    }

    #[test]
    fn no_joined_pair_yields_nothing() {
        assert_eq!(run("abc- def.mp4"), None);
    }
}
