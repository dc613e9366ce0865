//! # Token Normalizer
//!
//! Strips site tags, quality tokens, release-group brackets and date
//! prefixes from a basename before the separator and subtitle branches run.

use regex::Regex;

use crate::error::Result;

/// Returns the final path component, treating both `/` and `\` as
/// separators so Windows and UNC paths behave on every platform.
pub fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Noise-stripping patterns shared by the subtitle and separator branches.
pub struct Normalizer {
    re_noise: Regex,
    re_brackets: Regex,
    re_date_prefix: Regex,
}

impl Normalizer {
    /// Compiles the normalizer patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_noise: Regex::new(
                r"(?i)^\w+\.(?:cc|com|net|me|club|jp|tv|xyz|biz|wiki|info|tw|us|de)@|^22-sht\.me|^(?:fhd|hd|sd|1080p|720p|4K)[-_]|[-_](?:fhd|hd|sd|1080p|720p|4K|x264|x265|uncensored|leak)",
            )?,
            re_brackets: Regex::new(r"\[.*?\]")?,
            re_date_prefix: Regex::new(r"\[\d{4}-\d{1,2}-\d{1,2}\] - ")?,
        })
    }

    /// Removes site tags and resolution/encoding tokens.
    pub fn strip_noise(&self, name: &str) -> String {
        self.re_noise.replace_all(name, "").into_owned()
    }

    /// Removes `[...]` segments.
    pub fn strip_brackets(&self, name: &str) -> String {
        self.re_brackets.replace_all(name, "").into_owned()
    }

    /// Removes `[YYYY-M-D] - ` date stamps.
    pub fn strip_date_prefix(&self, name: &str) -> String {
        self.re_date_prefix.replace_all(name, "").into_owned()
    }
}

/// Removes the `.chs` / `.cht` language markers.
pub fn strip_language_suffix(name: &str) -> String {
    name.replace(".chs", "").replace(".cht", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn basename_handles_every_separator() {
        assert_eq!(basename("/a/b/snis-829.mp4"), "snis-829.mp4");
        assert_eq!(basename(r"C:\a\b\snis-829.mp4"), "snis-829.mp4");
        assert_eq!(basename(r"\\NAS\smb\videos\390JNT-023.mp4"), "390JNT-023.mp4");
        assert_eq!(basename("./snis-829.mp4"), "snis-829.mp4");
        assert_eq!(basename("snis-829.mp4"), "snis-829.mp4");
        assert_eq!(basename("dir/"), "");
    }

    #[test]
    fn strips_site_tags() {
        let n = normalizer();
        assert_eq!(n.strip_noise("hhd800.com@STARS-566.mp4"), "STARS-566.mp4");
        assert_eq!(n.strip_noise("sbw99.cc@iesp-653.mp4"), "iesp-653.mp4");
        assert_eq!(n.strip_noise("22-sht.me-abp-123.mp4"), "-abp-123.mp4");
    }

    #[test]
    fn strips_quality_tokens() {
        let n = normalizer();
        assert_eq!(n.strip_noise("4K-ABP-358_C.mkv"), "ABP-358_C.mkv");
        assert_eq!(n.strip_noise("STARS-566-HD.mp4"), "STARS-566.mp4");
        assert_eq!(n.strip_noise("GIGL-677_4K.mp4"), "GIGL-677.mp4");
        assert_eq!(
            n.strip_noise("SDDE-625_uncensored_leak_C.mp4"),
            "SDDE-625_C.mp4"
        );
        assert_eq!(n.strip_noise("abc-123-x265.mkv"), "abc-123.mkv");
    }

    #[test]
    fn strip_noise_is_idempotent_on_clean_input() {
        let n = normalizer();
        for clean in ["SNIS-829.mp4", "ssni984.mp4", "ABP-358_C.mkv"] {
            assert_eq!(n.strip_noise(clean), clean);
            assert_eq!(n.strip_noise(&n.strip_noise(clean)), clean);
        }
    }

    #[test]
    fn strips_brackets_non_greedy() {
        let n = normalizer();
        assert_eq!(n.strip_brackets("[A]title[B].mp4"), "title.mp4");
        assert_eq!(n.strip_brackets("no brackets.mp4"), "no brackets.mp4");
    }

    #[test]
    fn strips_date_prefix() {
        let n = normalizer();
        assert_eq!(n.strip_date_prefix("[2021-8-5] - ABP-123.mp4"), "ABP-123.mp4");
        assert_eq!(n.strip_date_prefix("[21-8-5] - ABP-123.mp4"), "[21-8-5] - ABP-123.mp4");
    }

    #[test]
    fn strips_language_suffix() {
        assert_eq!(strip_language_suffix("title.chs.mp4"), "title.mp4");
        assert_eq!(strip_language_suffix("title.cht.srt"), "title.srt");
    }
}
