//! # Fallback CID Extractor
//!
//! Names without any separator: content-ID style codes (`ssni984`,
//! `RJ374870`) and western dotted release dates (`brand.18.01.02`).

use regex::Regex;

use crate::error::Result;

pub struct CidFallback {
    re_western: Regex,
    re_file_tail: Regex,
}

impl CidFallback {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_western: Regex::new(r"[a-zA-Z]+\.\d{2}\.\d{2}\.\d{2}")?,
            re_file_tail: Regex::new(r#"[^<>/\\|:"*?]+\.\w+$"#)?,
        })
    }

    pub fn extract(&self, basename: &str) -> Option<String> {
        if let Some(m) = self.re_western.find(basename) {
            return Some(m.as_str().to_string());
        }

        if let Some((stem, _)) = self
            .re_file_tail
            .find(basename)
            .and_then(|m| m.as_str().split_once('.'))
        {
            return Some(stem.replace('_', "-"));
        }

        basename.split_once('.').map(|(stem, _)| stem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid() -> CidFallback {
        CidFallback::new().unwrap()
    }

    #[test]
    fn content_id_stem() {
        let c = cid();
        assert_eq!(c.extract("ssni984.mp4").as_deref(), Some("ssni984"));
        assert_eq!(c.extract("RJ374870.mkv").as_deref(), Some("RJ374870"));
    }

    #[test]
    fn western_dotted_code_is_verbatim() {
        let c = cid();
        assert_eq!(
            c.extract("brazzers.18.01.02.mp4").as_deref(),
            Some("brazzers.18.01.02")
        );
    }

    #[test]
    fn stem_stops_at_first_dot() {
        let c = cid();
        assert_eq!(c.extract("abcde.part1.mp4").as_deref(), Some("abcde"));
    }

    #[test]
    fn reserved_characters_are_skipped() {
        let c = cid();
        assert_eq!(c.extract("junk:ipx001.mp4").as_deref(), Some("ipx001"));
    }

    #[test]
    fn odd_extension_falls_back_to_first_dot() {
        let c = cid();
        assert_eq!(c.extract("ipx001.mp4!").as_deref(), Some("ipx001"));
    }

    #[test]
    fn no_dot_means_nothing() {
        assert_eq!(cid().extract("ssni984"), None);
    }
}
