//! # Special-Studio Rule Table
//!
//! Each rule recognizes one studio or site naming convention and emits the
//! number in that catalog's canonical shape. Rules are probed in declaration
//! order and the first successful extraction wins, so the table order is part
//! of the contract: distinctive signatures sit above looser ones.

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{BangouError, Result};

type Formatter = fn(&Captures<'_>) -> Option<String>;

/// A detector + extractor pair for one naming convention.
pub struct StudioRule {
    name: &'static str,
    detector: Regex,
    extractor: Regex,
    format: Formatter,
}

impl StudioRule {
    fn new(
        name: &'static str,
        detector: &str,
        extractor: &str,
        format: Formatter,
    ) -> Result<Self> {
        Ok(Self {
            name,
            detector: Regex::new(&format!("(?i){detector}"))?,
            extractor: Regex::new(&format!("(?i){extractor}"))?,
            format,
        })
    }

    /// Rule name, e.g. `"heyzo"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the name carries this rule's signature.
    pub fn detects(&self, name: &str) -> bool {
        self.detector.is_match(name)
    }

    /// Extracts and formats the number.
    ///
    /// # Errors
    ///
    /// Returns `BangouError::MalformedCapture` when the extractor pattern or
    /// one of the groups the formatter needs is absent.
    pub fn extract(&self, name: &str) -> Result<String> {
        let malformed = || BangouError::MalformedCapture { rule: self.name };
        let caps = self.extractor.captures(name).ok_or_else(malformed)?;
        (self.format)(&caps).ok_or_else(malformed)
    }
}

/// Ordered table of studio rules.
pub struct StudioTable {
    rules: Vec<StudioRule>,
}

impl StudioTable {
    /// Builds the table in its fixed priority order.
    pub fn new() -> Result<Self> {
        let rules = vec![
            StudioRule::new("tokyo-hot", r"tokyo.*hot", r"(?:cz|gedo|k|n|red-|se)\d{2,4}", whole)?,
            StudioRule::new("caribbean", r"carib", r"\d{6}[-_]\d{3}", caribbean)?,
            StudioRule::new("1pondo", r"1pon|mura|paco", r"\d{6}[-_]\d{3}", underscored)?,
            StudioRule::new("10musume", r"10mu", r"\d{6}[-_]\d{2}", underscored)?,
            StudioRule::new("x-art", r"x-art", r"x-art\.\d{2}\.\d{2}\.\d{2}", whole)?,
            StudioRule::new("xxx-av", r"xxx-av", r"xxx-av\D*(\d{3,5})", xxx_av)?,
            StudioRule::new("heydouga", r"heydouga", r"(\d{4})[-_](\d{3,4})", heydouga)?,
            StudioRule::new("heyzo", r"heyzo", r"heyzo\D*(\d{4})", heyzo)?,
            StudioRule::new("madou", r"\bmd[a-z]{0,2}-\d{2,}", r"(md[a-z]{0,2}-?)(\d{2,})(-ep\d*)*", label4)?,
            StudioRule::new("mmz", r"\bmmz-\d{2,}", r"(mmz-?)(\d{2,})(-ep\d*)*", label3)?,
            StudioRule::new("msd", r"\bmsd-\d{2,}", r"(msd-?)(\d{2,})(-ep\d*)*", label3)?,
            StudioRule::new("mky", r"\bmky-[a-z]{2}-\d{2,}", r"(mky-[a-z]{2}-?)(\d{2,})(-ep\d*)*", label3)?,
            StudioRule::new("yk", r"\byk-\d{2,3}", r"(yk-?)(\d{2,})(-ep\d*)*", label3)?,
            StudioRule::new("pm", r"\bpm[a-z]?-?\d{2,}", r"(pm[a-z]?-?)(\d{2,})(-ep\d*)*", label3)?,
            StudioRule::new("tangxin-vlog", r"糖心Vlog", r"(.*?)\.\w+", vlog)?,
            StudioRule::new("av9898", r"AV9898", r"\([^()]*[0-9]+[-_][0-9]+\)", whole)?,
        ];

        Ok(Self { rules })
    }

    /// The rules in probe order.
    pub fn rules(&self) -> &[StudioRule] {
        &self.rules
    }

    /// Probes the table and returns the first successful `(rule, number)`.
    ///
    /// A rule whose detector fires but whose extraction fails is skipped;
    /// it never stops the remaining rules from being tried.
    pub fn match_special(&self, basename: &str) -> Option<(&'static str, String)> {
        for rule in &self.rules {
            if !rule.detects(basename) {
                continue;
            }
            match rule.extract(basename) {
                Ok(number) => {
                    debug!(rule = rule.name, number = %number, "studio rule matched");
                    return Some((rule.name, number));
                }
                Err(err) => {
                    debug!(rule = rule.name, error = %err, "studio rule skipped");
                }
            }
        }
        None
    }
}

fn whole(caps: &Captures<'_>) -> Option<String> {
    caps.get(0).map(|m| m.as_str().to_string())
}

// Caribbean uses `-` between date and index, 1Pondo & co. use `_`.
fn caribbean(caps: &Captures<'_>) -> Option<String> {
    whole(caps).map(|s| s.replace('_', "-"))
}

fn underscored(caps: &Captures<'_>) -> Option<String> {
    whole(caps).map(|s| s.replace('-', "_"))
}

fn xxx_av(caps: &Captures<'_>) -> Option<String> {
    Some(format!("xxx-av-{}", caps.get(1)?.as_str()))
}

fn heydouga(caps: &Captures<'_>) -> Option<String> {
    Some(format!(
        "heydouga-{}-{}",
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str()
    ))
}

fn heyzo(caps: &Captures<'_>) -> Option<String> {
    Some(format!("HEYZO-{}", caps.get(1)?.as_str()))
}

fn label4(caps: &Captures<'_>) -> Option<String> {
    label(caps, 4)
}

fn label3(caps: &Captures<'_>) -> Option<String> {
    label(caps, 3)
}

/// `md-12-ep2` -> `MD0012-ep2`: prefix without hyphens, upper-cased, digits
/// zero-padded to `width`, episode suffix untouched.
fn label(caps: &Captures<'_>, width: usize) -> Option<String> {
    let prefix = caps.get(1)?.as_str().replace('-', "").to_uppercase();
    let digits = caps.get(2)?.as_str();
    let episode = caps.get(3).map_or("", |m| m.as_str());
    Some(format!("{prefix}{digits:0>width$}{episode}"))
}

fn vlog(caps: &Captures<'_>) -> Option<String> {
    let stem = caps.get(1)?.as_str();
    let title = stem.rsplit_once('_').map_or(stem, |(head, _)| head);
    Some(title.trim_matches([' ', '#']).to_string())
}
