//! # Uncensored Classifier
//!
//! Decides whether a number belongs to an uncensored catalog. Built-in
//! code shapes are checked first; only on a miss is the user prefix list
//! consulted. That list is compiled once and cached until
//! [`UncensoredClassifier::reset`] drops it.

use std::sync::{PoisonError, RwLock};

use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::PrefixSource;
use crate::error::{BangouError, Result};

/// Classifier with a lazily compiled prefix matcher.
pub struct UncensoredClassifier {
    re_builtin: Regex,
    prefixes: RwLock<Option<Regex>>,
}

impl UncensoredClassifier {
    /// Compiles the built-in signatures. The prefix matcher starts empty.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_builtin: Regex::new(
                r"(?i)^(?:[\d-]{4,}|\d{6}_\d{2,3}|(?:cz|gedo|k|n|red-|se)\d{2,4}|heyzo.+|xxx-av-.+|heydouga-.+|x-art\.\d{2}\.\d{2}\.\d{2})",
            )?,
            prefixes: RwLock::new(None),
        })
    }

    /// Returns `true` if the number has a built-in uncensored code shape.
    pub fn matches_builtin(&self, number: &str) -> bool {
        self.re_builtin.is_match(number)
    }

    /// Classifies a number.
    ///
    /// `source` is read only when the built-in signatures miss and no
    /// matcher has been compiled yet.
    ///
    /// # Errors
    ///
    /// Returns `BangouError::ConfigurationInvalid` if the prefix list has
    /// to be compiled and is empty, starts with an empty entry, or holds an
    /// invalid pattern.
    pub fn is_uncensored<S>(&self, number: &str, source: &S) -> Result<bool>
    where
        S: PrefixSource + ?Sized,
    {
        if self.matches_builtin(number) {
            return Ok(true);
        }

        {
            let guard = self.prefixes.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref matcher) = *guard {
                return Ok(matcher.is_match(number));
            }
        }

        let mut guard = self.prefixes.write().unwrap_or_else(PoisonError::into_inner);
        // another thread may have compiled it while we waited for the lock
        if guard.is_none() {
            let matcher = compile_prefixes(&source.uncensored_prefixes()).inspect_err(|err| {
                warn!(error = %err, "uncensored prefix list rejected");
            })?;
            debug!(pattern = matcher.as_str(), "compiled uncensored prefix matcher");
            *guard = Some(matcher);
        }

        Ok(guard.as_ref().is_some_and(|matcher| matcher.is_match(number)))
    }

    /// Returns `true` once the prefix matcher has been compiled.
    pub fn is_initialized(&self) -> bool {
        self.prefixes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drops the compiled matcher; the next miss re-reads the prefix source.
    pub fn reset(&self) {
        *self.prefixes.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Builds the anchored, case-insensitive prefix matcher.
///
/// The first entry is used as given; every later entry must be followed by
/// at least one more character. Empty later entries are skipped.
pub fn compile_prefixes(prefixes: &[String]) -> Result<Regex> {
    let (first, rest) = prefixes
        .split_first()
        .ok_or_else(|| BangouError::ConfigurationInvalid("prefix list is empty".into()))?;
    if first.is_empty() {
        return Err(BangouError::ConfigurationInvalid(
            "first prefix entry is empty".into(),
        ));
    }

    let mut pattern = format!("(?i)^(?:{first}");
    for prefix in rest.iter().filter(|p| !p.is_empty()) {
        pattern.push('|');
        pattern.push_str(prefix);
        pattern.push_str(".+");
    }
    pattern.push(')');

    Regex::new(&pattern).map_err(|err| BangouError::ConfigurationInvalid(err.to_string()))
}

static CLASSIFIER: OnceCell<UncensoredClassifier> = OnceCell::new();

fn shared_classifier() -> Result<&'static UncensoredClassifier> {
    CLASSIFIER.get_or_try_init(UncensoredClassifier::new)
}

/// Classifies a number with the process-wide classifier.
///
/// The prefix list is read from `source` at most once per process (or once
/// per [`reset_prefix_matcher`] call).
///
/// ```
/// // built-in signatures never touch the prefix list
/// assert!(bangou_core::is_uncensored("HEYZO-2636", "").unwrap());
/// ```
pub fn is_uncensored<S>(number: &str, source: &S) -> Result<bool>
where
    S: PrefixSource + ?Sized,
{
    shared_classifier()?.is_uncensored(number, source)
}

/// Drops the process-wide prefix matcher.
pub fn reset_prefix_matcher() {
    if let Some(classifier) = CLASSIFIER.get() {
        classifier.reset();
    }
}
