use tracing::info;

/// Candidates shorter than this (in characters) are rejected.
pub const MIN_NUMBER_LEN: usize = 5;

/// Leftover quality tokens that mark a candidate as garbage.
const NOISE_TOKENS: &[&str] = &["000K_", "1080P", "480P", "720P", "360P"];

/// Final gate applied to every branch's candidate.
///
/// Returns `None` for candidates that are too short or still carry a
/// resolution token some rule failed to strip.
pub fn filter(candidate: String) -> Option<String> {
    if candidate.chars().count() < MIN_NUMBER_LEN {
        info!(candidate = %candidate, "rejected number: too short");
        return None;
    }

    if let Some(token) = NOISE_TOKENS.iter().find(|t| candidate.contains(*t)) {
        info!(candidate = %candidate, token = *token, "rejected number: residual quality token");
        return None;
    }

    Some(candidate)
}
