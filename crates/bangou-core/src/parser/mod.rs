pub mod cid;
pub mod engine;
pub mod filter;
pub mod normalize;
pub mod separator;
pub mod studio;
pub mod subtitle;

pub use cid::CidFallback;
pub use engine::{extract_identifier, parse, NumberParser};
pub use filter::filter;
pub use normalize::{basename, Normalizer};
pub use separator::SeparatorHeuristic;
pub use studio::{StudioRule, StudioTable};
pub use subtitle::SubtitleBranch;
