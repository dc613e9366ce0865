pub mod result;
pub mod source;

pub use result::ParsedNumber;
pub use source::MatchSource;
