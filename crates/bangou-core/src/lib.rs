//! # Bangou Core
//!
//! Extracts canonical catalog numbers ("bangou") from noisy media file
//! names, and classifies them as censored or uncensored.
//!
//! ## Quick Start
//!
//! ```rust
//! use bangou_core::parser::NumberParser;
//!
//! let parser = NumberParser::new().unwrap();
//!
//! assert_eq!(parser.extract("/videos/snis-829-C.mp4").as_deref(), Some("SNIS-829"));
//! assert_eq!(parser.extract("caribean-020317_001.nfo").as_deref(), Some("020317-001"));
//! assert!(bangou_core::is_uncensored("020317-001", "").unwrap());
//! ```
pub mod config;
pub mod error;
pub mod parser;
pub mod types;
pub mod uncensored;

// Re-export primary API
pub use config::{ParserConfig, PrefixSource, DEFAULT_UNCENSORED_PREFIXES};
pub use error::{BangouError, Result};
pub use parser::{extract_identifier, parse, NumberParser, StudioRule, StudioTable};
pub use types::{MatchSource, ParsedNumber};
pub use uncensored::{is_uncensored, reset_prefix_matcher, UncensoredClassifier};
