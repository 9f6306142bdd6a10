// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{MatchError, Matcher};
pub use scoring::score_match;
