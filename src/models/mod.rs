// Model exports
pub mod domain;
pub mod responses;

pub use domain::{MatchResult, Mentor, ScoringWeights, Student};
pub use responses::{ErrorResponse, HealthResponse, RefreshResponse};
