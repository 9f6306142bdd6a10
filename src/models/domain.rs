use serde::{Deserialize, Serialize};

/// Student record seeking a mentor match
///
/// Each matching attribute carries a single category value. Values are
/// assumed pre-normalized by the data provider; comparisons are exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub subject_need: String,
    pub available_time: String,
    pub region: String,
    pub language: String,
    pub emotional_state: String,
}

/// Mentor record, a candidate match
///
/// Each matching attribute carries the set of values the mentor accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub expertise: Vec<String>,
    pub available_time: Vec<String>,
    pub region: Vec<String>,
    pub language: Vec<String>,
}

/// Result of one match computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub student: Student,
    pub best_match: Option<Mentor>,
    pub alternatives: Vec<Mentor>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub subject: u32,
    pub time: u32,
    pub region: u32,
    pub language: u32,
    pub stressed_bonus: u32,
}

impl ScoringWeights {
    /// Highest score any mentor can reach under these weights
    pub fn max_score(&self) -> u32 {
        self.subject + self.time + self.region + self.language + self.stressed_bonus
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            subject: 3,
            time: 2,
            region: 1,
            language: 1,
            stressed_bonus: 1,
        }
    }
}
