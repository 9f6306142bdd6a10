use crate::models::{Mentor, ScoringWeights, Student};

/// Emotional state that earns the bonus point
const STRESSED: &str = "stressed";

/// Calculate a match score for a mentor against a student
///
/// Scoring formula (default weights):
/// score = subject_match * 3      # subject_need in mentor expertise
///       + time_match * 2        # available_time overlap
///       + region_match * 1      # region overlap
///       + language_match * 1    # language overlap
///       + stressed_bonus * 1    # student is stressed
///
/// Each criterion is independent; comparisons are exact-value membership
/// tests with no normalization.
pub fn score_match(student: &Student, mentor: &Mentor, weights: &ScoringWeights) -> u32 {
    let mut score = 0;

    if mentor.expertise.contains(&student.subject_need) {
        score += weights.subject;
    }

    if mentor.available_time.contains(&student.available_time) {
        score += weights.time;
    }

    if mentor.region.contains(&student.region) {
        score += weights.region;
    }

    if mentor.language.contains(&student.language) {
        score += weights.language;
    }

    if student.emotional_state == STRESSED {
        score += weights.stressed_bonus;
    }

    score
}
