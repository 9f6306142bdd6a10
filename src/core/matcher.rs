use crate::core::scoring::score_match;
use crate::models::{MatchResult, Mentor, ScoringWeights, Student};
use thiserror::Error;

/// Number of runner-up mentors returned alongside the best match
const MAX_ALTERNATIVES: usize = 2;

/// Errors produced by the match engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("student with id {0} not found")]
    StudentNotFound(String),
}

/// Mentor paired with its score, alive only while ranking one request
#[derive(Debug)]
struct ScoredCandidate<'a> {
    mentor: &'a Mentor,
    score: u32,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Locate the student by id
/// 2. Score every mentor against the student
/// 3. Stable sort by score descending
/// 4. Slice best match plus up to two alternatives
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find the best mentor matches for a student
    ///
    /// # Arguments
    /// * `student_id` - Id of the student to match
    /// * `students` - All student records from the data provider
    /// * `mentors` - All mentor records from the data provider
    ///
    /// # Returns
    /// The located student, the highest-scored mentor (None when the mentor
    /// collection is empty), and up to two runners-up in rank order.
    ///
    /// Mentors with equal scores keep their relative order from the input
    /// collection; that order decides which of them is presented as best.
    pub fn find_best_matches(
        &self,
        student_id: &str,
        students: &[Student],
        mentors: &[Mentor],
    ) -> Result<MatchResult, MatchError> {
        let student = students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or_else(|| MatchError::StudentNotFound(student_id.to_string()))?;

        let mut candidates: Vec<ScoredCandidate> = mentors
            .iter()
            .map(|mentor| ScoredCandidate {
                mentor,
                score: score_match(student, mentor, &self.weights),
            })
            .collect();

        // sort_by is stable, so ties retain input order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let best_match = candidates.first().map(|c| c.mentor.clone());
        let alternatives = candidates
            .iter()
            .skip(1)
            .take(MAX_ALTERNATIVES)
            .map(|c| c.mentor.clone())
            .collect();

        Ok(MatchResult {
            student: student.clone(),
            best_match,
            alternatives,
        })
    }

    /// Score a single student/mentor pair under this matcher's weights
    pub fn score(&self, student: &Student, mentor: &Mentor) -> u32 {
        score_match(student, mentor, &self.weights)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_student(id: &str) -> Student {
        Student {
            id: id.to_string(),
            subject_need: "math".to_string(),
            available_time: "morning".to_string(),
            region: "telangana".to_string(),
            language: "telugu".to_string(),
            emotional_state: "neutral".to_string(),
        }
    }

    fn create_mentor(id: &str, expertise: &[&str]) -> Mentor {
        Mentor {
            id: id.to_string(),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            available_time: vec!["morning".to_string()],
            region: vec!["telangana".to_string()],
            language: vec!["telugu".to_string()],
        }
    }

    #[test]
    fn test_best_match_has_highest_score() {
        let matcher = Matcher::with_default_weights();
        let students = vec![create_student("S001")];
        let mentors = vec![
            create_mentor("M001", &["history"]),
            create_mentor("M002", &["math"]),
        ];

        let result = matcher
            .find_best_matches("S001", &students, &mentors)
            .unwrap();

        assert_eq!(result.best_match.unwrap().id, "M002");
        assert_eq!(result.alternatives.len(), 1);
        assert_eq!(result.alternatives[0].id, "M001");
    }

    #[test]
    fn test_unknown_student_is_not_found() {
        let matcher = Matcher::with_default_weights();
        let students = vec![create_student("S001")];
        let mentors = vec![create_mentor("M001", &["math"])];

        let err = matcher
            .find_best_matches("S999", &students, &mentors)
            .unwrap_err();

        assert!(matches!(err, MatchError::StudentNotFound(id) if id == "S999"));
    }

    #[test]
    fn test_empty_mentor_collection_is_not_an_error() {
        let matcher = Matcher::with_default_weights();
        let students = vec![create_student("S001")];

        let result = matcher.find_best_matches("S001", &students, &[]).unwrap();

        assert!(result.best_match.is_none());
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let students = vec![create_student("S001")];
        // Identical mentors score identically; input order must decide
        let mentors = vec![
            create_mentor("M001", &["math"]),
            create_mentor("M002", &["math"]),
            create_mentor("M003", &["math"]),
        ];

        let result = matcher
            .find_best_matches("S001", &students, &mentors)
            .unwrap();

        assert_eq!(result.best_match.unwrap().id, "M001");
        assert_eq!(result.alternatives[0].id, "M002");
        assert_eq!(result.alternatives[1].id, "M003");
    }

    #[test]
    fn test_alternatives_capped_at_two() {
        let matcher = Matcher::with_default_weights();
        let students = vec![create_student("S001")];
        let mentors: Vec<Mentor> = (0..6)
            .map(|i| create_mentor(&format!("M{:03}", i), &["math"]))
            .collect();

        let result = matcher
            .find_best_matches("S001", &students, &mentors)
            .unwrap();

        assert_eq!(result.alternatives.len(), 2);
    }
}
