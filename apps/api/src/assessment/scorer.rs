//! Assessment scoring: a pluggable analyzer that turns a student's
//! answers into a full `AnalysisResult`.
//!
//! Default: `KeywordScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn AssessmentScorer>`, chosen at startup.

use crate::assessment::{careers, interests, narrative, strengths, traits};
use crate::models::{AnalysisResult, StudentInfo, UserResponse};

/// Implement this to swap scoring backends without touching the handler.
pub trait AssessmentScorer: Send + Sync {
    fn analyze(&self, info: &StudentInfo, responses: &[UserResponse]) -> AnalysisResult;
}

/// Substring keyword scorer over fixed lookup tables.
///
/// Pipeline:
/// 1. Big Five traits from answer text
/// 2. RIASEC interests from answer text + favorite subjects
/// 3. Strengths from answers and label names
/// 4. Careers from the top two interests
/// 5. Narrative blocks from all of the above
pub struct KeywordScorer;

impl AssessmentScorer for KeywordScorer {
    fn analyze(&self, info: &StudentInfo, responses: &[UserResponse]) -> AnalysisResult {
        analyze(info, responses)
    }
}

pub fn analyze(info: &StudentInfo, responses: &[UserResponse]) -> AnalysisResult {
    let personality_traits = traits::score_traits(responses);
    let interest_profile = interests::score_interests(responses, &info.favorite_subjects);
    let strengths =
        strengths::identify_strengths(responses, &personality_traits, &interest_profile);
    let career_recommendations =
        careers::recommend_careers(&interest_profile, &personality_traits, &strengths);

    AnalysisResult {
        summary: narrative::summary(&personality_traits, &interest_profile, &strengths),
        encouraging_summary: narrative::encouraging_summary(&personality_traits, &strengths),
        strategic_direction: narrative::strategic_direction(&interest_profile, &strengths),
        counselor_summary: narrative::counselor_summary(
            info,
            &personality_traits,
            &interest_profile,
        ),
        parent_action_plan: narrative::parent_action_plan(&interest_profile, &strengths),
        personality_traits,
        strengths,
        interest_profile,
        career_recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::QUESTIONS;
    use crate::models::{BigFiveTrait, RiasecCategory};

    fn info(subjects: &str) -> StudentInfo {
        StudentInfo {
            name: "Alex".to_string(),
            age: "16".to_string(),
            grade: "11".to_string(),
            favorite_subjects: subjects.to_string(),
        }
    }

    /// Answers every catalog question with its first option.
    fn first_option_answers() -> Vec<UserResponse> {
        QUESTIONS
            .iter()
            .map(|q| UserResponse {
                question_id: q.id.to_string(),
                category: q.category,
                selected_value: q.options[0].to_string(),
            })
            .collect()
    }

    #[test]
    fn test_result_shape() {
        let result = KeywordScorer.analyze(&info("Art, Music"), &first_option_answers());
        assert_eq!(result.personality_traits.len(), 5);
        assert_eq!(result.interest_profile.len(), 6);
        assert!((3..=5).contains(&result.strengths.len()));
        assert!(result.career_recommendations.len() <= 4);
        assert_eq!(result.parent_action_plan.len(), 4);
        let order: Vec<BigFiveTrait> = result.personality_traits.iter().map(|t| t.name).collect();
        assert_eq!(order, BigFiveTrait::ALL.to_vec());
    }

    #[test]
    fn test_identical_input_gives_byte_identical_output() {
        let answers = first_option_answers();
        let a = serde_json::to_vec(&analyze(&info("Biology"), &answers)).unwrap();
        let b = serde_json::to_vec(&analyze(&info("Biology"), &answers)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_answers_do_not_panic() {
        let result = analyze(&info(""), &[]);
        assert!(result.personality_traits.iter().all(|t| t.score == 0.0));
        assert!(result.interest_profile.iter().all(|i| i.score == 0.0));
        // Everything ties at zero, so Realistic heads the profile.
        assert_eq!(result.interest_profile[0].category, RiasecCategory::Realistic);
        assert_eq!(result.career_recommendations[0].title, "Engineer");
    }

    #[test]
    fn test_investigative_profile_recommends_science_careers() {
        let answers: Vec<UserResponse> = QUESTIONS
            .iter()
            .filter(|q| q.category == crate::models::Category::Interests)
            .map(|q| UserResponse {
                question_id: q.id.to_string(),
                category: q.category,
                selected_value: "I love research and careful analysis".to_string(),
            })
            .collect();

        let result = analyze(&info("Math, Physics"), &answers);
        assert_eq!(result.interest_profile[0].category, RiasecCategory::Investigative);

        let titles: Vec<&str> = result
            .career_recommendations
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert!(titles.contains(&"Data Scientist"));
        assert!(titles.contains(&"Research Scientist"));
        assert!(result.strategic_direction.starts_with("Focus on research projects"));
        assert!(result.counselor_summary.contains("Favorite subjects: Math, Physics."));
    }

    #[test]
    fn test_conscientious_personality_answers() {
        let texts = [
            "I'm organized",
            "Disciplined",
            "Reliable",
            "Very organized",
            "Always reliable and disciplined",
            "Organized planner",
            "Reliable friend",
            "Disciplined worker",
        ];
        let answers: Vec<UserResponse> = QUESTIONS
            .iter()
            .filter(|q| q.category == crate::models::Category::Personality)
            .zip(texts)
            .map(|(q, text)| UserResponse {
                question_id: q.id.to_string(),
                category: q.category,
                selected_value: text.to_string(),
            })
            .collect();
        assert_eq!(answers.len(), 8);

        let result = analyze(&info(""), &answers);
        let c = &result.personality_traits[1];
        assert_eq!(c.name, BigFiveTrait::Conscientiousness);
        assert!(c.score > 0.6);
        assert_eq!(c.description, "Highly organized, disciplined, and goal-oriented");
    }
}
