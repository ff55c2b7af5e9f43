use serde::{Deserialize, Serialize};

/// Questionnaire section a question (and its responses) belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Personality,
    Interests,
    Strengths,
}

/// Immutable catalog entry. The full catalog lives in `assessment::questions`.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub question_id: String,
    pub category: Category,
    pub selected_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub name: String,
    pub age: String,
    pub grade: String,
    /// Comma-separated in practice, but only ever searched as a raw string.
    pub favorite_subjects: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring labels
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    /// Fixed enumeration order; trait results are always reported in this order.
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiasecCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCategory {
    /// Declaration order doubles as the tie-break order when ranking interests.
    pub const ALL: [RiasecCategory; 6] = [
        RiasecCategory::Realistic,
        RiasecCategory::Investigative,
        RiasecCategory::Artistic,
        RiasecCategory::Social,
        RiasecCategory::Enterprising,
        RiasecCategory::Conventional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiasecCategory::Realistic => "Realistic",
            RiasecCategory::Investigative => "Investigative",
            RiasecCategory::Artistic => "Artistic",
            RiasecCategory::Social => "Social",
            RiasecCategory::Enterprising => "Enterprising",
            RiasecCategory::Conventional => "Conventional",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub name: BigFiveTrait,
    pub description: String,
    pub score: f64, // 0.0 – 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterestScore {
    pub category: RiasecCategory,
    pub description: String,
    pub score: f64, // 0.0 – 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub match_percentage: u8,
    pub why_it_matches: String,
    pub suggested_path: String,
}

/// Complete result of one assessment. Returned by `POST /analyze` and cached
/// client-side as the "previous result".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub personality_traits: Vec<TraitScore>,
    pub strengths: Vec<String>,
    pub interest_profile: Vec<InterestScore>,
    pub career_recommendations: Vec<CareerRecommendation>,
    pub summary: String,
    pub encouraging_summary: String,
    pub strategic_direction: String,
    pub counselor_summary: String,
    pub parent_action_plan: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_response_uses_camel_case_wire_names() {
        let response: UserResponse = serde_json::from_value(json!({
            "questionId": "p1",
            "category": "Personality",
            "selectedValue": "I feel excited for the adventure"
        }))
        .unwrap();
        assert_eq!(response.question_id, "p1");
        assert_eq!(response.category, Category::Personality);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed = serde_json::from_value::<UserResponse>(json!({
            "questionId": "x1",
            "category": "Hobbies",
            "selectedValue": "anything"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_trait_score_serializes_label_under_trait_key() {
        let score = TraitScore {
            name: BigFiveTrait::Openness,
            description: "desc".to_string(),
            score: 0.5,
        };
        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(value["trait"], "Openness");
        assert_eq!(value["score"], 0.5);
    }

    #[test]
    fn test_career_recommendation_wire_names() {
        let rec = CareerRecommendation {
            title: "Engineer".to_string(),
            match_percentage: 92,
            why_it_matches: "why".to_string(),
            suggested_path: "path".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["matchPercentage"], 92);
        assert_eq!(value["whyItMatches"], "why");
        assert_eq!(value["suggestedPath"], "path");
    }
}
