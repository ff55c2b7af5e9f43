//! RIASEC interest scoring.

use crate::models::{InterestScore, RiasecCategory, UserResponse};

fn category_keywords(category: RiasecCategory) -> &'static [&'static str] {
    match category {
        RiasecCategory::Realistic => &[
            "hands-on",
            "practical",
            "technical",
            "mechanical",
            "building",
            "repairing",
            "outdoor",
        ],
        RiasecCategory::Investigative => &[
            "research",
            "analysis",
            "science",
            "math",
            "problem-solving",
            "investigating",
            "experimenting",
        ],
        RiasecCategory::Artistic => &[
            "creative",
            "artistic",
            "design",
            "music",
            "writing",
            "expression",
            "imaginative",
        ],
        RiasecCategory::Social => &[
            "helping",
            "teaching",
            "caring",
            "coaching",
            "mentoring",
            "supporting",
            "people",
        ],
        RiasecCategory::Enterprising => &[
            "leading",
            "managing",
            "selling",
            "persuading",
            "business",
            "entrepreneurial",
            "competitive",
        ],
        RiasecCategory::Conventional => &[
            "organized",
            "systematic",
            "data",
            "records",
            "structured",
            "administrative",
            "detail",
        ],
    }
}

pub fn interest_description(category: RiasecCategory) -> &'static str {
    match category {
        RiasecCategory::Realistic => {
            "Strong interest in hands-on, practical work with tools and machinery"
        }
        RiasecCategory::Investigative => {
            "Strong interest in research, analysis, and scientific inquiry"
        }
        RiasecCategory::Artistic => "Strong interest in creative expression and artistic endeavors",
        RiasecCategory::Social => "Strong interest in helping, teaching, and working with people",
        RiasecCategory::Enterprising => {
            "Strong interest in leadership, business, and entrepreneurial activities"
        }
        RiasecCategory::Conventional => {
            "Strong interest in organized, structured, and systematic work"
        }
    }
}

/// Scores the six RIASEC categories and returns them highest first.
///
/// A response counts toward a category when either its own text or the
/// favorite-subjects string contains a category keyword. So a subject match
/// adds one point per response, not one point overall. Counts are divided by
/// `responses + 1`.
pub fn score_interests(responses: &[UserResponse], favorite_subjects: &str) -> Vec<InterestScore> {
    let subjects = favorite_subjects.to_lowercase();
    let mut counts = [0_u32; 6];

    for response in responses {
        let value = response.selected_value.to_lowercase();
        for (i, category) in RiasecCategory::ALL.iter().enumerate() {
            if category_keywords(*category)
                .iter()
                .any(|kw| value.contains(kw) || subjects.contains(kw))
            {
                counts[i] += 1;
            }
        }
    }

    let denominator = (responses.len() + 1) as f64;

    let mut scores: Vec<InterestScore> = RiasecCategory::ALL
        .iter()
        .zip(counts)
        .map(|(category, count)| InterestScore {
            category: *category,
            description: interest_description(*category).to_string(),
            score: (count as f64 / denominator).min(1.0),
        })
        .collect();

    // sort_by is stable, so ties keep declaration order
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::collections::HashSet;

    fn response(text: &str) -> UserResponse {
        UserResponse {
            question_id: "i1".to_string(),
            category: Category::Interests,
            selected_value: text.to_string(),
        }
    }

    #[test]
    fn test_empty_input_keeps_declaration_order() {
        let scores = score_interests(&[], "");
        let order: Vec<RiasecCategory> = scores.iter().map(|s| s.category).collect();
        assert_eq!(order, RiasecCategory::ALL.to_vec());
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_denominator_has_plus_one_offset() {
        let scores = score_interests(&[response("Building a model")], "");
        assert_eq!(scores[0].category, RiasecCategory::Realistic);
        assert_eq!(scores[0].score, 0.5);
    }

    #[test]
    fn test_subjects_count_once_per_response() {
        let responses = vec![response("nothing"), response("still nothing"), response("zzz")];
        let scores = score_interests(&responses, "Music, History");
        let artistic = scores
            .iter()
            .find(|s| s.category == RiasecCategory::Artistic)
            .unwrap();
        assert_eq!(artistic.score, 0.75);
        assert_eq!(scores[0].category, RiasecCategory::Artistic);
    }

    #[test]
    fn test_research_answers_with_math_subjects_rank_investigative_first() {
        let responses = vec![
            response("I enjoy research projects"),
            response("Data analysis is fun"),
            response("Doing research in a lab"),
            response("Careful analysis"),
            response("research"),
            response("analysis of results"),
        ];
        let scores = score_interests(&responses, "Math, Physics");
        assert_eq!(scores[0].category, RiasecCategory::Investigative);
        assert!((scores[0].score - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_descending_with_all_categories_once() {
        let responses = vec![
            response("teaching people"),
            response("business and selling"),
            response("helping others"),
            response("design and music"),
        ];
        let scores = score_interests(&responses, "art");
        assert_eq!(scores.len(), 6);
        assert!(scores.windows(2).all(|w| w[0].score >= w[1].score));
        let unique: HashSet<RiasecCategory> = scores.iter().map(|s| s.category).collect();
        assert_eq!(unique.len(), 6);
        assert_eq!(scores[0].category, RiasecCategory::Social);
    }

    #[test]
    fn test_description_is_fixed_per_category() {
        let low = score_interests(&[], "");
        let high = score_interests(&[response("research")], "math");
        let desc = |list: &[InterestScore]| {
            list.iter()
                .find(|s| s.category == RiasecCategory::Investigative)
                .map(|s| s.description.clone())
                .unwrap()
        };
        assert_eq!(desc(&low), desc(&high));
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        // "data" hides inside "database"
        let scores = score_interests(&[response("database admin")], "");
        assert_eq!(scores[0].category, RiasecCategory::Conventional);
    }
}
