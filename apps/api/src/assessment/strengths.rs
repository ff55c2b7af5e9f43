use crate::models::{InterestScore, TraitScore, UserResponse};

const MAX_STRENGTHS: usize = 5;
const MIN_STRENGTHS: usize = 3;

/// Candidate strengths in declaration order, each with its trigger keywords.
const STRENGTH_MAP: &[(&str, &[&str])] = &[
    (
        "Analytical thinking",
        &["investigative", "research", "analysis", "problem-solving"],
    ),
    (
        "Creative problem-solving",
        &["artistic", "creative", "imaginative", "openness"],
    ),
    (
        "Communication skills",
        &["social", "extraversion", "helping", "teaching"],
    ),
    (
        "Leadership abilities",
        &["enterprising", "leading", "managing", "confident"],
    ),
    (
        "Attention to detail",
        &["conventional", "organized", "conscientiousness", "systematic"],
    ),
    (
        "Technical aptitude",
        &["realistic", "hands-on", "technical", "mechanical"],
    ),
    (
        "Emotional intelligence",
        &["social", "agreeableness", "empathetic", "understanding"],
    ),
    (
        "Adaptability",
        &["openness", "flexible", "curious", "adventurous"],
    ),
];

const FILLER_STRENGTHS: &[&str] = &["Critical thinking", "Collaboration", "Time management"];

/// Picks 3–5 strength labels.
///
/// The search corpus is every answer plus every trait and category *name*,
/// so label words like "openness" or "social" participate in matching.
pub fn identify_strengths(
    responses: &[UserResponse],
    traits: &[TraitScore],
    interests: &[InterestScore],
) -> Vec<String> {
    let corpus = responses
        .iter()
        .map(|r| r.selected_value.to_lowercase())
        .chain(traits.iter().map(|t| t.name.label().to_lowercase()))
        .chain(interests.iter().map(|i| i.category.label().to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ");

    let mut strengths: Vec<String> = STRENGTH_MAP
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| corpus.contains(kw)))
        .map(|(label, _)| label.to_string())
        .take(MAX_STRENGTHS)
        .collect();

    if strengths.len() < MIN_STRENGTHS {
        strengths.extend(FILLER_STRENGTHS.iter().map(|s| s.to_string()));
        strengths.truncate(MAX_STRENGTHS);
    }

    strengths
}
