//! Big Five trait scoring by substring keyword counts normalized by response count.

use crate::models::{BigFiveTrait, TraitScore, UserResponse};

/// Description tier for a trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitLevel {
    High,
    Medium,
    Low,
}

impl TraitLevel {
    /// > 0.6 high, > 0.3 medium, otherwise low.
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            TraitLevel::High
        } else if score > 0.3 {
            TraitLevel::Medium
        } else {
            TraitLevel::Low
        }
    }
}

fn trait_keywords(t: BigFiveTrait) -> &'static [&'static str] {
    match t {
        BigFiveTrait::Openness => &[
            "creative",
            "imaginative",
            "curious",
            "artistic",
            "open-minded",
            "adventurous",
        ],
        BigFiveTrait::Conscientiousness => &[
            "organized",
            "disciplined",
            "responsible",
            "reliable",
            "hardworking",
            "detail-oriented",
        ],
        BigFiveTrait::Extraversion => &[
            "outgoing",
            "social",
            "energetic",
            "talkative",
            "confident",
            "assertive",
        ],
        BigFiveTrait::Agreeableness => &[
            "cooperative",
            "trusting",
            "empathetic",
            "kind",
            "helpful",
            "compassionate",
        ],
        BigFiveTrait::Neuroticism => &[
            "anxious",
            "worried",
            "stressed",
            "emotional",
            "sensitive",
            "nervous",
        ],
    }
}

pub fn trait_description(t: BigFiveTrait, level: TraitLevel) -> &'static str {
    use BigFiveTrait::*;
    use TraitLevel::*;

    match (t, level) {
        (Openness, High) => "Highly open to new experiences, creative, and intellectually curious",
        (Openness, Medium) => "Moderately open to new ideas and experiences",
        (Openness, Low) => "Prefers familiar routines and traditional approaches",
        (Conscientiousness, High) => "Highly organized, disciplined, and goal-oriented",
        (Conscientiousness, Medium) => "Moderately organized and reliable",
        (Conscientiousness, Low) => "More flexible and spontaneous in approach",
        (Extraversion, High) => "Highly outgoing, energetic, and socially confident",
        (Extraversion, Medium) => "Moderately social and comfortable in groups",
        (Extraversion, Low) => "More reserved and prefers smaller, intimate settings",
        (Agreeableness, High) => "Highly cooperative, trusting, and empathetic",
        (Agreeableness, Medium) => "Generally cooperative and considerate",
        (Agreeableness, Low) => "More independent and direct in communication",
        (Neuroticism, High) => "May experience higher emotional sensitivity",
        (Neuroticism, Medium) => "Moderate emotional stability",
        (Neuroticism, Low) => "High emotional stability and resilience",
    }
}

/// Scores all five traits. Output order is always `BigFiveTrait::ALL`.
///
/// A response bumps every trait whose keyword list it hits, so one answer can
/// count toward several traits. Zero responses yields all-zero, low-tier scores.
pub fn score_traits(responses: &[UserResponse]) -> Vec<TraitScore> {
    let mut counts = [0_u32; 5];

    for response in responses {
        let value = response.selected_value.to_lowercase();
        for (i, t) in BigFiveTrait::ALL.iter().enumerate() {
            if trait_keywords(*t).iter().any(|kw| value.contains(kw)) {
                counts[i] += 1;
            }
        }
    }

    let total = responses.len();

    BigFiveTrait::ALL
        .iter()
        .zip(counts)
        .map(|(t, count)| {
            let score = if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64).min(1.0)
            };
            TraitScore {
                name: *t,
                description: trait_description(*t, TraitLevel::from_score(score)).to_string(),
                score,
            }
        })
        .collect()
}

/// Returns traits ranked by score, highest first. Ties keep enumeration order.
pub fn ranked_traits(traits: &[TraitScore]) -> Vec<&TraitScore> {
    let mut ranked: Vec<&TraitScore> = traits.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
