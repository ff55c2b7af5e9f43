//! Narrative text blocks for the report. All functions are pure templates over
//! already-computed scores.
//!
//! "Top trait" means the highest score with ties going to enumeration order;
//! "top interest" is the head of the (already sorted) interest profile.

use crate::assessment::traits::ranked_traits;
use crate::models::{InterestScore, RiasecCategory, StudentInfo, TraitScore};

const GENERIC_DIRECTION: &str =
    "Focus on activities that align with your top interests and strengths.";

const GENERIC_ACTION_PLAN: [&str; 4] = [
    "Support exploration of various interests",
    "Encourage participation in relevant activities",
    "Connect with mentors in areas of interest",
    "Provide resources for skill development",
];

fn top_two_strengths(strengths: &[String]) -> String {
    strengths
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ")
}

pub fn summary(traits: &[TraitScore], interests: &[InterestScore], strengths: &[String]) -> String {
    let (trait_name, trait_desc) = ranked_traits(traits)
        .first()
        .map(|t| (t.name.label().to_lowercase(), t.description.to_lowercase()))
        .unwrap_or_default();
    let (interest_name, interest_desc) = interests
        .first()
        .map(|i| (i.category.label().to_lowercase(), i.description.to_lowercase()))
        .unwrap_or_default();

    format!(
        "Based on your assessment, you demonstrate strong {trait_name} traits and a primary interest in {interest_name} activities. \
         Your profile suggests a student who {trait_desc} and is drawn to {interest_desc}. \
         Your strengths in {} position you well for careers that align with these characteristics.",
        top_two_strengths(strengths)
    )
}

pub fn encouraging_summary(traits: &[TraitScore], strengths: &[String]) -> String {
    let trait_name = ranked_traits(traits)
        .first()
        .map(|t| t.name.label())
        .unwrap_or_default();

    format!(
        "Your {trait_name} is one of your greatest assets! This trait, combined with your strengths in {}, \
         creates a unique profile that sets you apart. What makes you special is how these qualities work together: \
         your natural abilities aren't just individual strengths, but a powerful combination that can lead to \
         remarkable achievements. Embrace these qualities as your superpower!",
        top_two_strengths(strengths)
    )
}

fn direction_for(category: RiasecCategory) -> &'static str {
    match category {
        RiasecCategory::Investigative => "Focus on research projects, science fairs, and analytical problem-solving activities. Join STEM clubs and seek out mentorship in your areas of interest.",
        RiasecCategory::Artistic => "Build a creative portfolio, participate in art competitions, and explore different mediums. Connect with creative communities and showcase your work.",
        RiasecCategory::Social => "Seek leadership roles in clubs, volunteer opportunities, and peer mentoring. Develop communication skills through debate, drama, or student government.",
        RiasecCategory::Enterprising => "Start small business projects, join entrepreneurship clubs, and seek leadership opportunities. Build your network and develop business skills.",
        RiasecCategory::Realistic => "Engage in hands-on projects, technical workshops, and building activities. Consider internships or apprenticeships in technical fields.",
        RiasecCategory::Conventional => "Develop organizational skills through planning events or managing projects. Focus on detail-oriented activities and systematic approaches.",
    }
}

/// Strengths are accepted for signature parity with the other generators; the
/// directive depends on the top interest alone.
pub fn strategic_direction(interests: &[InterestScore], _strengths: &[String]) -> String {
    interests
        .first()
        .map(|i| direction_for(i.category))
        .unwrap_or(GENERIC_DIRECTION)
        .to_string()
}

pub fn counselor_summary(
    info: &StudentInfo,
    traits: &[TraitScore],
    interests: &[InterestScore],
) -> String {
    let top_traits = ranked_traits(traits)
        .iter()
        .take(3)
        .map(|t| t.name.label())
        .collect::<Vec<_>>()
        .join(", ");
    let top_interests: Vec<&str> = interests.iter().take(2).map(|i| i.category.label()).collect();
    let focus = top_interests
        .iter()
        .map(|c| c.to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ");

    format!(
        "Student in grade {} (age {}) shows strong {top_traits} traits. \
         Primary interests align with {} categories. \
         Favorite subjects: {}. \
         Recommended focus areas: {focus} career exploration.",
        info.grade,
        info.age,
        top_interests.join(" and "),
        info.favorite_subjects,
    )
}

fn action_plan_for(category: RiasecCategory) -> [&'static str; 4] {
    match category {
        RiasecCategory::Investigative => [
            "Encourage participation in STEM competitions and science fairs",
            "Explore coding bootcamps or programming courses",
            "Support research projects and scientific inquiry",
            "Connect with mentors in STEM fields",
        ],
        RiasecCategory::Artistic => [
            "Support creative expression through art supplies and classes",
            "Encourage participation in art competitions and exhibitions",
            "Explore digital design and multimedia tools",
            "Connect with local art communities and mentors",
        ],
        RiasecCategory::Social => [
            "Encourage leadership roles in school clubs and organizations",
            "Support volunteer opportunities and community service",
            "Explore teaching or mentoring opportunities",
            "Develop communication skills through debate or drama",
        ],
        RiasecCategory::Enterprising => [
            "Support entrepreneurial projects and business ideas",
            "Encourage participation in business competitions",
            "Explore leadership opportunities and management roles",
            "Connect with business mentors and entrepreneurs",
        ],
        RiasecCategory::Realistic => [
            "Support hands-on projects and technical activities",
            "Explore engineering or technical programs",
            "Encourage participation in maker spaces or workshops",
            "Connect with technical mentors and professionals",
        ],
        RiasecCategory::Conventional => [
            "Support organizational and planning activities",
            "Encourage participation in structured programs",
            "Explore data analysis and administrative skills",
            "Develop attention to detail through focused projects",
        ],
    }
}

pub fn parent_action_plan(interests: &[InterestScore], _strengths: &[String]) -> Vec<String> {
    interests
        .first()
        .map(|i| action_plan_for(i.category))
        .unwrap_or(GENERIC_ACTION_PLAN)
        .iter()
        .map(|s| s.to_string())
        .collect()
}
