//! Career lookup: a static table of three careers per RIASEC category.

use std::collections::HashSet;

use crate::models::{CareerRecommendation, InterestScore, RiasecCategory, TraitScore};

const TOP_CATEGORIES: usize = 2;
const PER_CATEGORY: usize = 2;
const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct CareerEntry {
    title: &'static str,
    match_percentage: u8,
    why: &'static str,
    path: &'static str,
}

const fn career(
    title: &'static str,
    match_percentage: u8,
    why: &'static str,
    path: &'static str,
) -> CareerEntry {
    CareerEntry {
        title,
        match_percentage,
        why,
        path,
    }
}

#[rustfmt::skip]
const INVESTIGATIVE: &[CareerEntry] = &[
    career("Data Scientist", 92, "Your analytical skills and investigative nature align perfectly", "Pursue Computer Science or Statistics degree"),
    career("Research Scientist", 88, "Strong investigative interests and analytical thinking", "Focus on research opportunities and advanced degrees"),
    career("Software Engineer", 85, "Technical aptitude combined with problem-solving skills", "Build coding projects and pursue CS degree"),
];

#[rustfmt::skip]
const ARTISTIC: &[CareerEntry] = &[
    career("Graphic Designer", 90, "Creative abilities and artistic interests", "Build portfolio and study design principles"),
    career("Content Creator", 87, "Creative expression and communication skills", "Develop multimedia skills and build audience"),
    career("Architect", 85, "Combines creativity with technical skills", "Study architecture and develop design portfolio"),
];

#[rustfmt::skip]
const SOCIAL: &[CareerEntry] = &[
    career("Teacher/Educator", 93, "Strong social interests and communication skills", "Pursue education degree and gain teaching experience"),
    career("Counselor", 90, "Empathetic nature and helping orientation", "Study psychology or counseling, gain experience"),
    career("Healthcare Professional", 88, "Social interests and helping others", "Pursue medical or healthcare degree"),
];

#[rustfmt::skip]
const ENTERPRISING: &[CareerEntry] = &[
    career("Business Manager", 91, "Leadership abilities and business interests", "Study business administration and gain management experience"),
    career("Entrepreneur", 89, "Entrepreneurial spirit and enterprising nature", "Start with small projects and build business skills"),
    career("Marketing Manager", 87, "Combines creativity with business acumen", "Study marketing and build campaign experience"),
];

#[rustfmt::skip]
const REALISTIC: &[CareerEntry] = &[
    career("Engineer", 92, "Technical aptitude and hands-on interests", "Pursue engineering degree in your interest area"),
    career("Mechanic/Technician", 88, "Practical skills and technical interests", "Complete technical training and certifications"),
    career("Architect", 85, "Combines technical skills with design", "Study architecture and develop technical skills"),
];

#[rustfmt::skip]
const CONVENTIONAL: &[CareerEntry] = &[
    career("Accountant", 90, "Organized nature and attention to detail", "Pursue accounting degree and CPA certification"),
    career("Data Analyst", 88, "Systematic approach and analytical skills", "Learn data analysis tools and statistics"),
    career("Administrative Manager", 85, "Organizational skills and structured thinking", "Gain administrative experience and management skills"),
];

fn careers_for(category: RiasecCategory) -> &'static [CareerEntry] {
    match category {
        RiasecCategory::Investigative => INVESTIGATIVE,
        RiasecCategory::Artistic => ARTISTIC,
        RiasecCategory::Social => SOCIAL,
        RiasecCategory::Enterprising => ENTERPRISING,
        RiasecCategory::Realistic => REALISTIC,
        RiasecCategory::Conventional => CONVENTIONAL,
    }
}

/// Recommends up to four careers from the two highest-ranked interest
/// categories. `interests` must already be sorted highest first.
///
/// Traits and strengths are accepted so callers pass the full profile, but
/// selection depends only on the interest ranking.
pub fn recommend_careers(
    interests: &[InterestScore],
    _traits: &[TraitScore],
    _strengths: &[String],
) -> Vec<CareerRecommendation> {
    let candidates = interests
        .iter()
        .take(TOP_CATEGORIES)
        .flat_map(|interest| careers_for(interest.category).iter().take(PER_CATEGORY));

    let mut seen = HashSet::new();
    let mut unique: Vec<&CareerEntry> = candidates.filter(|c| seen.insert(c.title)).collect();

    unique.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    unique.truncate(MAX_RECOMMENDATIONS);

    unique
        .into_iter()
        .map(|c| CareerRecommendation {
            title: c.title.to_string(),
            match_percentage: c.match_percentage,
            why_it_matches: c.why.to_string(),
            suggested_path: c.path.to_string(),
        })
        .collect()
}
