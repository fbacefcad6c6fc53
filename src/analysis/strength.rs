// src/analysis/strength.rs
use crate::analysis::Tuning;
use crate::models::{
    distinct_categories, CharClass, CompositionReport, EntropyReport, PatternFinding,
    StrengthCategory, StrengthResult,
};

/// Map a 0-100 score onto its tier: 0-20, 21-40, 41-60, 61-80, 81-100.
pub fn category_for(score: u8) -> StrengthCategory {
    match score {
        0..=20 => StrengthCategory::VeryWeak,
        21..=40 => StrengthCategory::Weak,
        41..=60 => StrengthCategory::Medium,
        61..=80 => StrengthCategory::Strong,
        _ => StrengthCategory::VeryStrong,
    }
}

/// Score a password from its adjusted entropy, pattern categories and class coverage.
///
/// The entropy part grows linearly up to `max_bits_for_full_score`; each distinct
/// finding category and each unused character class then subtracts a fixed amount.
pub fn score_strength(
    entropy: &EntropyReport,
    findings: &[PatternFinding],
    composition: &CompositionReport,
    tuning: &Tuning,
) -> StrengthResult {
    let base = (entropy.adjusted_bits / tuning.max_bits_for_full_score).min(1.0) * 100.0;

    let pattern_penalty = distinct_categories(findings).len() as f64 * tuning.score_penalty_per_category;
    let missing_classes = CharClass::ALL.len() - composition.classes_present().len();
    let class_penalty = missing_classes as f64 * tuning.missing_class_penalty;

    let score = (base - pattern_penalty - class_penalty).clamp(0.0, 100.0).round() as u8;
    let category = category_for(score);

    StrengthResult {
        score,
        category,
        color: category.color().to_string(),
    }
}
