// src/analysis/mod.rs
pub mod attack;
pub mod composition;
pub mod entropy;
pub mod patterns;
pub mod strength;
pub mod tables;

pub use attack::{simulate_attacks, AttackModel};
pub use composition::analyze_composition;
pub use entropy::estimate_entropy;
pub use patterns::detect_patterns;
pub use strength::score_strength;

// Hand-picked penalty constants; override through `Tuning`.

/// Fraction of raw entropy removed per distinct finding category
pub const ENTROPY_PENALTY_PER_CATEGORY: f64 = 0.20;
/// Adjusted entropy never drops below this fraction of raw entropy
pub const ENTROPY_FLOOR_RATIO: f64 = 0.10;
/// Adjusted entropy at which the entropy part of the score saturates
pub const MAX_BITS_FOR_FULL_SCORE: f64 = 80.0;
/// Score points removed per distinct finding category
pub const SCORE_PENALTY_PER_CATEGORY: f64 = 10.0;
/// Score points removed per character class the password does not use
pub const MISSING_CLASS_PENALTY: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub entropy_penalty_per_category: f64,
    pub entropy_floor_ratio: f64,
    pub max_bits_for_full_score: f64,
    pub score_penalty_per_category: f64,
    pub missing_class_penalty: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            entropy_penalty_per_category: ENTROPY_PENALTY_PER_CATEGORY,
            entropy_floor_ratio: ENTROPY_FLOOR_RATIO,
            max_bits_for_full_score: MAX_BITS_FOR_FULL_SCORE,
            score_penalty_per_category: SCORE_PENALTY_PER_CATEGORY,
            missing_class_penalty: MISSING_CLASS_PENALTY,
        }
    }
}
