use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rust_passguard::analysis::{analyze_composition, estimate_entropy, Tuning};
use rust_passguard::core::engine::Engine;
use rust_passguard::core::error::EngineError;
use rust_passguard::generators::PasswordGenerator;
use rust_passguard::models::{
    AttackProfile, PatternCategory, PolicyCheck, PolicyMode, SecurityLevel, StrengthCategory,
    TimeBucket,
};
use rust_passguard::policy::{evaluate_policy, ENHANCED_POLICY};
use rust_passguard::suggestions::{Advice, Advisor, AdvisorError, PasswordProfile};

fn level(n: u8) -> SecurityLevel {
    SecurityLevel::new(n).unwrap()
}

#[test]
fn empty_password_is_rejected_everywhere() {
    let engine = Engine::default();
    for mode in [PolicyMode::Standard, PolicyMode::Enhanced] {
        assert!(matches!(
            engine.analyze("", mode, level(3)),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.suggest("", mode, level(3)),
            Err(EngineError::InvalidInput(_))
        ));
    }
}

#[test]
fn levels_outside_one_to_five_are_invalid() {
    assert!(matches!(SecurityLevel::new(0), Err(EngineError::InvalidInput(_))));
    assert!(matches!(SecurityLevel::new(6), Err(EngineError::InvalidInput(_))));
    assert!(SecurityLevel::new(1).is_ok());
    assert!(SecurityLevel::new(5).is_ok());
}

#[test]
fn password_fails_enhanced_policy_in_check_order() {
    let report = Engine::default()
        .analyze("password", PolicyMode::Enhanced, level(3))
        .unwrap();

    assert_eq!(report.strength.category, StrengthCategory::VeryWeak);
    let verdict = report.policy_verdict.unwrap();
    assert!(!verdict.compliant);
    assert_eq!(
        verdict.failed_checks(),
        vec![
            PolicyCheck::Entropy,
            PolicyCheck::Length,
            PolicyCheck::BannedSubstring,
            PolicyCheck::SpecialCharacter,
            PolicyCheck::Uppercase,
            PolicyCheck::Digit,
        ]
    );
}

#[test]
fn findings_only_lower_the_adjusted_entropy() {
    let report = Engine::default()
        .analyze("qwerty2024", PolicyMode::Standard, level(3))
        .unwrap();
    let categories: Vec<_> = report.patterns.iter().map(|f| f.kind.category()).collect();
    assert!(categories.contains(&PatternCategory::KeyboardAdjacent));
    assert!(categories.contains(&PatternCategory::DatePattern));
    assert!(report.entropy.adjusted_bits < report.entropy.raw_bits);
    assert!(report.entropy.adjusted_bits >= report.entropy.raw_bits * 0.1);
}

#[test]
fn strong_password_resists_fast_offline_attack() {
    let report = Engine::default()
        .analyze("Tr0ub4dor&3xtra!2024", PolicyMode::Standard, level(3))
        .unwrap();
    assert!(report.strength.category >= StrengthCategory::Strong);

    let fast = report.attack.estimate(AttackProfile::OfflineFastHash).unwrap();
    assert_ne!(fast.bucket, TimeBucket::Instant);
    let throttled = report.attack.estimate(AttackProfile::OnlineThrottled).unwrap();
    assert!(throttled.bucket >= fast.bucket);
}

#[test]
fn huge_keyspace_reports_infinite_instead_of_overflowing() {
    let password: String = "Aa1!".repeat(40);
    let report = Engine::default()
        .analyze(&password, PolicyMode::Standard, level(5))
        .unwrap();
    for estimate in &report.attack.estimates {
        assert_eq!(estimate.bucket, TimeBucket::Infinite);
    }
    assert!(report.entropy.possible_combinations.contains("e+"));
}

#[test]
fn enhanced_generation_round_trips_through_the_policy() {
    let generator = PasswordGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for n in 1..=5 {
        let password = generator
            .generate_with_rng(level(n), PolicyMode::Enhanced, &mut rng)
            .unwrap();
        let composition = analyze_composition(&password).unwrap();
        let entropy = estimate_entropy(&composition, &[], &Tuning::default());
        let verdict = evaluate_policy(&password, &entropy, &ENHANCED_POLICY).unwrap();
        assert!(verdict.compliant, "{} failed {:?}", password, verdict.failures);
    }
}

struct OfflineAdvisor;

impl Advisor for OfflineAdvisor {
    fn name(&self) -> String {
        "offline".to_string()
    }

    fn advise(
        &self,
        _profile: &PasswordProfile,
        _level: SecurityLevel,
    ) -> Result<Advice, AdvisorError> {
        Err(AdvisorError::MissingKey)
    }
}

#[test]
fn failing_advisor_never_surfaces_an_error() {
    let engine = Engine::default().with_advisor(Box::new(OfflineAdvisor));
    let suggestions = engine
        .suggest("letmein", PolicyMode::Standard, level(3))
        .unwrap();
    assert_eq!(suggestions.generated_by, "Rule-based system");
    assert!(!suggestions.weaknesses.is_empty());
    assert_eq!(suggestions.weaknesses.len(), suggestions.improvements.len());
    assert_eq!(suggestions.alternatives.len(), 3);
}
