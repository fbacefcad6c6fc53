// src/suggestions/mod.rs
pub mod advisor;

pub use advisor::{Advice, Advisor, AdvisorError, OpenAiAdvisor, PasswordProfile};

use rand::Rng;

use crate::core::error::Result;
use crate::generators::password::{PasswordGenerator, BASE_LENGTH, LENGTH_PER_LEVEL};
use crate::models::{
    distinct_categories, AnalysisReport, CharClass, PatternCategory, PolicyCheck, SecurityLevel,
    SuggestionReport,
};

pub const DEFAULT_ALTERNATIVES: usize = 3;
/// Alternatives are never generated below this level
pub const ALTERNATIVE_MIN_LEVEL: u8 = 4;
pub const RULE_BASED: &str = "Rule-based system";

fn category_advice(category: PatternCategory) -> (&'static str, &'static str) {
    match category {
        PatternCategory::Sequential => (
            "Contains sequential characters",
            "Avoid runs like 'abc' or '123'",
        ),
        PatternCategory::Repeated => (
            "Contains repeated characters",
            "Avoid repeating the same character back to back",
        ),
        PatternCategory::KeyboardAdjacent => (
            "Contains a keyboard pattern",
            "Avoid rows of neighbouring keys such as 'qwerty'",
        ),
        PatternCategory::DictionaryWord => (
            "Contains a dictionary word",
            "Replace whole words with unrelated random words or characters",
        ),
        PatternCategory::CommonTerm => (
            "Contains a commonly used password",
            "Never reuse passwords that appear in leaked password lists",
        ),
        PatternCategory::BannedTerm => (
            "Contains a term banned by the policy",
            "Remove organisation names and other banned terms",
        ),
        PatternCategory::DatePattern => (
            "Contains a year",
            "Avoid birth years and other dates",
        ),
    }
}

fn policy_improvement(check: PolicyCheck) -> &'static str {
    match check {
        PolicyCheck::Entropy => "Make the password longer and mix more character types",
        PolicyCheck::Length => "Add more characters to reach the minimum length",
        PolicyCheck::BannedSubstring => "Remove the banned term",
        PolicyCheck::SpecialCharacter => "Add a special character such as ! @ # $ %",
        PolicyCheck::Uppercase => "Add uppercase letters",
        PolicyCheck::Lowercase => "Add lowercase letters",
        PolicyCheck::Digit => "Add numeric digits",
    }
}

/// Weaknesses and their paired improvements, derived only from the analysis.
///
/// One entry per distinct finding category (with the first match as an example),
/// then either every policy failure or, without a policy verdict, the length and
/// class expectations of the requested security level.
pub fn rule_based_advice(report: &AnalysisReport) -> (Vec<String>, Vec<String>) {
    let mut weaknesses = Vec::new();
    let mut improvements = Vec::new();

    for category in distinct_categories(&report.patterns) {
        let (weakness, improvement) = category_advice(category);
        match report.patterns.iter().find(|f| f.kind.category() == category) {
            Some(example) => weaknesses.push(format!("{} ('{}')", weakness, example.matched)),
            None => weaknesses.push(weakness.to_string()),
        }
        improvements.push(improvement.to_string());
    }

    match &report.policy_verdict {
        Some(verdict) => {
            for failure in &verdict.failures {
                weaknesses.push(failure.message.clone());
                improvements.push(policy_improvement(failure.check).to_string());
            }
        }
        None => level_advice(report, &mut weaknesses, &mut improvements),
    }

    (weaknesses, improvements)
}

fn level_advice(report: &AnalysisReport, weaknesses: &mut Vec<String>, improvements: &mut Vec<String>) {
    let level = report.security_level.get();
    let composition = &report.composition;

    let min_length = BASE_LENGTH + LENGTH_PER_LEVEL * level as usize;
    if composition.length < min_length {
        weaknesses.push("Your password is too short for the requested security level".to_string());
        improvements.push(format!("Use at least {} characters", min_length));
    }

    let mut expected = vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];
    if level >= 2 {
        expected.push(CharClass::Special);
    }
    for class in expected {
        if !composition.has(class) {
            weaknesses.push(format!("Missing {}", class.label()));
            improvements.push(format!("Add {}", class.label()));
        }
    }

    if level >= 4 && composition.has(CharClass::Special) && composition.special.count < 2 {
        weaknesses.push("Not enough special characters for a high security level".to_string());
        improvements.push("Use at least 2 special characters".to_string());
    }
}

/// Turn an analysis into advice plus `count` generated alternatives.
///
/// An advisor, if given, replaces the rule-based text; when it fails the
/// rule-based text is used. Alternatives always come from the generator at
/// level 4 or higher, in the report's mode.
pub fn build_suggestions<R: Rng + ?Sized>(
    report: &AnalysisReport,
    generator: &PasswordGenerator,
    count: usize,
    advisor: Option<&dyn Advisor>,
    rng: &mut R,
) -> Result<SuggestionReport> {
    let alternative_level: SecurityLevel = report.security_level.at_least(ALTERNATIVE_MIN_LEVEL);
    let alternatives = (0..count)
        .map(|_| generator.generate_with_rng(alternative_level, report.mode, rng))
        .collect::<Result<Vec<_>>>()?;

    let advised = advisor.and_then(|advisor| {
        let profile = PasswordProfile::from_report(report);
        match advisor.advise(&profile, report.security_level) {
            Ok(advice) => Some((advice, advisor.name())),
            Err(e) => {
                log::warn!("Advisor {} failed, using rule-based suggestions: {}", advisor.name(), e);
                None
            }
        }
    });

    let (weaknesses, improvements, generated_by) = match advised {
        Some((advice, name)) => (advice.weaknesses, advice.improvements, name),
        None => {
            let (weaknesses, improvements) = rule_based_advice(report);
            (weaknesses, improvements, RULE_BASED.to_string())
        }
    };

    Ok(SuggestionReport {
        weaknesses,
        improvements,
        alternatives,
        generated_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Engine;
    use crate::models::PolicyMode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct FixedAdvisor;

    impl Advisor for FixedAdvisor {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn advise(&self, profile: &PasswordProfile, _level: SecurityLevel) -> advisor::Result<Advice> {
            Ok(Advice {
                weaknesses: vec![format!("only {} characters", profile.length)],
                improvements: vec!["longer".to_string()],
            })
        }
    }

    struct DownAdvisor;

    impl Advisor for DownAdvisor {
        fn name(&self) -> String {
            "down".to_string()
        }

        fn advise(&self, _profile: &PasswordProfile, _level: SecurityLevel) -> advisor::Result<Advice> {
            Err(AdvisorError::Api { status: 503, body: "unavailable".into() })
        }
    }

    fn analyze(password: &str, mode: PolicyMode, level: u8) -> AnalysisReport {
        Engine::default()
            .analyze(password, mode, SecurityLevel::new(level).unwrap())
            .unwrap()
    }

    #[test]
    fn weaknesses_pair_with_improvements() {
        let report = analyze("password", PolicyMode::Enhanced, 3);
        let (weaknesses, improvements) = rule_based_advice(&report);
        assert_eq!(weaknesses.len(), improvements.len());
        // repeated + dictionary + banned categories, then six policy failures
        assert_eq!(weaknesses.len(), 3 + 6);
        assert!(weaknesses[0].starts_with("Contains repeated characters"));
        assert!(weaknesses.iter().any(|w| w.contains("banned term 'password'")));
    }

    #[test]
    fn standard_mode_uses_level_expectations() {
        let report = analyze("xqzvkwjm", PolicyMode::Standard, 2);
        let (weaknesses, _) = rule_based_advice(&report);
        assert_eq!(
            weaknesses,
            vec![
                "Your password is too short for the requested security level",
                "Missing uppercase letters",
                "Missing digits",
                "Missing special characters",
            ]
        );
    }

    #[test]
    fn alternatives_are_level_four_or_higher() {
        let report = analyze("abc", PolicyMode::Standard, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let suggestions =
            build_suggestions(&report, &PasswordGenerator::default(), 3, None, &mut rng).unwrap();
        assert_eq!(suggestions.alternatives.len(), 3);
        for alternative in &suggestions.alternatives {
            // level 4 standard: 16 characters including a special
            assert!(alternative.chars().count() >= 16);
            assert!(alternative.chars().any(|c| CharClass::of(c) == CharClass::Special));
        }
        assert_eq!(suggestions.generated_by, RULE_BASED);
    }

    #[test]
    fn advisor_overrides_text_and_failure_falls_back() {
        let report = analyze("abc", PolicyMode::Standard, 3);
        let generator = PasswordGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let advised = build_suggestions(&report, &generator, 1, Some(&FixedAdvisor), &mut rng).unwrap();
        assert_eq!(advised.weaknesses, vec!["only 3 characters"]);
        assert_eq!(advised.generated_by, "fixed");
        assert_eq!(advised.alternatives.len(), 1);

        let fallback = build_suggestions(&report, &generator, 1, Some(&DownAdvisor), &mut rng).unwrap();
        assert_eq!(fallback.generated_by, RULE_BASED);
        assert_eq!(fallback.weaknesses, rule_based_advice(&report).0);
    }
}
