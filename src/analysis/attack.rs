// src/analysis/attack.rs
use crate::models::{
    distinct_categories, AttackProfile, AttackReport, CharClass, ComplexityTier, CompositionReport,
    CrackEstimate, DictionaryEstimate, DictionarySize, EntropyReport, PatternCategory, PatternFinding,
    PolicyMode, TimeBucket,
};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
/// Anything at or beyond ten thousand years is reported as infinite
const INFINITE_AFTER: f64 = 3.1536e11;

/// Guess rates (attempts per second) against a typical defender
pub const STANDARD_RATES: [f64; 4] = [100.0 / HOUR, 10.0, 1e4, 1e10];
/// Guess rates against a hardened defender (tighter throttling, costlier hashes)
pub const ENHANCED_RATES: [f64; 4] = [10.0 / HOUR, 1.0, 1e3, 1e9];
/// Network latency (online) and hashing hardware (offline) corrections, applied to the time
pub const PROFILE_CORRECTIONS: [f64; 4] = [1.2, 1.1, 1.0, 0.8];

pub const LOWERCASE_ONLY_FACTOR: f64 = 0.3;
pub const UPPERCASE_ONLY_FACTOR: f64 = 0.3;
pub const DIGITS_ONLY_FACTOR: f64 = 0.2;
pub const SPECIAL_ONLY_FACTOR: f64 = 0.3;
pub const WORD_LIST_FACTOR: f64 = 0.1;
pub const WORD_LIST_FACTOR_ENHANCED: f64 = 0.05;
pub const KEYBOARD_FACTOR: f64 = 0.15;
pub const MISSING_UPPERCASE_FACTOR: f64 = 0.6;
pub const MISSING_LOWERCASE_FACTOR: f64 = 0.6;
pub const MISSING_DIGIT_FACTOR: f64 = 0.7;
pub const MISSING_SPECIAL_FACTOR: f64 = 0.5;
pub const SHORT_ENHANCED_FACTOR: f64 = 0.5;
pub const ENHANCED_MIN_LENGTH: usize = 12;

fn profile_index(profile: AttackProfile) -> usize {
    match profile {
        AttackProfile::OnlineThrottled => 0,
        AttackProfile::OnlineUnthrottled => 1,
        AttackProfile::OfflineSlowHash => 2,
        AttackProfile::OfflineFastHash => 3,
    }
}

/// Attacker model: guess rates plus the discount factors applied for weak passwords.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackModel {
    pub standard_rates: [f64; 4],
    pub enhanced_rates: [f64; 4],
    pub profile_corrections: [f64; 4],
    pub lowercase_only: f64,
    pub uppercase_only: f64,
    pub digits_only: f64,
    pub special_only: f64,
    pub word_list: f64,
    pub word_list_enhanced: f64,
    pub keyboard: f64,
    pub missing_uppercase: f64,
    pub missing_lowercase: f64,
    pub missing_digit: f64,
    pub missing_special: f64,
    pub short_enhanced: f64,
    pub enhanced_min_length: usize,
}

impl Default for AttackModel {
    fn default() -> Self {
        Self {
            standard_rates: STANDARD_RATES,
            enhanced_rates: ENHANCED_RATES,
            profile_corrections: PROFILE_CORRECTIONS,
            lowercase_only: LOWERCASE_ONLY_FACTOR,
            uppercase_only: UPPERCASE_ONLY_FACTOR,
            digits_only: DIGITS_ONLY_FACTOR,
            special_only: SPECIAL_ONLY_FACTOR,
            word_list: WORD_LIST_FACTOR,
            word_list_enhanced: WORD_LIST_FACTOR_ENHANCED,
            keyboard: KEYBOARD_FACTOR,
            missing_uppercase: MISSING_UPPERCASE_FACTOR,
            missing_lowercase: MISSING_LOWERCASE_FACTOR,
            missing_digit: MISSING_DIGIT_FACTOR,
            missing_special: MISSING_SPECIAL_FACTOR,
            short_enhanced: SHORT_ENHANCED_FACTOR,
            enhanced_min_length: ENHANCED_MIN_LENGTH,
        }
    }
}

impl AttackModel {
    pub fn rate(&self, profile: AttackProfile, mode: PolicyMode) -> f64 {
        let rates = match mode {
            PolicyMode::Standard => &self.standard_rates,
            PolicyMode::Enhanced => &self.enhanced_rates,
        };
        rates[profile_index(profile)]
    }

    pub fn correction(&self, profile: AttackProfile) -> f64 {
        self.profile_corrections[profile_index(profile)]
    }

    /// Discount in (0, 1] for the non-randomness the analysis found.
    pub fn effectiveness_multiplier(
        &self,
        composition: &CompositionReport,
        mode: PolicyMode,
        findings: &[PatternFinding],
    ) -> f64 {
        let mut multiplier = 1.0;

        if let Some(class) = composition.single_class() {
            multiplier *= match class {
                CharClass::Lowercase => self.lowercase_only,
                CharClass::Uppercase => self.uppercase_only,
                CharClass::Digit => self.digits_only,
                CharClass::Special => self.special_only,
            };
        }

        let categories = distinct_categories(findings);
        if categories.iter().any(|c| c.is_word_list()) {
            multiplier *= if mode.is_enhanced() { self.word_list_enhanced } else { self.word_list };
        }
        if categories.contains(&PatternCategory::KeyboardAdjacent) {
            multiplier *= self.keyboard;
        }

        if mode.is_enhanced() {
            if !composition.has(CharClass::Uppercase) {
                multiplier *= self.missing_uppercase;
            }
            if !composition.has(CharClass::Lowercase) {
                multiplier *= self.missing_lowercase;
            }
            if !composition.has(CharClass::Digit) {
                multiplier *= self.missing_digit;
            }
            if !composition.has(CharClass::Special) {
                multiplier *= self.missing_special;
            }
            if composition.length < self.enhanced_min_length {
                multiplier *= self.short_enhanced;
            }
        }

        multiplier
    }
}

/// Estimate time-to-crack under each attacker profile.
///
/// Works in log10 space so a 94-symbol, 128-character keyspace never
/// overflows; times too large for an f64 come back as `seconds: None`.
pub fn simulate_attacks(
    entropy: &EntropyReport,
    composition: &CompositionReport,
    mode: PolicyMode,
    findings: &[PatternFinding],
    model: &AttackModel,
) -> AttackReport {
    let multiplier = model.effectiveness_multiplier(composition, mode, findings);

    let estimates = AttackProfile::ALL
        .iter()
        .map(|&profile| {
            let rate = model.rate(profile, mode);
            let log10_seconds = entropy.log10_keyspace - rate.log10()
                + (multiplier * model.correction(profile)).log10();
            let seconds = if log10_seconds < f64::MAX.log10() {
                Some(10f64.powf(log10_seconds))
            } else {
                None
            };
            let (bucket, display) = format_crack_time(seconds);

            CrackEstimate {
                profile,
                attempts_per_second: rate,
                effectiveness_multiplier: multiplier,
                seconds,
                bucket,
                display,
            }
        })
        .collect();

    AttackReport {
        estimates,
        dictionary: estimate_dictionary_attack(composition),
    }
}

pub fn time_bucket(seconds: f64) -> TimeBucket {
    if !seconds.is_finite() || seconds >= INFINITE_AFTER {
        TimeBucket::Infinite
    } else if seconds < 1.0 {
        TimeBucket::Instant
    } else if seconds < MINUTE {
        TimeBucket::Seconds
    } else if seconds < HOUR {
        TimeBucket::Minutes
    } else if seconds < DAY {
        TimeBucket::Hours
    } else if seconds < MONTH {
        TimeBucket::Days
    } else if seconds < YEAR {
        TimeBucket::Months
    } else {
        TimeBucket::Years
    }
}

/// Format a time for display; `None` means beyond representable and is infinite.
pub fn format_crack_time(seconds: Option<f64>) -> (TimeBucket, String) {
    let Some(seconds) = seconds else {
        return (TimeBucket::Infinite, "infinite".to_string());
    };

    let bucket = time_bucket(seconds);
    let display = match bucket {
        TimeBucket::Instant => "instant".to_string(),
        TimeBucket::Seconds => format!("{:.1} seconds", seconds),
        TimeBucket::Minutes => format!("{:.1} minutes", seconds / MINUTE),
        TimeBucket::Hours => format!("{:.1} hours", seconds / HOUR),
        TimeBucket::Days => format!("{:.1} days", seconds / DAY),
        TimeBucket::Months => format!("{:.1} months", seconds / MONTH),
        TimeBucket::Years => format!("{:.1} years", seconds / YEAR),
        TimeBucket::Infinite => "infinite".to_string(),
    };
    (bucket, display)
}

pub fn complexity_tier(composition: &CompositionReport) -> ComplexityTier {
    let length = composition.length;
    let classes = composition.classes_present().len();

    if length < 6 {
        ComplexityTier::VeryWeak
    } else if length < 8 || classes < 2 {
        ComplexityTier::Weak
    } else if length < 10 || classes < 3 {
        ComplexityTier::Medium
    } else if length < 12 || classes < 4 {
        ComplexityTier::Strong
    } else {
        ComplexityTier::VeryStrong
    }
}

/// Rough cost of a word-list attack, driven only by the complexity tier.
pub fn estimate_dictionary_attack(composition: &CompositionReport) -> DictionaryEstimate {
    let complexity = complexity_tier(composition);
    let (crackability, dictionary, modifier) = match complexity {
        ComplexityTier::VeryWeak => ("Likely in common dictionary", DictionarySize::Common, 0.8),
        ComplexityTier::Weak => ("Possible with medium dictionary", DictionarySize::Medium, 0.5),
        ComplexityTier::Medium => ("Might require large dictionary with rules", DictionarySize::Large, 0.3),
        _ => ("Unlikely to be cracked with dictionary approach", DictionarySize::Large, 0.05),
    };
    let entries: f64 = match dictionary {
        DictionarySize::Common => 10_000.0,
        DictionarySize::Medium => 1_000_000.0,
        DictionarySize::Large => 100_000_000.0,
    };
    let estimated_attempts = (entries * modifier) as u64;

    // 100 guesses per hour online, a million per second offline
    let online_seconds = estimated_attempts as f64 / 100.0 * HOUR;
    let offline_seconds = estimated_attempts as f64 / 1_000_000.0;

    DictionaryEstimate {
        complexity,
        crackability: crackability.to_string(),
        dictionary,
        estimated_attempts,
        time_online: format_crack_time(Some(online_seconds)).1,
        time_offline: format_crack_time(Some(offline_seconds)).1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_composition, detect_patterns, estimate_entropy, Tuning};
    use crate::models::PatternKind;

    fn report_for(password: &str, mode: PolicyMode) -> AttackReport {
        let composition = analyze_composition(password).unwrap();
        let findings = detect_patterns(password, &[]);
        let entropy = estimate_entropy(&composition, &findings, &Tuning::default());
        simulate_attacks(&entropy, &composition, mode, &findings, &AttackModel::default())
    }

    fn synthetic_entropy(charset_size: u32, password_length: usize) -> EntropyReport {
        let log10_keyspace = password_length as f64 * (charset_size as f64).log10();
        EntropyReport {
            charset_size,
            password_length,
            raw_bits: password_length as f64 * (charset_size as f64).log2(),
            adjusted_bits: 0.0,
            penalized_categories: 0,
            log10_keyspace,
            possible_combinations: String::new(),
        }
    }

    #[test]
    fn buckets() {
        assert_eq!(format_crack_time(Some(0.5)), (TimeBucket::Instant, "instant".to_string()));
        assert_eq!(format_crack_time(Some(30.0)).0, TimeBucket::Seconds);
        assert_eq!(format_crack_time(Some(90.0)), (TimeBucket::Minutes, "1.5 minutes".to_string()));
        assert_eq!(format_crack_time(Some(7_200.0)).0, TimeBucket::Hours);
        assert_eq!(format_crack_time(Some(172_800.0)), (TimeBucket::Days, "2.0 days".to_string()));
        assert_eq!(format_crack_time(Some(5_184_000.0)).0, TimeBucket::Months);
        assert_eq!(format_crack_time(Some(63_072_000.0)), (TimeBucket::Years, "2.0 years".to_string()));
        assert_eq!(format_crack_time(Some(3.1536e11)).0, TimeBucket::Infinite);
        assert_eq!(format_crack_time(None), (TimeBucket::Infinite, "infinite".to_string()));
    }

    #[test]
    fn huge_keyspace_is_infinite_not_an_overflow() {
        let composition = analyze_composition(&"aB1!".repeat(32)).unwrap();
        let entropy = synthetic_entropy(94, 128);
        let report = simulate_attacks(&entropy, &composition, PolicyMode::Standard, &[], &AttackModel::default());
        assert_eq!(report.estimates.len(), 4);
        for estimate in &report.estimates {
            assert_eq!(estimate.bucket, TimeBucket::Infinite);
            assert_eq!(estimate.display, "infinite");
        }

        // far past f64 range
        let entropy = synthetic_entropy(94, 1_000);
        let report = simulate_attacks(&entropy, &composition, PolicyMode::Enhanced, &[], &AttackModel::default());
        assert!(report.estimates.iter().all(|e| e.seconds.is_none() && e.bucket == TimeBucket::Infinite));
    }

    #[test]
    fn base_time_is_keyspace_over_rate() {
        // 10 lowercase letters, no findings: only the single-class factor applies
        let report = report_for("xqzvkwjmpf", PolicyMode::Standard);
        let fast = report.estimate(AttackProfile::OfflineFastHash).unwrap();
        let expected = 26f64.powi(10) / 1e10 * LOWERCASE_ONLY_FACTOR * 0.8;
        let seconds = fast.seconds.unwrap();
        assert!((seconds - expected).abs() / expected < 1e-9);
        assert_eq!(fast.effectiveness_multiplier, LOWERCASE_ONLY_FACTOR);
    }

    #[test]
    fn multiplier_discounts_weak_traits() {
        let model = AttackModel::default();
        let composition = analyze_composition("qwertyzz").unwrap();
        let findings = detect_patterns("qwertyzz", &[]);
        let m = model.effectiveness_multiplier(&composition, PolicyMode::Standard, &findings);
        assert!((m - LOWERCASE_ONLY_FACTOR * KEYBOARD_FACTOR).abs() < 1e-12);

        let digits = analyze_composition("80417352").unwrap();
        let m = model.effectiveness_multiplier(&digits, PolicyMode::Standard, &[]);
        assert!((m - DIGITS_ONLY_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn enhanced_mode_is_harsher_on_weak_passwords() {
        let model = AttackModel::default();
        let composition = analyze_composition("Sunshine").unwrap();
        let findings = vec![PatternFinding {
            kind: PatternKind::CommonTerm,
            matched: "sunshine".into(),
            position: 0,
        }];
        let standard = model.effectiveness_multiplier(&composition, PolicyMode::Standard, &findings);
        let enhanced = model.effectiveness_multiplier(&composition, PolicyMode::Enhanced, &findings);
        assert!((standard - WORD_LIST_FACTOR).abs() < 1e-12);
        let expected = WORD_LIST_FACTOR_ENHANCED * MISSING_DIGIT_FACTOR * MISSING_SPECIAL_FACTOR * SHORT_ENHANCED_FACTOR;
        assert!((enhanced - expected).abs() < 1e-12);
    }

    #[test]
    fn enhanced_defender_slows_attackers() {
        let model = AttackModel::default();
        for profile in AttackProfile::ALL {
            assert!(model.rate(profile, PolicyMode::Enhanced) < model.rate(profile, PolicyMode::Standard));
        }
    }

    #[test]
    fn weak_password_cracks_instantly_offline() {
        let report = report_for("password", PolicyMode::Standard);
        assert_eq!(report.estimate(AttackProfile::OfflineFastHash).unwrap().bucket, TimeBucket::Instant);
    }

    #[test]
    fn dictionary_tiers() {
        let tier = |p: &str| complexity_tier(&analyze_composition(p).unwrap());
        assert_eq!(tier("abc"), ComplexityTier::VeryWeak);
        assert_eq!(tier("abcdefg"), ComplexityTier::Weak);
        assert_eq!(tier("abcdefgh1"), ComplexityTier::Medium);
        assert_eq!(tier("abcdefgh1A"), ComplexityTier::Strong);
        assert_eq!(tier("abcdefgh1A!x"), ComplexityTier::VeryStrong);

        let estimate = estimate_dictionary_attack(&analyze_composition("abc").unwrap());
        assert_eq!(estimate.dictionary, DictionarySize::Common);
        assert_eq!(estimate.estimated_attempts, 8_000);
        assert_eq!(estimate.time_online, "3.3 days");
        assert_eq!(estimate.time_offline, "instant");
    }
}
