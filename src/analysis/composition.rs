// src/analysis/composition.rs
use crate::core::error::{EngineError, Result};
use crate::models::{CharClass, ClassStats, CompositionReport};

/// Count every character of the password into exactly one class.
///
/// Lengths are in characters, not bytes, so multi-byte input is counted once
/// per character (and lands in the special class).
pub fn analyze_composition(password: &str) -> Result<CompositionReport> {
    if password.is_empty() {
        return Err(EngineError::InvalidInput("password must not be empty".into()));
    }

    let mut counts = [0usize; 4];
    let mut length = 0usize;
    for c in password.chars() {
        let slot = match CharClass::of(c) {
            CharClass::Lowercase => 0,
            CharClass::Uppercase => 1,
            CharClass::Digit => 2,
            CharClass::Special => 3,
        };
        counts[slot] += 1;
        length += 1;
    }

    let stats = |count: usize| ClassStats {
        count,
        percentage: (count as f64 / length as f64) * 100.0,
    };

    Ok(CompositionReport {
        length,
        lowercase: stats(counts[0]),
        uppercase: stats(counts[1]),
        digits: stats(counts[2]),
        special: stats(counts[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums(report: &CompositionReport) -> (usize, f64) {
        CharClass::ALL.iter().fold((0, 0.0), |(n, p), class| {
            let s = report.stats(*class);
            (n + s.count, p + s.percentage)
        })
    }

    #[test]
    fn counts_each_class() {
        let report = analyze_composition("aB3$xY").unwrap();
        assert_eq!(report.length, 6);
        assert_eq!(report.lowercase.count, 2);
        assert_eq!(report.uppercase.count, 2);
        assert_eq!(report.digits.count, 1);
        assert_eq!(report.special.count, 1);
    }

    #[test]
    fn counts_and_percentages_add_up() {
        for password in ["a", "password", "Tr0ub4dor&3xtra!2024", "ÄÖÜ straße 12", "!!!!!!!", "aaaBBB111"] {
            let report = analyze_composition(password).unwrap();
            let (count, pct) = sums(&report);
            assert_eq!(count, password.chars().count(), "{}", password);
            assert!((pct - 100.0).abs() <= 0.1, "{} summed to {}", password, pct);
        }
    }

    #[test]
    fn non_ascii_letters_are_special() {
        let report = analyze_composition("ñé").unwrap();
        assert_eq!(report.length, 2);
        assert_eq!(report.special.count, 2);
        assert_eq!(report.single_class(), Some(CharClass::Special));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(analyze_composition(""), Err(EngineError::InvalidInput(_))));
    }
}
