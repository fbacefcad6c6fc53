// src/analysis/entropy.rs
use crate::analysis::tables::SPECIAL_POOL_SIZE;
use crate::analysis::Tuning;
use crate::models::{distinct_categories, CharClass, CompositionReport, EntropyReport, PatternFinding};

/// Smallest charset the estimate will use, so one-symbol passwords still score log2(2) per char
pub const MIN_CHARSET_SIZE: u32 = 2;

pub fn class_alphabet_size(class: CharClass) -> u32 {
    match class {
        CharClass::Lowercase | CharClass::Uppercase => 26,
        CharClass::Digit => 10,
        CharClass::Special => SPECIAL_POOL_SIZE,
    }
}

/// Sum of the alphabets of the classes the password actually uses.
pub fn charset_size(composition: &CompositionReport) -> u32 {
    let size: u32 = composition
        .classes_present()
        .into_iter()
        .map(class_alphabet_size)
        .sum();
    size.max(MIN_CHARSET_SIZE)
}

pub fn estimate_entropy(
    composition: &CompositionReport,
    findings: &[PatternFinding],
    tuning: &Tuning,
) -> EntropyReport {
    let charset = charset_size(composition);
    let length = composition.length;
    let raw_bits = length as f64 * (charset as f64).log2();

    let categories = distinct_categories(findings).len();
    let factor = (1.0 - tuning.entropy_penalty_per_category * categories as f64)
        .max(tuning.entropy_floor_ratio);

    let log10_keyspace = length as f64 * (charset as f64).log10();

    EntropyReport {
        charset_size: charset,
        password_length: length,
        raw_bits,
        adjusted_bits: raw_bits * factor,
        penalized_categories: categories,
        log10_keyspace,
        possible_combinations: format_scientific(log10_keyspace),
    }
}

/// Render 10^log10 as "m.mme+x" without ever materializing the number.
pub fn format_scientific(log10: f64) -> String {
    let mut exponent = log10.floor();
    let mut mantissa = 10f64.powf(log10 - exponent);
    if mantissa >= 9.995 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{:.2}e+{}", mantissa, exponent as i64)
}
