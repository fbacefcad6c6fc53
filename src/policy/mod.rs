// src/policy/mod.rs
use lazy_static::lazy_static;

use crate::analysis::tables::{ENHANCED_BANNED_TERMS, GENERATOR_SPECIALS};
use crate::core::error::{EngineError, Result};
use crate::models::{
    CharClass, EntropyReport, Policy, PolicyCheck, PolicyFailure, PolicyMode, PolicyVerdict,
};

pub const STANDARD_MIN_ENTROPY_BITS: f64 = 28.0;
pub const STANDARD_MIN_LENGTH: usize = 8;
pub const ENHANCED_MIN_ENTROPY_BITS: f64 = 60.0;
pub const ENHANCED_MIN_LENGTH: usize = 12;

lazy_static! {
    pub static ref STANDARD_POLICY: Policy = Policy {
        name: "standard".to_string(),
        min_entropy_bits: STANDARD_MIN_ENTROPY_BITS,
        min_length: STANDARD_MIN_LENGTH,
        banned_substrings: Vec::new(),
        required_classes: vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit],
        allowed_specials: GENERATOR_SPECIALS.to_string(),
    };

    pub static ref ENHANCED_POLICY: Policy = Policy {
        name: "enhanced".to_string(),
        min_entropy_bits: ENHANCED_MIN_ENTROPY_BITS,
        min_length: ENHANCED_MIN_LENGTH,
        banned_substrings: ENHANCED_BANNED_TERMS.iter().map(|t| t.to_string()).collect(),
        required_classes: CharClass::ALL.to_vec(),
        allowed_specials: GENERATOR_SPECIALS.to_string(),
    };
}

pub fn policy_for(mode: PolicyMode) -> &'static Policy {
    match mode {
        PolicyMode::Standard => &STANDARD_POLICY,
        PolicyMode::Enhanced => &ENHANCED_POLICY,
    }
}

/// Reject policies no password (or no generated password) could satisfy.
pub fn validate_policy(policy: &Policy) -> Result<()> {
    if !policy.min_entropy_bits.is_finite() || policy.min_entropy_bits < 0.0 {
        return Err(EngineError::ConfigurationError(format!(
            "policy '{}' has an invalid minimum entropy of {}",
            policy.name, policy.min_entropy_bits
        )));
    }
    if policy.requires(CharClass::Special) && policy.allowed_specials.is_empty() {
        return Err(EngineError::ConfigurationError(format!(
            "policy '{}' requires special characters but allows none",
            policy.name
        )));
    }
    if let Some(c) = policy.allowed_specials.chars().find(|c| CharClass::of(*c) != CharClass::Special) {
        return Err(EngineError::ConfigurationError(format!(
            "policy '{}' lists '{}' as a special character",
            policy.name, c
        )));
    }
    if policy.banned_substrings.iter().any(|t| t.is_empty()) {
        return Err(EngineError::ConfigurationError(format!(
            "policy '{}' contains an empty banned term",
            policy.name
        )));
    }
    Ok(())
}

/// Check a password against a policy.
///
/// Every check runs; failures are listed in check order: entropy, length,
/// banned substring, special character, then the remaining required classes.
pub fn evaluate_policy(password: &str, entropy: &EntropyReport, policy: &Policy) -> Result<PolicyVerdict> {
    validate_policy(policy)?;

    let mut failures = Vec::new();
    let mut fail = |check: PolicyCheck, message: String| failures.push(PolicyFailure { check, message });

    // charset^length < 2^min_bits, compared in bits to stay overflow-free
    if entropy.raw_bits < policy.min_entropy_bits {
        fail(
            PolicyCheck::Entropy,
            format!(
                "Password entropy is {:.1} bits; at least {:.0} bits are required",
                entropy.raw_bits, policy.min_entropy_bits
            ),
        );
    }

    let length = password.chars().count();
    if length < policy.min_length {
        fail(
            PolicyCheck::Length,
            format!(
                "Password is {} characters long; at least {} are required",
                length, policy.min_length
            ),
        );
    }

    let lowered = password.to_lowercase();
    if let Some(term) = policy
        .banned_substrings
        .iter()
        .find(|term| lowered.contains(&term.to_lowercase()))
    {
        fail(
            PolicyCheck::BannedSubstring,
            format!("Password contains the banned term '{}'", term),
        );
    }

    if policy.requires(CharClass::Special)
        && !password.chars().any(|c| policy.allowed_specials.contains(c))
    {
        fail(
            PolicyCheck::SpecialCharacter,
            format!(
                "Password must contain at least one special character from {}",
                policy.allowed_specials
            ),
        );
    }

    for (class, check) in [
        (CharClass::Uppercase, PolicyCheck::Uppercase),
        (CharClass::Lowercase, PolicyCheck::Lowercase),
        (CharClass::Digit, PolicyCheck::Digit),
    ] {
        if policy.requires(class) && !password.chars().any(|c| CharClass::of(c) == class) {
            fail(check, format!("Password must contain {}", class.label()));
        }
    }

    Ok(PolicyVerdict {
        policy: policy.name.clone(),
        compliant: failures.is_empty(),
        failures,
    })
}
