// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::analysis::tables::{DIGITS, LOWERCASE, UPPERCASE};
use crate::analysis::{analyze_composition, estimate_entropy, Tuning};
use crate::core::error::{EngineError, Result};
use crate::models::{CharClass, Policy, PolicyMode, SecurityLevel};
use crate::policy::{evaluate_policy, policy_for, validate_policy, ENHANCED_MIN_LENGTH};

pub const BASE_LENGTH: usize = 8;
pub const LENGTH_PER_LEVEL: usize = 2;
/// Regeneration bound when a draft violates the target policy
pub const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Length and character classes a generated password must have.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub length: usize,
    pub required: Vec<CharClass>,
    pub specials: String,
}

impl GenerationPlan {
    /// 8 + 2 x level characters. Enhanced mode needs at least 12 and every class;
    /// standard mode always wants letters of both cases and digits, and specials from level 2.
    pub fn for_level(level: SecurityLevel, mode: PolicyMode, specials: &str) -> Self {
        let mut length = BASE_LENGTH + LENGTH_PER_LEVEL * level.get() as usize;
        let required = match mode {
            PolicyMode::Enhanced => {
                length = length.max(ENHANCED_MIN_LENGTH);
                CharClass::ALL.to_vec()
            }
            PolicyMode::Standard => {
                let mut classes = vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];
                if level.get() >= 2 {
                    classes.push(CharClass::Special);
                }
                classes
            }
        };

        Self {
            length,
            required,
            specials: specials.to_string(),
        }
    }

    fn alphabet(&self, class: CharClass) -> Vec<char> {
        match class {
            CharClass::Lowercase => LOWERCASE.chars().collect(),
            CharClass::Uppercase => UPPERCASE.chars().collect(),
            CharClass::Digit => DIGITS.chars().collect(),
            CharClass::Special => self.specials.chars().collect(),
        }
    }
}

pub struct PasswordGenerator {
    max_attempts: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(MAX_GENERATION_ATTEMPTS)
    }
}

impl PasswordGenerator {
    pub fn new(max_attempts: usize) -> Self {
        PasswordGenerator {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn generate_password(&self, level: SecurityLevel, mode: PolicyMode) -> Result<String> {
        self.generate_with_rng(level, mode, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        level: SecurityLevel,
        mode: PolicyMode,
        rng: &mut R,
    ) -> Result<String> {
        let policy = policy_for(mode);
        let plan = GenerationPlan::for_level(level, mode, &policy.allowed_specials);
        self.generate_against(&plan, policy, rng)
    }

    /// Draw passwords for `plan` until one passes `policy`, up to the attempt bound.
    pub fn generate_against<R: Rng + ?Sized>(
        &self,
        plan: &GenerationPlan,
        policy: &Policy,
        rng: &mut R,
    ) -> Result<String> {
        validate_policy(policy)?;
        if plan.length == 0 || plan.required.is_empty() {
            return Err(EngineError::ConfigurationError(
                "generation plan needs a length and at least one character class".into(),
            ));
        }
        if plan.required.contains(&CharClass::Special) && plan.specials.is_empty() {
            return Err(EngineError::ConfigurationError(
                "generation plan requires specials but has none to draw from".into(),
            ));
        }

        let tuning = Tuning::default();
        for attempt in 1..=self.max_attempts {
            let candidate = draft(plan, rng);

            let composition = analyze_composition(&candidate)?;
            let entropy = estimate_entropy(&composition, &[], &tuning);
            let verdict = evaluate_policy(&candidate, &entropy, policy)?;
            if verdict.compliant {
                log::debug!("Generated compliant password on attempt {}", attempt);
                return Ok(candidate);
            }
            log::debug!(
                "Discarding draft {} of {}: {} policy failure(s)",
                attempt,
                self.max_attempts,
                verdict.failures.len()
            );
        }

        log::warn!("Password generation gave up after {} attempts", self.max_attempts);
        Err(EngineError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Uniform draw from the pooled alphabets, then one random insertion for each
/// required class the draw happened to miss. The insertions skew the
/// distribution slightly and can make the result longer than `plan.length`.
fn draft<R: Rng + ?Sized>(plan: &GenerationPlan, rng: &mut R) -> String {
    let pool: Vec<char> = plan
        .required
        .iter()
        .flat_map(|class| plan.alphabet(*class))
        .collect();
    let dist = Uniform::from(0..pool.len());

    let mut chars: Vec<char> = (0..plan.length)
        .map(|_| pool[dist.sample(rng)])
        .collect();

    for class in &plan.required {
        if chars.iter().any(|c| CharClass::of(*c) == *class) {
            continue;
        }
        let alphabet = plan.alphabet(*class);
        let c = alphabet[rng.gen_range(0..alphabet.len())];
        let pos = rng.gen_range(0..=chars.len());
        chars.insert(pos, c);
    }

    chars.into_iter().collect()
}
