// src/core/engine.rs
use rand::Rng;

use crate::analysis::tables::BENCHMARK_PASSWORDS;
use crate::analysis::{
    analyze_composition, detect_patterns, estimate_entropy, score_strength, simulate_attacks,
    AttackModel, Tuning,
};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::generators::PasswordGenerator;
use crate::models::{
    AnalysisReport, BenchmarkEntry, GeneratedPassword, PolicyMode, SecurityLevel, SuggestionReport,
};
use crate::policy::{evaluate_policy, policy_for};
use crate::suggestions::{build_suggestions, Advisor, OpenAiAdvisor, DEFAULT_ALTERNATIVES};
use crate::utils::mask_password;

/// Entry point tying analysis, policy, generation and suggestions together.
///
/// Holds no per-request state, so one instance can be shared across threads.
pub struct Engine {
    tuning: Tuning,
    attack_model: AttackModel,
    generator: PasswordGenerator,
    alternative_count: usize,
    advisor: Option<Box<dyn Advisor>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            attack_model: AttackModel::default(),
            generator: PasswordGenerator::default(),
            alternative_count: DEFAULT_ALTERNATIVES,
            advisor: None,
        }
    }
}

impl Engine {
    pub fn from_config(config: &Config) -> Self {
        let advisor: Option<Box<dyn Advisor>> = match &config.openai_api_key {
            Some(key) => match OpenAiAdvisor::new(key, &config.openai_model, &config.openai_api_url) {
                Ok(advisor) => {
                    log::info!("Suggestion advisor enabled ({})", config.openai_model);
                    Some(Box::new(advisor))
                }
                Err(e) => {
                    log::warn!("Suggestion advisor disabled: {}", e);
                    None
                }
            },
            None => None,
        };

        Self {
            generator: PasswordGenerator::new(config.max_generation_attempts),
            alternative_count: config.alternative_count,
            advisor,
            ..Self::default()
        }
    }

    pub fn with_advisor(mut self, advisor: Box<dyn Advisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn with_alternative_count(mut self, count: usize) -> Self {
        self.alternative_count = count;
        self
    }

    pub fn advisor_name(&self) -> Option<String> {
        self.advisor.as_ref().map(|a| a.name())
    }

    /// Run the full analysis pipeline. A policy verdict is only attached in enhanced mode.
    pub fn analyze(
        &self,
        password: &str,
        mode: PolicyMode,
        level: SecurityLevel,
    ) -> Result<AnalysisReport> {
        let composition = analyze_composition(password)?;
        let policy = policy_for(mode);

        let patterns = detect_patterns(password, &policy.banned_substrings);
        let entropy = estimate_entropy(&composition, &patterns, &self.tuning);
        let strength = score_strength(&entropy, &patterns, &composition, &self.tuning);
        let attack = simulate_attacks(&entropy, &composition, mode, &patterns, &self.attack_model);

        let policy_verdict = if mode.is_enhanced() {
            Some(evaluate_policy(password, &entropy, policy)?)
        } else {
            None
        };

        log::debug!(
            "Analyzed {} ({} mode): score {}, {:.1} bits, {} finding(s)",
            mask_password(password),
            mode,
            strength.score,
            entropy.adjusted_bits,
            patterns.len()
        );

        let crack_times = attack.display_map();
        Ok(AnalysisReport {
            mode,
            security_level: level,
            composition,
            patterns,
            entropy,
            strength,
            attack,
            crack_times,
            policy_verdict,
        })
    }

    pub fn suggest(
        &self,
        password: &str,
        mode: PolicyMode,
        level: SecurityLevel,
    ) -> Result<SuggestionReport> {
        let report = self.analyze(password, mode, level)?;
        self.suggest_for(&report, &mut rand::thread_rng())
    }

    /// Suggestions for an existing analysis.
    pub fn suggest_for<R: Rng + ?Sized>(
        &self,
        report: &AnalysisReport,
        rng: &mut R,
    ) -> Result<SuggestionReport> {
        build_suggestions(
            report,
            &self.generator,
            self.alternative_count,
            self.advisor.as_deref(),
            rng,
        )
    }

    /// Generate `count` passwords and rate each one.
    pub fn generate(
        &self,
        level: SecurityLevel,
        mode: PolicyMode,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>> {
        let mut generated = Vec::with_capacity(count);
        for _ in 0..count {
            let password = self.generator.generate_password(level, mode)?;
            let report = self.analyze(&password, mode, level)?;
            let compliant = match &report.policy_verdict {
                Some(verdict) => verdict.compliant,
                None => evaluate_policy(&password, &report.entropy, policy_for(mode))?.compliant,
            };
            generated.push(GeneratedPassword {
                password,
                strength: report.strength,
                compliant,
            });
        }
        log::info!("Generated {} level {} password(s) in {} mode", count, level, mode);
        Ok(generated)
    }

    /// Score the built-in list of commonly used passwords in standard mode.
    pub fn benchmark(&self) -> Vec<BenchmarkEntry> {
        BENCHMARK_PASSWORDS
            .iter()
            .filter_map(|password| {
                match self.analyze(password, PolicyMode::Standard, SecurityLevel::default()) {
                    Ok(report) => Some(BenchmarkEntry {
                        password: password.to_string(),
                        score: report.strength.score,
                        category: report.strength.category,
                    }),
                    Err(e) => {
                        log::warn!("Skipping benchmark entry: {}", e);
                        None
                    }
                }
            })
            .collect()
    }
}
