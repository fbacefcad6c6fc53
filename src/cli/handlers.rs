// src/cli/handlers.rs
use std::error::Error;
use std::fmt::{self, Write as _};

use console::{style, StyledObject};
use inquire::Password;

use crate::core::config::Config;
use crate::core::engine::Engine;
use crate::models::{
    AnalysisReport, BenchmarkEntry, CharClass, GeneratedPassword, PolicyMode,
    SecurityLevel, StrengthCategory, SuggestionReport,
};
use crate::utils::truncate_string;
use super::commands::PasswordOptions;

/// `--enhanced` wins, then `--mode`, then the configured default.
pub fn resolve_options(
    config: &Config,
    mode: Option<PolicyMode>,
    enhanced: bool,
    level: Option<u8>,
) -> Result<(PolicyMode, SecurityLevel), Box<dyn Error>> {
    let mode = if enhanced {
        PolicyMode::Enhanced
    } else {
        mode.unwrap_or(config.default_mode)
    };
    let level = match level {
        Some(n) => SecurityLevel::new(n)?,
        None => config.default_security_level,
    };
    Ok((mode, level))
}

fn read_password(password: Option<String>) -> Result<String, Box<dyn Error>> {
    match password {
        Some(password) => Ok(password),
        None => Ok(Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?),
    }
}

fn styled_category(category: StrengthCategory) -> StyledObject<&'static str> {
    let label = style(category.label()).bold();
    match category {
        StrengthCategory::VeryWeak => label.red(),
        StrengthCategory::Weak => label.red().bright(),
        StrengthCategory::Medium => label.yellow(),
        StrengthCategory::Strong => label.green(),
        StrengthCategory::VeryStrong => label.green().bright(),
    }
}

pub fn render_analysis(report: &AnalysisReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let c = &report.composition;

    writeln!(out, "{}", style(format!("Password analysis ({} mode, level {})", report.mode, report.security_level)).bold())?;
    writeln!(
        out,
        "  Strength:   {}/100 {}",
        report.strength.score,
        styled_category(report.strength.category)
    )?;
    writeln!(
        out,
        "  Entropy:    {:.1} bits ({:.1} before pattern penalties, charset {})",
        report.entropy.adjusted_bits, report.entropy.raw_bits, report.entropy.charset_size
    )?;
    writeln!(out, "  Keyspace:   {}", report.entropy.possible_combinations)?;
    writeln!(out, "  Length:     {}", c.length)?;
    for class in CharClass::ALL {
        let stats = c.stats(class);
        writeln!(out, "    {:<20} {:>3} ({:.1}%)", class.label(), stats.count, stats.percentage)?;
    }

    if report.patterns.is_empty() {
        writeln!(out, "  Patterns:   {}", style("none found").green())?;
    } else {
        writeln!(out, "  Patterns:")?;
        for finding in &report.patterns {
            writeln!(
                out,
                "    {} {} '{}' at {}",
                style("!").yellow(),
                finding.kind,
                finding.matched,
                finding.position
            )?;
        }
    }

    writeln!(out, "  Time to crack:")?;
    for (profile, display) in &report.crack_times {
        writeln!(out, "    {:<28} {}", profile.label(), display)?;
    }
    let dictionary = &report.attack.dictionary;
    writeln!(
        out,
        "    {:<28} {} online, {} offline ({})",
        "Dictionary attack", dictionary.time_online, dictionary.time_offline, dictionary.crackability
    )?;

    if let Some(verdict) = &report.policy_verdict {
        if verdict.compliant {
            writeln!(out, "  Policy {}: {}", verdict.policy, style("compliant").green().bold())?;
        } else {
            writeln!(out, "  Policy {}: {}", verdict.policy, style("not compliant").red().bold())?;
            for failure in &verdict.failures {
                writeln!(out, "    {} {}", style("x").red(), failure.message)?;
            }
        }
    }

    Ok(out)
}

pub fn render_suggestions(suggestions: &SuggestionReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", style(format!("Suggestions ({})", suggestions.generated_by)).bold())?;
    if suggestions.weaknesses.is_empty() {
        writeln!(out, "  {}", style("No weaknesses found").green())?;
    }
    for (weakness, improvement) in suggestions.weaknesses.iter().zip(&suggestions.improvements) {
        writeln!(out, "  {} {}", style("-").red(), weakness)?;
        writeln!(out, "    {} {}", style("+").green(), improvement)?;
    }
    if !suggestions.alternatives.is_empty() {
        writeln!(out, "  Alternatives:")?;
        for alternative in &suggestions.alternatives {
            writeln!(out, "    {}", style(alternative).cyan())?;
        }
    }
    Ok(out)
}

fn render_generated(passwords: &[GeneratedPassword]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for generated in passwords {
        writeln!(
            out,
            "{}  {:>3}/100 {}{}",
            style(&generated.password).cyan().bold(),
            generated.strength.score,
            styled_category(generated.strength.category),
            if generated.compliant { "" } else { " (not policy compliant)" }
        )?;
    }
    Ok(out)
}

fn render_benchmark(entries: &[BenchmarkEntry]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", style("Common password benchmark").bold())?;
    for entry in entries {
        writeln!(
            out,
            "  {:<14} {:>3}/100 {}",
            truncate_string(&entry.password, 14),
            entry.score,
            styled_category(entry.category)
        )?;
    }
    Ok(out)
}

// Handlers for CLI commands
pub fn handle_analyze(engine: &Engine, config: &Config, opts: PasswordOptions) -> Result<(), Box<dyn Error>> {
    let (mode, level) = resolve_options(config, opts.mode, opts.enhanced, opts.level)?;
    let password = read_password(opts.password)?;
    let report = engine.analyze(&password, mode, level)?;
    let suggestions = engine.suggest_for(&report, &mut rand::thread_rng())?;

    if opts.json {
        let value = serde_json::json!({ "analysis": report, "suggestions": suggestions });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_analysis(&report)?);
        println!();
        print!("{}", render_suggestions(&suggestions)?);
    }
    Ok(())
}

pub fn handle_suggest(engine: &Engine, config: &Config, opts: PasswordOptions) -> Result<(), Box<dyn Error>> {
    let (mode, level) = resolve_options(config, opts.mode, opts.enhanced, opts.level)?;
    let password = read_password(opts.password)?;
    let suggestions = engine.suggest(&password, mode, level)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print!("{}", render_suggestions(&suggestions)?);
    }
    Ok(())
}

pub fn handle_generate(
    engine: &Engine,
    config: &Config,
    level: Option<u8>,
    mode: Option<PolicyMode>,
    enhanced: bool,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (mode, level) = resolve_options(config, mode, enhanced, level)?;
    let passwords = engine.generate(level, mode, count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&passwords)?);
    } else {
        print!("{}", render_generated(&passwords)?);
    }
    Ok(())
}

pub fn handle_benchmark(engine: &Engine, json: bool) -> Result<(), Box<dyn Error>> {
    let entries = engine.benchmark();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_benchmark(&entries)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttackProfile;
    use console::strip_ansi_codes;

    #[test]
    fn flags_override_config_defaults() {
        let config = Config::default();
        let (mode, level) = resolve_options(&config, None, true, Some(5)).unwrap();
        assert_eq!(mode, PolicyMode::Enhanced);
        assert_eq!(level.get(), 5);

        let (mode, level) = resolve_options(&config, None, false, None).unwrap();
        assert_eq!(mode, config.default_mode);
        assert_eq!(level, config.default_security_level);
    }

    #[test]
    fn mode_flag_overrides_configured_mode() {
        let config = Config {
            default_mode: PolicyMode::Enhanced,
            ..Config::default()
        };
        let (mode, _) = resolve_options(&config, Some(PolicyMode::Standard), false, None).unwrap();
        assert_eq!(mode, PolicyMode::Standard);

        let (mode, _) = resolve_options(&config, None, false, None).unwrap();
        assert_eq!(mode, PolicyMode::Enhanced);
    }

    #[test]
    fn report_lists_failures_and_crack_times() {
        let engine = Engine::default();
        let report = engine
            .analyze("password", PolicyMode::Enhanced, SecurityLevel::default())
            .unwrap();
        let text = strip_ansi_codes(&render_analysis(&report).unwrap()).to_string();
        assert!(text.contains("Very Weak"));
        assert!(text.contains("not compliant"));
        assert!(text.contains(AttackProfile::OfflineFastHash.label()));
        assert!(text.contains("English dictionary word 'password'"));
        assert!(!text.contains("DictionaryWord"));
    }

    #[test]
    fn suggestions_pair_weakness_with_improvement() {
        let suggestions = SuggestionReport {
            weaknesses: vec!["Missing digits".into()],
            improvements: vec!["Add digits".into()],
            alternatives: vec!["Xk9#mQ2!vL7$wR".into()],
            generated_by: "Rule-based system".into(),
        };
        let text = strip_ansi_codes(&render_suggestions(&suggestions).unwrap()).to_string();
        assert!(text.contains("- Missing digits"));
        assert!(text.contains("+ Add digits"));
        assert!(text.contains("Xk9#mQ2!vL7$wR"));
    }
}
