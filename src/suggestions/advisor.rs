// src/suggestions/advisor.rs
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::models::{AnalysisReport, CharClass, PatternCategory, PolicyMode, SecurityLevel, distinct_categories};

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Advisor API key not configured")]
    MissingKey,

    #[error("Advisor API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed advisor response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// What an advisor is allowed to know about a password. The password itself is never included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordProfile {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub patterns: Vec<PatternCategory>,
    pub mode: PolicyMode,
}

impl PasswordProfile {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let c = &report.composition;
        Self {
            length: c.length,
            has_lowercase: c.has(CharClass::Lowercase),
            has_uppercase: c.has(CharClass::Uppercase),
            has_digits: c.has(CharClass::Digit),
            has_special: c.has(CharClass::Special),
            patterns: distinct_categories(&report.patterns),
            mode: report.mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Advice {
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
}

/// External text-suggestion service whose advice replaces the rule-based text.
pub trait Advisor: Send + Sync {
    fn name(&self) -> String;

    fn advise(&self, profile: &PasswordProfile, level: SecurityLevel) -> Result<Advice>;
}

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

pub struct OpenAiAdvisor {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiAdvisor {
    pub fn new(api_key: &str, model: &str, url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AdvisorError::MissingKey);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            url: url.to_string(),
        })
    }
}

impl Advisor for OpenAiAdvisor {
    fn name(&self) -> String {
        format!("OpenAI {}", self.model)
    }

    fn advise(&self, profile: &PasswordProfile, level: SecurityLevel) -> Result<Advice> {
        let characteristics = serde_json::to_string(profile)
            .map_err(|e| AdvisorError::MalformedResponse(e.to_string()))?;

        let payload = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": format!(
                        "You are a password security expert. You are given characteristics of a password, \
                         never the password itself. The user wants a {} security level. Reply with JSON only: \
                         {{\"weaknesses\": [..], \"improvements\": [..]}} with one improvement per weakness.",
                        level.description()
                    )
                },
                {
                    "role": "user",
                    "content": format!("Password characteristics: {}", characteristics)
                }
            ],
            "temperature": 0.7,
            "max_tokens": 300
        });

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdvisorError::Api { status: status.as_u16(), body });
        }

        let body: serde_json::Value = response.json()?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AdvisorError::MalformedResponse("missing message content".into()))?;

        parse_advice(content)
    }
}

/// Parse the JSON object an advisor replied with, tolerating a fenced code block around it.
pub fn parse_advice(content: &str) -> Result<Advice> {
    let start = content.find('{');
    let end = content.rfind('}');
    let json = match (start, end) {
        (Some(s), Some(e)) if s < e => &content[s..=e],
        _ => return Err(AdvisorError::MalformedResponse("no JSON object in reply".into())),
    };

    let advice: Advice = serde_json::from_str(json)
        .map_err(|e| AdvisorError::MalformedResponse(e.to_string()))?;
    if advice.weaknesses.is_empty() && advice.improvements.is_empty() {
        return Err(AdvisorError::MalformedResponse("advice is empty".into()));
    }
    Ok(advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fenced_json() {
        let plain = r#"{"weaknesses": ["too short"], "improvements": ["make it longer"]}"#;
        let advice = parse_advice(plain).unwrap();
        assert_eq!(advice.weaknesses, vec!["too short"]);
        assert_eq!(advice.improvements, vec!["make it longer"]);

        let fenced = format!("```json\n{}\n```", plain);
        assert_eq!(parse_advice(&fenced).unwrap(), advice);
    }

    #[test]
    fn rejects_prose_and_empty_advice() {
        assert!(matches!(
            parse_advice("Use a longer password."),
            Err(AdvisorError::MalformedResponse(_))
        ));
        assert!(parse_advice(r#"{"weaknesses": [], "improvements": []}"#).is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            OpenAiAdvisor::new("  ", DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL),
            Err(AdvisorError::MissingKey)
        ));
    }
}
