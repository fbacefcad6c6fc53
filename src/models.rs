// src/models.rs
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::core::error::EngineError;

/// The four disjoint character classes every character falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Classify a single character. Anything that is not ASCII alphanumeric
    /// is special, including non-ASCII letters.
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Special
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letters",
            CharClass::Uppercase => "uppercase letters",
            CharClass::Digit => "digits",
            CharClass::Special => "special characters",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ClassStats {
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompositionReport {
    pub length: usize,
    pub lowercase: ClassStats,
    pub uppercase: ClassStats,
    pub digits: ClassStats,
    pub special: ClassStats,
}

impl CompositionReport {
    pub fn stats(&self, class: CharClass) -> &ClassStats {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digit => &self.digits,
            CharClass::Special => &self.special,
        }
    }

    pub fn has(&self, class: CharClass) -> bool {
        self.stats(class).count > 0
    }

    pub fn classes_present(&self) -> Vec<CharClass> {
        CharClass::ALL.iter().copied().filter(|c| self.has(*c)).collect()
    }

    /// The single class the password is made of, if it uses only one.
    pub fn single_class(&self) -> Option<CharClass> {
        match self.classes_present().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
    Hindi,
    French,
    German,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Hindi => "Hindi",
            Language::French => "French",
            Language::German => "German",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Sequential,
    Repeated,
    KeyboardAdjacent,
    DictionaryWord(Language),
    CommonTerm,
    BannedTerm,
    DatePattern,
}

impl PatternKind {
    pub fn category(&self) -> PatternCategory {
        match self {
            PatternKind::Sequential => PatternCategory::Sequential,
            PatternKind::Repeated => PatternCategory::Repeated,
            PatternKind::KeyboardAdjacent => PatternCategory::KeyboardAdjacent,
            PatternKind::DictionaryWord(_) => PatternCategory::DictionaryWord,
            PatternKind::CommonTerm => PatternCategory::CommonTerm,
            PatternKind::BannedTerm => PatternCategory::BannedTerm,
            PatternKind::DatePattern => PatternCategory::DatePattern,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Sequential => write!(f, "Sequential characters"),
            PatternKind::Repeated => write!(f, "Repeated characters"),
            PatternKind::KeyboardAdjacent => write!(f, "Keyboard pattern"),
            PatternKind::DictionaryWord(language) => write!(f, "{} dictionary word", language),
            PatternKind::CommonTerm => write!(f, "Common term"),
            PatternKind::BannedTerm => write!(f, "Banned term"),
            PatternKind::DatePattern => write!(f, "Year"),
        }
    }
}

/// A pattern kind with the language dropped; penalties are charged per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Sequential,
    Repeated,
    KeyboardAdjacent,
    DictionaryWord,
    CommonTerm,
    BannedTerm,
    DatePattern,
}

impl PatternCategory {
    /// Dictionary, common and banned words all mean the password is guessable from a word list.
    pub fn is_word_list(&self) -> bool {
        matches!(
            self,
            PatternCategory::DictionaryWord | PatternCategory::CommonTerm | PatternCategory::BannedTerm
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatternFinding {
    pub kind: PatternKind,
    /// The matched text as it appears in the password
    pub matched: String,
    /// Character (not byte) offset of the match
    pub position: usize,
}

/// Distinct categories among `findings`, in first-seen order.
pub fn distinct_categories(findings: &[PatternFinding]) -> Vec<PatternCategory> {
    let mut categories = Vec::new();
    for finding in findings {
        let category = finding.kind.category();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EntropyReport {
    pub charset_size: u32,
    pub password_length: usize,
    pub raw_bits: f64,
    pub adjusted_bits: f64,
    /// Number of distinct finding categories that reduced `adjusted_bits`
    pub penalized_categories: usize,
    /// log10 of charset_size^length
    pub log10_keyspace: f64,
    /// Keyspace in scientific notation, e.g. "4.35e+39"
    pub possible_combinations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthCategory {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthCategory {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthCategory::VeryWeak => "Very Weak",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Medium => "Medium",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthCategory::VeryWeak => "#FF0000",
            StrengthCategory::Weak => "#FF6600",
            StrengthCategory::Medium => "#FFCC00",
            StrengthCategory::Strong => "#99CC00",
            StrengthCategory::VeryStrong => "#00CC00",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    pub score: u8,
    pub category: StrengthCategory,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttackProfile {
    OnlineThrottled,
    OnlineUnthrottled,
    OfflineSlowHash,
    OfflineFastHash,
}

impl AttackProfile {
    pub const ALL: [AttackProfile; 4] = [
        AttackProfile::OnlineThrottled,
        AttackProfile::OnlineUnthrottled,
        AttackProfile::OfflineSlowHash,
        AttackProfile::OfflineFastHash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttackProfile::OnlineThrottled => "Online attack (throttled)",
            AttackProfile::OnlineUnthrottled => "Online attack (no throttling)",
            AttackProfile::OfflineSlowHash => "Offline attack (slow hash)",
            AttackProfile::OfflineFastHash => "Offline attack (fast hash)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Instant,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Infinite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrackEstimate {
    pub profile: AttackProfile,
    pub attempts_per_second: f64,
    pub effectiveness_multiplier: f64,
    /// None when the time exceeds what an f64 can hold
    pub seconds: Option<f64>,
    pub bucket: TimeBucket,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySize {
    Common,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DictionaryEstimate {
    pub complexity: ComplexityTier,
    pub crackability: String,
    pub dictionary: DictionarySize,
    pub estimated_attempts: u64,
    pub time_online: String,
    pub time_offline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttackReport {
    pub estimates: Vec<CrackEstimate>,
    pub dictionary: DictionaryEstimate,
}

impl AttackReport {
    pub fn estimate(&self, profile: AttackProfile) -> Option<&CrackEstimate> {
        self.estimates.iter().find(|e| e.profile == profile)
    }

    pub fn display_map(&self) -> BTreeMap<AttackProfile, String> {
        self.estimates
            .iter()
            .map(|e| (e.profile, e.display.clone()))
            .collect()
    }
}

/// Which named policy a request is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    #[default]
    Standard,
    Enhanced,
}

impl PolicyMode {
    pub fn is_enhanced(&self) -> bool {
        matches!(self, PolicyMode::Enhanced)
    }
}

impl FromStr for PolicyMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(PolicyMode::Standard),
            "enhanced" | "barclays" => Ok(PolicyMode::Enhanced),
            other => Err(EngineError::InvalidInput(format!("unknown policy mode '{}'", other))),
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyMode::Standard => write!(f, "standard"),
            PolicyMode::Enhanced => write!(f, "enhanced"),
        }
    }
}

/// Security level 1..=5; higher is stricter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
pub struct SecurityLevel(u8);

impl SecurityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, EngineError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(SecurityLevel(level))
        } else {
            Err(EngineError::InvalidInput(format!(
                "security level must be between {} and {}, got {}",
                Self::MIN, Self::MAX, level
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Raise the level to at least `floor` (clamped to the valid range).
    pub fn at_least(self, floor: u8) -> Self {
        SecurityLevel(self.0.max(floor.min(Self::MAX)))
    }

    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "basic (suitable for low-risk accounts)",
            2 => "moderate (suitable for regular online accounts)",
            3 => "strong (suitable for email and social media)",
            4 => "very strong (suitable for financial accounts)",
            _ => "maximum (suitable for critical infrastructure and high-value targets)",
        }
    }
}

impl Default for SecurityLevel {
    fn default() -> Self {
        SecurityLevel(3)
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SecurityLevel::new(value)
    }
}

impl From<SecurityLevel> for u8 {
    fn from(level: SecurityLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named password policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Policy {
    pub name: String,
    pub min_entropy_bits: f64,
    pub min_length: usize,
    /// Matched case-insensitively, reported in this order
    pub banned_substrings: Vec<String>,
    pub required_classes: Vec<CharClass>,
    /// Specials the generator may draw from; the compliance check requires one of them
    pub allowed_specials: String,
}

impl Policy {
    pub fn requires(&self, class: CharClass) -> bool {
        self.required_classes.contains(&class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCheck {
    Entropy,
    Length,
    BannedSubstring,
    SpecialCharacter,
    Uppercase,
    Lowercase,
    Digit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolicyFailure {
    pub check: PolicyCheck,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolicyVerdict {
    pub policy: String,
    pub compliant: bool,
    pub failures: Vec<PolicyFailure>,
}

impl PolicyVerdict {
    pub fn failed_checks(&self) -> Vec<PolicyCheck> {
        self.failures.iter().map(|f| f.check).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub mode: PolicyMode,
    pub security_level: SecurityLevel,
    pub composition: CompositionReport,
    pub patterns: Vec<PatternFinding>,
    pub entropy: EntropyReport,
    pub strength: StrengthResult,
    pub attack: AttackReport,
    /// Formatted time-to-crack per attacker model
    pub crack_times: BTreeMap<AttackProfile, String>,
    /// Present in enhanced mode only
    pub policy_verdict: Option<PolicyVerdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionReport {
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
    pub alternatives: Vec<String>,
    pub generated_by: String,
}

/// A generated password together with how the engine rates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthResult,
    pub compliant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BenchmarkEntry {
    pub password: String,
    pub score: u8,
    pub category: StrengthCategory,
}
