// src/analysis/patterns.rs
use crate::analysis::tables::{COMMON_PASSWORDS, DICTIONARIES, KEYBOARD_RUNS};
use crate::models::{PatternFinding, PatternKind};

/// Shortest ascending run reported as sequential ("abc", "123")
pub const MIN_SEQUENCE_RUN: usize = 3;
/// Shortest run of one character reported as repeated ("aa")
pub const MIN_REPEAT_RUN: usize = 2;

/// Scan a password for weak patterns.
///
/// Findings come out grouped by stage: sequential, repeated, keyboard,
/// dictionary words (all languages), common passwords, banned terms and
/// finally four-digit years. Matching ignores case; findings may overlap.
pub fn detect_patterns(password: &str, banned_terms: &[String]) -> Vec<PatternFinding> {
    let original: Vec<char> = password.chars().collect();
    let folded: Vec<char> = original.iter().map(|c| fold(*c)).collect();

    let mut findings = Vec::new();
    find_sequences(&original, &folded, &mut findings);
    find_repeats(&original, &folded, &mut findings);

    for run in KEYBOARD_RUNS {
        find_term(&original, &folded, run, PatternKind::KeyboardAdjacent, &mut findings);
    }
    for (language, words) in DICTIONARIES.iter() {
        for word in words.iter() {
            find_term(&original, &folded, word, PatternKind::DictionaryWord(*language), &mut findings);
        }
    }
    for term in COMMON_PASSWORDS {
        find_term(&original, &folded, term, PatternKind::CommonTerm, &mut findings);
    }
    for term in banned_terms {
        find_term(&original, &folded, term, PatternKind::BannedTerm, &mut findings);
    }

    find_years(&original, &mut findings);
    findings
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn slice(original: &[char], start: usize, len: usize) -> String {
    original[start..start + len].iter().collect()
}

fn continues_sequence(prev: char, next: char) -> bool {
    let same_kind = (prev.is_ascii_lowercase() && next.is_ascii_lowercase())
        || (prev.is_ascii_digit() && next.is_ascii_digit());
    same_kind && next as u32 == prev as u32 + 1
}

fn find_sequences(original: &[char], folded: &[char], out: &mut Vec<PatternFinding>) {
    let mut start = 0;
    for i in 1..=folded.len() {
        if i < folded.len() && continues_sequence(folded[i - 1], folded[i]) {
            continue;
        }
        if i - start >= MIN_SEQUENCE_RUN {
            out.push(PatternFinding {
                kind: PatternKind::Sequential,
                matched: slice(original, start, i - start),
                position: start,
            });
        }
        start = i;
    }
}

fn find_repeats(original: &[char], folded: &[char], out: &mut Vec<PatternFinding>) {
    let mut start = 0;
    for i in 1..=folded.len() {
        if i < folded.len() && folded[i] == folded[start] {
            continue;
        }
        if i - start >= MIN_REPEAT_RUN {
            out.push(PatternFinding {
                kind: PatternKind::Repeated,
                matched: slice(original, start, i - start),
                position: start,
            });
        }
        start = i;
    }
}

fn find_term(
    original: &[char],
    folded: &[char],
    term: &str,
    kind: PatternKind,
    out: &mut Vec<PatternFinding>,
) {
    let needle: Vec<char> = term.chars().map(fold).collect();
    if needle.is_empty() || needle.len() > folded.len() {
        return;
    }
    for (position, window) in folded.windows(needle.len()).enumerate() {
        if window == needle.as_slice() {
            out.push(PatternFinding {
                kind: kind.clone(),
                matched: slice(original, position, needle.len()),
                position,
            });
        }
    }
}

// 1900-2099, scanned left to right without overlap
fn find_years(original: &[char], out: &mut Vec<PatternFinding>) {
    let mut i = 0;
    while i + 4 <= original.len() {
        let window = &original[i..i + 4];
        let is_year = window.iter().all(|c| c.is_ascii_digit())
            && matches!((window[0], window[1]), ('1', '9') | ('2', '0'));
        if is_year {
            out.push(PatternFinding {
                kind: PatternKind::DatePattern,
                matched: window.iter().collect(),
                position: i,
            });
            i += 4;
        } else {
            i += 1;
        }
    }
}
