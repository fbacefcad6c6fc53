// src/utils/format.rs
use chrono::{DateTime, Utc};

/// Loggable stand-in for a password: first and last character plus the length.
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    match chars.as_slice() {
        [] => "<empty>".to_string(),
        [_] | [_, _] => format!("{} ({} chars)", "*".repeat(chars.len()), chars.len()),
        [first, .., last] => format!("{}***{} ({} chars)", first, last, chars.len()),
    }
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// RFC 3339 timestamp for API responses
pub fn timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_hides_the_middle() {
        assert_eq!(mask_password("Tr0ub4dor"), "T***r (9 chars)");
        assert_eq!(mask_password("ab"), "** (2 chars)");
        assert_eq!(mask_password(""), "<empty>");
        assert!(!mask_password("secretvalue").contains("ecretvalu"));
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("contraseñacontraseña", 10), "contras...");
    }
}
