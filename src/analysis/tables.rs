// src/analysis/tables.rs
//
// Read-only reference tables shared by every analysis. All entries are lowercase.
use crate::models::Language;

pub const ENGLISH_WORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "secret", "monkey", "dragon",
    "master", "sunshine", "football", "baseball", "princess", "shadow", "summer",
    "winter", "flower", "hello", "freedom", "computer", "coffee", "tiger", "ocean",
    "galaxy", "phoenix",
];

pub const SPANISH_WORDS: &[&str] = &[
    "contraseña", "contrasena", "hola", "amor", "secreto", "bienvenido", "usuario",
    "corazon", "princesa", "familia", "futbol", "tequiero",
];

// Romanized Hindi, as typed on a Latin keyboard
pub const HINDI_WORDS: &[&str] = &[
    "pyaar", "pyar", "jaan", "bharat", "namaste", "dilse", "shona", "khushi",
    "prem", "zindagi",
];

pub const FRENCH_WORDS: &[&str] = &[
    "motdepasse", "bonjour", "soleil", "amour", "bienvenue", "chouchou", "doudou",
    "jetaime", "loulou", "marseille",
];

pub const GERMAN_WORDS: &[&str] = &[
    "passwort", "hallo", "schatz", "geheim", "willkommen", "sommer", "fussball",
    "liebe", "schmetterling",
];

pub const DICTIONARIES: [(Language, &[&str]); 5] = [
    (Language::English, ENGLISH_WORDS),
    (Language::Spanish, SPANISH_WORDS),
    (Language::Hindi, HINDI_WORDS),
    (Language::French, FRENCH_WORDS),
    (Language::German, GERMAN_WORDS),
];

/// Runs of physically adjacent keys.
pub const KEYBOARD_RUNS: &[&str] = &[
    "qwertyuiop", "asdfghjkl", "zxcvbnm", "qwerty", "asdfgh", "zxcvbn", "azerty",
    "qwertz", "1qaz2wsx", "qazwsx", "zaq1zaq1", "1234567890", "123456", "!@#$%^",
];

/// Passwords that top every leaked-credential list.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password1", "p@ssw0rd", "passw0rd", "abc123", "111111", "123123",
    "000000", "iloveyou", "trustno1", "letmein", "welcome1", "qwerty123", "admin123",
    "654321", "121212", "666666",
];

/// Terms no enhanced-policy password may contain.
pub const ENHANCED_BANNED_TERMS: &[&str] = &[
    "barclays", "bank", "password", "123", "admin", "user", "login", "welcome", "letmein",
];

/// Well-known passwords scored side by side with the candidate.
pub const BENCHMARK_PASSWORDS: &[&str] = &[
    "123456", "password", "123456789", "qwerty", "12345", "12345678", "111111",
    "123123", "admin", "welcome", "password1", "1234", "P@ssw0rd", "letmein",
    "abc123", "monkey", "sunshine", "football", "iloveyou", "123", "welcome1",
    "passw0rd", "zaq1zaq1", "1qaz2wsx", "qwertyuiop", "asdfghjkl", "login",
    "123qwe", "trustno1",
];

/// Pool the entropy estimate assumes for the special class.
pub const SPECIAL_POOL_SIZE: u32 = 32;

/// Specials the generator draws from.
pub const GENERATOR_SPECIALS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        let all = DICTIONARIES
            .iter()
            .flat_map(|(_, words)| words.iter())
            .chain(KEYBOARD_RUNS)
            .chain(COMMON_PASSWORDS)
            .chain(ENHANCED_BANNED_TERMS);
        for entry in all {
            assert_eq!(*entry, entry.to_lowercase());
        }
    }
}
