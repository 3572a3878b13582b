//! Environment variable naming convention
//!
//! Field identifiers are split into words at `_` and at case transitions,
//! upper-cased and joined with `_`. Both `SecretKey` and `secret_key` map to
//! `SECRET_KEY`.

/// Split an identifier into its words.
///
/// A new word starts at every `_`, at a lowercase to uppercase transition,
/// and before the last capital of an acronym that is followed by a lowercase
/// letter (`HTTPServer` splits into `HTTP` and `Server`). A run of digits is
/// a word of its own (`GL11Version` splits into `GL`, `11` and `Version`).
pub fn split_words(ident: &str) -> Vec<&str> {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut words = Vec::new();

    for part in ident.split('_').filter(|part| !part.is_empty()) {
        let chars: Vec<(usize, char)> = part.char_indices().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (offset, c) = chars[i];
            let prev = CharClass::of(chars[i - 1].1);
            let next_is_lower = chars
                .get(i + 1)
                .is_some_and(|&(_, n)| CharClass::of(n) == CharClass::Lower);

            let boundary = match (prev, CharClass::of(c)) {
                (CharClass::Upper, CharClass::Upper) => next_is_lower,
                (CharClass::Upper, CharClass::Lower) => false,
                (prev, current) => prev != current,
            };
            if boundary {
                words.push(&part[start..offset]);
                start = offset;
            }
        }
        words.push(&part[start..]);
    }

    words
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Lower
        }
    }
}

/// Derive the environment variable name for a field identifier.
pub fn env_key(ident: &str) -> String {
    split_words(ident)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
