//! Text normalization for corpus names and query abbreviations.
//!
//! Only ASCII letters and digits count as word characters.

/// Maximum number of tokens taken from a name; the rest are dropped.
pub const MAX_TOKENS: usize = 16;

/// Collapses a name to single-space separated alphanumeric runs.
///
/// Everything that is not an ASCII letter or digit acts as a separator.
/// Case is preserved and the result has no leading or trailing spaces.
pub fn normalize_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            normalized.push(ch);
            pending_space = false;
        } else {
            pending_space = true;
        }
    }
    normalized
}

/// Keeps ASCII letters, digits and `.`; drops everything else, whitespace included.
pub fn clean_abbreviation(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '.')
        .collect()
}

/// Splits a name into at most [`MAX_TOKENS`] alphanumeric runs.
pub fn tokenize(name: &str) -> Vec<&str> {
    name.split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .take(MAX_TOKENS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(
            normalize_name("  Journal of   Computer-Science (Online) "),
            "Journal of Computer Science Online"
        );
        assert_eq!(normalize_name("J. Am. Chem. Soc."), "J Am Chem Soc");
        assert_eq!(normalize_name("---"), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn normalize_preserves_case_and_digits() {
        assert_eq!(normalize_name("IEEE/ACM Trans 2"), "IEEE ACM Trans 2");
    }

    #[test]
    fn clean_keeps_dots() {
        assert_eq!(clean_abbreviation("\"J. Comp. Sci.\""), "J.Comp.Sci.");
        assert_eq!(clean_abbreviation("  ,;:  "), "");
        assert_eq!(clean_abbreviation("Phys. Rev. B 12"), "Phys.Rev.B12");
    }

    #[test]
    fn tokenize_bounds_token_count() {
        assert!(tokenize("").is_empty());
        assert_eq!(tokenize("Journal Of Science"), vec!["Journal", "Of", "Science"]);

        let long: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
        let joined = long.join(" ");
        let tokens = tokenize(&joined);
        assert_eq!(tokens.len(), MAX_TOKENS);
        assert_eq!(tokens.last(), Some(&"w15"));
    }
}
