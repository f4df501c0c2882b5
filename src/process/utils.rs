/// Trim whitespace, then drop one leading and one trailing `"` if present.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// The run of ASCII digits at the very start of `s`, if any.
pub fn leading_digits(s: &str) -> Option<&str> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    (end > 0).then(|| &s[..end])
}

/// First run of ASCII digits anywhere in `s`, parsed. Saturates instead of
/// overflowing on absurdly long runs; `None` when `s` holds no digit.
pub fn first_number(s: &str) -> Option<i64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = leading_digits(&s[start..])?;
    Some(digits.parse::<i64>().unwrap_or(i64::MAX))
}

/// Case-insensitive containment against an upper-case needle. Uses full
/// Unicode upper-casing so `sótano` matches `SÓTANO`.
pub fn contains_upper(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_str_strips_one_quote_layer() {
        assert_eq!(clean_str("  \"Número\" "), "Número");
        assert_eq!(clean_str("\"\"x\"\""), "\"x\"");
        assert_eq!(clean_str("\"half"), "half");
        assert_eq!(clean_str("plain"), "plain");
        assert_eq!(clean_str("\""), "");
    }

    #[test]
    fn leading_digits_only_at_start() {
        assert_eq!(leading_digits("110 - PRO"), Some("110"));
        assert_eq!(leading_digits("PRO 110"), None);
        assert_eq!(leading_digits(""), None);
    }

    #[test]
    fn first_number_finds_any_run() {
        assert_eq!(first_number("PISO 14"), Some(14));
        assert_eq!(first_number("SOTANO"), None);
        assert_eq!(first_number("N2-B7"), Some(2));
        assert_eq!(first_number("PISO 99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn contains_upper_handles_accents() {
        assert!(contains_upper("Sótano 2", "SÓTANO"));
        assert!(contains_upper("piso 3", "PISO"));
        assert!(!contains_upper("Techo", "PISO"));
    }
}
