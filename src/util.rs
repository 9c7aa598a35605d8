// Formatting helpers for profile display.

/// `2025-03-07T10:00:00Z` -> `07.03.2025`. Anything unparseable is returned unchanged.
pub fn format_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4
                && m.len() == 2
                && d.len() == 2
                && [y, m, d].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) =>
        {
            format!("{d}.{m}.{y}")
        }
        _ => iso.to_string(),
    }
}

/// Upper-cased first letter of a display name, for the avatar badge.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-07T10:00:00Z"), "07.03.2025");
        assert_eq!(format_date("2024-12-31"), "31.12.2024");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-1-31"), "2024-1-31");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_multibyte_input() {
        assert_eq!(format_date("вчера днём"), "вчера днём");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("nova"), "N");
        assert_eq!(avatar_initial("  ✨лира"), "Л");
        assert_eq!(avatar_initial(""), "?");
        assert_eq!(avatar_initial("!!!"), "?");
    }
}
