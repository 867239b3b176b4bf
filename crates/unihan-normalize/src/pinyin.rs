/// Reduce a `kMandarin` or `kHanyuPinyin` value to a single reading.
///
/// Keeps the text before the first comma, then its first whitespace token,
/// then drops every numeric character (ASCII or not) and `:` before trimming.
/// Returns `None` when nothing is left.
pub fn normalize_pinyin(raw: &str) -> Option<String> {
    let reading = raw.split(',').next().unwrap_or_default();
    let first = reading.split_whitespace().next()?;
    let cleaned: String = first
        .chars()
        .filter(|c| !c.is_numeric() && *c != ':')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tone_numbers_and_alternatives() {
        assert_eq!(normalize_pinyin("zhong1,zhong4").as_deref(), Some("zhong"));
        assert_eq!(normalize_pinyin("hao3").as_deref(), Some("hao"));
        assert_eq!(normalize_pinyin("hǎo hào").as_deref(), Some("hǎo"));
        assert_eq!(normalize_pinyin("  rén ").as_deref(), Some("rén"));
    }

    #[test]
    fn drops_colons() {
        assert_eq!(normalize_pinyin("lu:4").as_deref(), Some("lu"));
        assert_eq!(normalize_pinyin("nu:3 nu:4").as_deref(), Some("nu"));
    }

    #[test]
    fn strips_non_ascii_digits() {
        assert_eq!(normalize_pinyin("hao\u{FF13}").as_deref(), Some("hao"));
        assert_eq!(normalize_pinyin("ma\u{0664}").as_deref(), Some("ma"));
        assert_eq!(normalize_pinyin("\u{FF11}\u{FF12}"), None);
    }

    #[test]
    fn empty_input_has_no_reading() {
        assert_eq!(normalize_pinyin(""), None);
        assert_eq!(normalize_pinyin("   "), None);
        assert_eq!(normalize_pinyin(",yi1"), None);
        assert_eq!(normalize_pinyin("123"), None);
    }
}
