use unihan_types::{VariantClass, parse_codepoint};

/// Decode a variant value into the characters it references.
///
/// Tokens are `U+XXXX`, optionally followed by a `<source` annotation. A bare
/// single-character token is accepted as the character itself. Anything else
/// is ignored.
pub fn decode_variants(raw: &str) -> Vec<char> {
    raw.split_whitespace()
        .filter_map(|token| {
            let code = token.split('<').next().unwrap_or(token);
            parse_codepoint(code).or_else(|| single_char(code))
        })
        .collect()
}

/// Whether `raw` records a real variant of `c`.
///
/// A blank value is no variant. A value that names `c` itself is a
/// self-reference and also counts as no variant, even if it lists other
/// forms alongside. This is wider than an exact match on `c`'s own code:
/// characters such as 台, 后 and 干 list themselves next to their other
/// forms and so classify as [`VariantClass::Common`], landing in both lists.
pub fn names_other_character(c: char, raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }
    !decode_variants(raw).contains(&c)
}

/// First referenced character that differs from `c`.
pub fn variant_target(c: char, raw: &str) -> Option<char> {
    decode_variants(raw).into_iter().find(|v| *v != c)
}

/// Classify `c` from its simplified-variant and traditional-variant values.
///
/// A real simplified variant is checked first, so a character with real
/// variants in both directions classifies as [`VariantClass::TraditionalOnly`].
pub fn classify(c: char, simplified: Option<&str>, traditional: Option<&str>) -> VariantClass {
    if simplified.is_some_and(|raw| names_other_character(c, raw)) {
        VariantClass::TraditionalOnly
    } else if traditional.is_some_and(|raw| names_other_character(c, raw)) {
        VariantClass::SimplifiedOnly
    } else {
        VariantClass::Common
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
