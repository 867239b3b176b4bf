//! Shared types that mirror the shape of the Unihan database.
//!
//! Unihan keys every record by a code point written as `U+XXXX`. This crate
//! decodes those keys into `char`, defines the ideograph blocks the rest of
//! the workspace treats as "Chinese characters", and provides the assembled
//! per-character record together with its script classification.
//!
//! ```rust
//! use unihan_types::{Script, VariantClass, is_in_scope, parse_codepoint};
//!
//! assert_eq!(parse_codepoint("U+4E00"), Some('一'));
//! assert!(is_in_scope('一'));
//! assert!(VariantClass::Common.usable_in(Script::Traditional));
//! ```

use std::fmt;
use std::ops::RangeInclusive;

/// CJK Unified Ideographs.
pub const CJK_UNIFIED_IDEOGRAPHS: RangeInclusive<u32> = 0x4E00..=0x9FFF;

/// CJK Unified Ideographs Extension A.
pub const CJK_EXTENSION_A: RangeInclusive<u32> = 0x3400..=0x4DBF;

/// Decode a `U+XXXX` key into a character.
///
/// Returns `None` when the prefix is missing, the digits are not hex, or the
/// value is not a Unicode scalar (surrogates, out of range).
pub fn parse_codepoint(token: &str) -> Option<char> {
    let hex = token.strip_prefix("U+")?;
    let value = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(value)
}

/// Format a character back into Unihan's `U+XXXX` notation.
pub fn format_codepoint(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Whether a character lies in one of the two ideograph blocks kept in the corpus.
pub fn is_in_scope(c: char) -> bool {
    let cp = c as u32;
    CJK_UNIFIED_IDEOGRAPHS.contains(&cp) || CJK_EXTENSION_A.contains(&cp)
}

/// Written standard a character list is produced for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Script {
    Simplified,
    Traditional,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Script::Simplified => "simplified",
            Script::Traditional => "traditional",
        })
    }
}

/// Script classification derived from the two directional variant fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VariantClass {
    /// Has a simplified counterpart, so it is the traditional form.
    TraditionalOnly,
    /// Has a traditional counterpart, so it is the simplified form.
    SimplifiedOnly,
    /// No distinguishing variant in either direction.
    Common,
}

impl VariantClass {
    /// Whether characters of this class belong in the list for `script`.
    pub fn usable_in(self, script: Script) -> bool {
        match (self, script) {
            (VariantClass::Common, _) => true,
            (VariantClass::SimplifiedOnly, Script::Simplified) => true,
            (VariantClass::TraditionalOnly, Script::Traditional) => true,
            _ => false,
        }
    }
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariantClass::TraditionalOnly => "traditional-only",
            VariantClass::SimplifiedOnly => "simplified-only",
            VariantClass::Common => "common",
        })
    }
}

/// Fully assembled entry for one in-scope character.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharacterRecord {
    pub character: char,
    pub stroke_count: Option<u32>,
    pub variant_class: VariantClass,
    pub traditional_variant: Option<char>,
    pub simplified_variant: Option<char>,
    pub definition: Option<String>,
    pub pinyin: Option<String>,
}

impl CharacterRecord {
    /// Sort key used by both character lists: stroke count, then code point.
    ///
    /// `None` when the record has no stroke count and therefore never appears
    /// in a list.
    pub fn stroke_order_key(&self) -> Option<(u32, u32)> {
        self.stroke_count.map(|n| (n, self.character as u32))
    }
}
