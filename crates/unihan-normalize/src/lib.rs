//! Turn raw Unihan field values into clean scalars.
//!
//! Unihan values are noisy: `kTotalStrokes` may carry several candidates
//! (`"6 5"`), `kMandarin`/`kHanyuPinyin` may list alternative readings with
//! tone digits and dictionary locations, and the variant fields are lists of
//! `U+XXXX` references that sometimes point back at the character itself.
//! Everything here is a pure function of its inputs; reporting failures is
//! left to the caller.
//!
//! # Example
//! ```rust
//! use unihan_normalize::{classify, normalize_pinyin, parse_stroke_count};
//! use unihan_types::VariantClass;
//!
//! assert_eq!(parse_stroke_count("5 7"), Ok(Some(5)));
//! assert_eq!(normalize_pinyin("zhong1,zhong4").as_deref(), Some("zhong"));
//! assert_eq!(classify('國', Some("U+56FD"), None), VariantClass::TraditionalOnly);
//! ```

mod pinyin;
mod strokes;
mod variant;

pub use pinyin::normalize_pinyin;
pub use strokes::{StrokeCountError, parse_stroke_count};
pub use variant::{classify, decode_variants, names_other_character, variant_target};
