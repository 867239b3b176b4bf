use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use unihan_db::FieldSource;

pub const K_TOTAL_STROKES: &str = "kTotalStrokes";
pub const K_SIMPLIFIED_VARIANT: &str = "kSimplifiedVariant";
pub const K_TRADITIONAL_VARIANT: &str = "kTraditionalVariant";
pub const K_DEFINITION: &str = "kDefinition";
pub const K_MANDARIN: &str = "kMandarin";
pub const K_HANYU_PINYIN: &str = "kHanyuPinyin";

const DICTIONARY_INDICES: &str = "Unihan_DictionaryIndices.txt";
const DICTIONARY_LIKE_DATA: &str = "Unihan_DictionaryLikeData.txt";
const IRG_SOURCES: &str = "Unihan_IRGSources.txt";
const NUMERIC_VALUES: &str = "Unihan_NumericValues.txt";
const OTHER_MAPPINGS: &str = "Unihan_OtherMappings.txt";
const READINGS: &str = "Unihan_Readings.txt";
const VARIANTS: &str = "Unihan_Variants.txt";

/// Logical attribute assembled from one or more `(file, field)` pairs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Attribute {
    TotalStrokes,
    SimplifiedVariant,
    TraditionalVariant,
    Definition,
    Pinyin,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::TotalStrokes,
        Attribute::SimplifiedVariant,
        Attribute::TraditionalVariant,
        Attribute::Definition,
        Attribute::Pinyin,
    ];
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Attribute::TotalStrokes => "stroke count",
            Attribute::SimplifiedVariant => "simplified variant",
            Attribute::TraditionalVariant => "traditional variant",
            Attribute::Definition => "definition",
            Attribute::Pinyin => "pinyin",
        })
    }
}

/// Which sources feed each attribute, highest priority first.
///
/// Fields missing from a JSON plan keep their Unihan defaults.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcePlan {
    pub total_strokes: Vec<FieldSource>,
    pub simplified_variant: Vec<FieldSource>,
    pub traditional_variant: Vec<FieldSource>,
    pub definition: Vec<FieldSource>,
    pub pinyin: Vec<FieldSource>,
}

impl Default for SourcePlan {
    fn default() -> Self {
        Self {
            total_strokes: vec![
                FieldSource::new(DICTIONARY_INDICES, K_TOTAL_STROKES),
                FieldSource::new(DICTIONARY_LIKE_DATA, K_TOTAL_STROKES),
                FieldSource::new(IRG_SOURCES, K_TOTAL_STROKES),
                FieldSource::new(NUMERIC_VALUES, K_TOTAL_STROKES),
            ],
            simplified_variant: vec![FieldSource::new(VARIANTS, K_SIMPLIFIED_VARIANT)],
            traditional_variant: vec![FieldSource::new(VARIANTS, K_TRADITIONAL_VARIANT)],
            definition: vec![
                FieldSource::new(READINGS, K_DEFINITION),
                FieldSource::new(DICTIONARY_LIKE_DATA, K_DEFINITION),
                FieldSource::new(OTHER_MAPPINGS, K_DEFINITION),
            ],
            pinyin: vec![
                FieldSource::new(READINGS, K_MANDARIN),
                FieldSource::new(READINGS, K_HANYU_PINYIN),
            ],
        }
    }
}

impl SourcePlan {
    pub fn sources(&self, attribute: Attribute) -> &[FieldSource] {
        match attribute {
            Attribute::TotalStrokes => &self.total_strokes,
            Attribute::SimplifiedVariant => &self.simplified_variant,
            Attribute::TraditionalVariant => &self.traditional_variant,
            Attribute::Definition => &self.definition,
            Attribute::Pinyin => &self.pinyin,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("invalid source plan")
    }

    /// Read a JSON plan from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read source plan {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parse source plan {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_lists_unihan_sources_in_priority_order() {
        let plan = SourcePlan::default();
        let strokes: Vec<&str> = plan
            .sources(Attribute::TotalStrokes)
            .iter()
            .map(|s| s.file.as_str())
            .collect();
        assert_eq!(
            strokes,
            vec![DICTIONARY_INDICES, DICTIONARY_LIKE_DATA, IRG_SOURCES, NUMERIC_VALUES]
        );
        let pinyin: Vec<&str> = plan
            .sources(Attribute::Pinyin)
            .iter()
            .map(|s| s.field.as_str())
            .collect();
        assert_eq!(pinyin, vec![K_MANDARIN, K_HANYU_PINYIN]);
        for attribute in Attribute::ALL {
            assert!(!plan.sources(attribute).is_empty(), "{attribute} has no sources");
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let plan = SourcePlan::from_json(
            r#"{ "pinyin": [ { "file": "Unihan_Readings.txt", "field": "kHanyuPinyin" } ] }"#,
        )
        .expect("parse plan");
        assert_eq!(plan.pinyin.len(), 1);
        assert_eq!(plan.pinyin[0].field, K_HANYU_PINYIN);
        assert_eq!(plan.total_strokes, SourcePlan::default().total_strokes);
    }

    #[test]
    fn rejects_unknown_attributes() {
        assert!(SourcePlan::from_json(r#"{ "strokes": [] }"#).is_err());
        assert!(SourcePlan::from_json("not json").is_err());
    }
}
