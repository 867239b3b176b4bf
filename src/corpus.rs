//! Assemble per-character records and project them into stroke-ordered lists.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;
use unihan_normalize::{classify, normalize_pinyin, parse_stroke_count, variant_target};
use unihan_types::{CharacterRecord, Script, VariantClass, format_codepoint, is_in_scope};

use crate::aggregates::Aggregates;

/// Every in-scope character with its assembled record.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    records: BTreeMap<char, CharacterRecord>,
    simplified: Vec<char>,
    traditional: Vec<char>,
    stats: CorpusStats,
}

/// Counts reported after assembly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CorpusStats {
    pub characters: usize,
    pub with_strokes: usize,
    pub traditional_only: usize,
    pub simplified_only: usize,
    pub common: usize,
    pub simplified_list: usize,
    pub traditional_list: usize,
    pub unparsable_strokes: usize,
}

impl Corpus {
    /// Build a record for every character any attribute mentions, dropping
    /// characters outside the two ideograph blocks.
    pub fn assemble(aggregates: &Aggregates) -> Self {
        let mut stats = CorpusStats::default();
        let mut records = BTreeMap::new();

        for c in aggregates.characters().into_iter().filter(|c| is_in_scope(*c)) {
            let record = assemble_record(c, aggregates, &mut stats);
            stats.characters += 1;
            if record.stroke_count.is_some() {
                stats.with_strokes += 1;
            }
            match record.variant_class {
                VariantClass::TraditionalOnly => stats.traditional_only += 1,
                VariantClass::SimplifiedOnly => stats.simplified_only += 1,
                VariantClass::Common => stats.common += 1,
            }
            records.insert(c, record);
        }

        let simplified = stroke_ordered(&records, Script::Simplified);
        let traditional = stroke_ordered(&records, Script::Traditional);
        stats.simplified_list = simplified.len();
        stats.traditional_list = traditional.len();

        Self {
            records,
            simplified,
            traditional,
            stats,
        }
    }

    pub fn get(&self, c: char) -> Option<&CharacterRecord> {
        self.records.get(&c)
    }

    /// Records in code point order.
    pub fn records(&self) -> impl Iterator<Item = &CharacterRecord> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Simplified-only and common characters with a stroke count, by strokes then code point.
    pub fn simplified_list(&self) -> &[char] {
        &self.simplified
    }

    /// Traditional-only and common characters with a stroke count, by strokes then code point.
    pub fn traditional_list(&self) -> &[char] {
        &self.traditional
    }

    pub fn list(&self, script: Script) -> &[char] {
        match script {
            Script::Simplified => &self.simplified,
            Script::Traditional => &self.traditional,
        }
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }
}

fn assemble_record(c: char, aggregates: &Aggregates, stats: &mut CorpusStats) -> CharacterRecord {
    let stroke_count = aggregates
        .strokes
        .get(&c)
        .and_then(|raw| match parse_stroke_count(raw) {
            Ok(count) => count,
            Err(err) => {
                warn!(
                    "could not parse stroke count for {c} ({}): {err}",
                    format_codepoint(c)
                );
                stats.unparsable_strokes += 1;
                None
            }
        });
    let simplified = aggregates.simplified_variants.get(&c).map(String::as_str);
    let traditional = aggregates.traditional_variants.get(&c).map(String::as_str);

    CharacterRecord {
        character: c,
        stroke_count,
        variant_class: classify(c, simplified, traditional),
        traditional_variant: traditional.and_then(|raw| variant_target(c, raw)),
        simplified_variant: simplified.and_then(|raw| variant_target(c, raw)),
        definition: aggregates.definitions.get(&c).cloned(),
        pinyin: aggregates
            .pinyin
            .get(&c)
            .and_then(|raw| normalize_pinyin(raw)),
    }
}

fn stroke_ordered(records: &BTreeMap<char, CharacterRecord>, script: Script) -> Vec<char> {
    let mut keyed: Vec<((u32, u32), char)> = records
        .values()
        .filter(|record| record.variant_class.usable_in(script))
        .filter_map(|record| record.stroke_order_key().map(|key| (key, record.character)))
        .collect();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, c)| c).collect()
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} characters ({} with stroke counts, {} unparsable); \
             {} traditional-only, {} simplified-only, {} common; \
             simplified set {}, traditional set {}",
            self.characters,
            self.with_strokes,
            self.unparsable_strokes,
            self.traditional_only,
            self.simplified_only,
            self.common,
            self.simplified_list,
            self.traditional_list
        )
    }
}
