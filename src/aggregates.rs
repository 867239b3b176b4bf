use std::collections::BTreeSet;

use tracing::info;
use unihan_db::{FieldValues, UnihanDir};

use crate::plan::{Attribute, SourcePlan};

/// Merged raw values for every attribute, one map per attribute.
#[derive(Clone, Debug, Default)]
pub struct Aggregates {
    pub strokes: FieldValues,
    pub simplified_variants: FieldValues,
    pub traditional_variants: FieldValues,
    pub definitions: FieldValues,
    pub pinyin: FieldValues,
}

impl Aggregates {
    /// Aggregate every attribute of `plan` from `dir`, one attribute at a time.
    pub fn load(dir: &UnihanDir, plan: &SourcePlan) -> Self {
        let mut aggregates = Self::default();
        for attribute in Attribute::ALL {
            let values = dir.aggregate(plan.sources(attribute));
            info!("total {attribute} entries: {}", values.len());
            *aggregates.values_mut(attribute) = values;
        }
        aggregates
    }

    pub fn values(&self, attribute: Attribute) -> &FieldValues {
        match attribute {
            Attribute::TotalStrokes => &self.strokes,
            Attribute::SimplifiedVariant => &self.simplified_variants,
            Attribute::TraditionalVariant => &self.traditional_variants,
            Attribute::Definition => &self.definitions,
            Attribute::Pinyin => &self.pinyin,
        }
    }

    fn values_mut(&mut self, attribute: Attribute) -> &mut FieldValues {
        match attribute {
            Attribute::TotalStrokes => &mut self.strokes,
            Attribute::SimplifiedVariant => &mut self.simplified_variants,
            Attribute::TraditionalVariant => &mut self.traditional_variants,
            Attribute::Definition => &mut self.definitions,
            Attribute::Pinyin => &mut self.pinyin,
        }
    }

    /// Every character seen by any attribute, in code point order.
    pub fn characters(&self) -> BTreeSet<char> {
        Attribute::ALL
            .iter()
            .flat_map(|attribute| self.values(*attribute).keys().copied())
            .collect()
    }

    /// Characters that have a reading or a definition, in code point order.
    pub fn dictionary_characters(&self) -> BTreeSet<char> {
        self.pinyin
            .keys()
            .chain(self.definitions.keys())
            .copied()
            .collect()
    }
}
