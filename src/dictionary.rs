use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use unihan_normalize::normalize_pinyin;

use crate::aggregates::Aggregates;

/// Reading and meaning for one character; either may be empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DictionaryEntry {
    pub pinyin: String,
    pub meaning: String,
}

/// Character to reading/meaning map in code point order.
///
/// Covers every character with a reading or a definition, regardless of
/// script classification, stroke count or ideograph block.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CharacterDictionary {
    entries: BTreeMap<char, DictionaryEntry>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DictionaryStats {
    pub entries: usize,
    pub with_pinyin: usize,
    pub with_meaning: usize,
}

impl CharacterDictionary {
    pub fn build(aggregates: &Aggregates) -> Self {
        let entries = aggregates
            .dictionary_characters()
            .into_iter()
            .map(|c| {
                let pinyin = aggregates
                    .pinyin
                    .get(&c)
                    .and_then(|raw| normalize_pinyin(raw))
                    .unwrap_or_default();
                let meaning = aggregates.definitions.get(&c).cloned().unwrap_or_default();
                (c, DictionaryEntry { pinyin, meaning })
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, c: char) -> Option<&DictionaryEntry> {
        self.entries.get(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &DictionaryEntry)> + '_ {
        self.entries.iter().map(|(c, entry)| (*c, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            entries: self.entries.len(),
            with_pinyin: self.entries.values().filter(|e| !e.pinyin.is_empty()).count(),
            with_meaning: self.entries.values().filter(|e| !e.meaning.is_empty()).count(),
        }
    }
}

impl fmt::Display for DictionaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} characters ({} with pinyin, {} with meanings)",
            self.entries, self.with_pinyin, self.with_meaning
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unihan_db::FieldValues;

    fn values(pairs: &[(char, &str)]) -> FieldValues {
        pairs.iter().map(|(c, v)| (*c, v.to_string())).collect()
    }

    #[test]
    fn covers_union_of_readings_and_definitions() {
        let aggregates = Aggregates {
            strokes: values(&[('一', "1"), ('二', "2")]),
            definitions: values(&[('一', "one; a, an; alone"), ('\u{20000}', "to exhale")]),
            pinyin: values(&[('一', "yi1"), ('好', "hao3 hao4")]),
            ..Aggregates::default()
        };
        let dictionary = CharacterDictionary::build(&aggregates);

        assert_eq!(dictionary.len(), 3);
        let characters: Vec<char> = dictionary.iter().map(|(c, _)| c).collect();
        assert_eq!(characters, vec!['一', '好', '\u{20000}']);
        assert!(dictionary.get('二').is_none());
        assert_eq!(
            dictionary.get('一'),
            Some(&DictionaryEntry {
                pinyin: "yi".to_string(),
                meaning: "one; a, an; alone".to_string(),
            })
        );
        assert_eq!(
            dictionary.get('好').map(|e| e.meaning.as_str()),
            Some("")
        );
        assert_eq!(
            dictionary.get('\u{20000}').map(|e| e.pinyin.as_str()),
            Some("")
        );
        assert_eq!(
            dictionary.stats(),
            DictionaryStats {
                entries: 3,
                with_pinyin: 2,
                with_meaning: 2,
            }
        );
    }

    #[test]
    fn meaning_matches_corpus_definition() {
        let aggregates = Aggregates {
            strokes: values(&[('丨', "1")]),
            definitions: values(&[('丨', "  "), ('一', "one")]),
            pinyin: values(&[('丨', "gun3")]),
            ..Aggregates::default()
        };
        let dictionary = CharacterDictionary::build(&aggregates);
        let corpus = crate::corpus::Corpus::assemble(&aggregates);
        for c in ['丨', '一'] {
            assert_eq!(
                dictionary.get(c).map(|e| e.meaning.as_str()),
                corpus.get(c).and_then(|r| r.definition.as_deref())
            );
        }
        assert_eq!(dictionary.get('丨').map(|e| e.meaning.as_str()), Some("  "));
    }

    #[test]
    fn serializes_as_object_keyed_by_character() {
        let aggregates = Aggregates {
            definitions: values(&[('二', "two")]),
            pinyin: values(&[('二', "er4"), ('一', "yi1")]),
            ..Aggregates::default()
        };
        let json = serde_json::to_value(CharacterDictionary::build(&aggregates)).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "一": { "pinyin": "yi", "meaning": "" },
                "二": { "pinyin": "er", "meaning": "two" },
            })
        );
    }
}
