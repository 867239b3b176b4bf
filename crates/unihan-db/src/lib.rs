//! Read Unihan's tagged-record text files and merge fields across sources.
//!
//! Every Unihan data file is a list of tab-separated records of the form
//! `U+XXXX<TAB>kFieldName<TAB>value`, with `#` comment lines in between. This
//! crate offers two layers:
//!
//! - Record parsing: [`parse_field`] filters one buffer down to a single field
//!   and returns a `char -> value` map. Inside one source the last occurrence
//!   of a character wins.
//! - Aggregation: [`UnihanDir::aggregate`] folds an ordered list of
//!   [`FieldSource`]s into one map. Across sources the first writer wins, so
//!   earlier sources take priority.
//!
//! Missing files never fail a run: they contribute an empty map and a
//! `warn!` diagnostic. Lines that do not look like records are skipped.
//!
//! # Example
//! ```no_run
//! use unihan_db::{FieldSource, LoadMode, UnihanDir};
//!
//! let dir = UnihanDir::new("Unihan_data", LoadMode::Mmap);
//! let strokes = dir.aggregate(&[
//!     FieldSource::new("Unihan_IRGSources.txt", "kTotalStrokes"),
//!     FieldSource::new("Unihan_DictionaryLikeData.txt", "kTotalStrokes"),
//! ]);
//! println!("{} stroke entries", strokes.len());
//! ```
//!
//! For a runnable demo, see `cargo run -p unihan-db --example stats -- <dir>`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use unihan_types::parse_codepoint;

/// Raw field values keyed by character.
pub type FieldValues = HashMap<char, String>;

/// Strategy for loading source files.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each source file.
    #[default]
    Mmap,
    /// Read each source file into an owned buffer.
    Owned,
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// One `(file, field)` pair feeding a logical attribute.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FieldSource {
    pub file: String,
    pub field: String,
}

impl FieldSource {
    pub fn new(file: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            field: field.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

/// A directory of Unihan text files plus the way they should be loaded.
#[derive(Clone, Debug)]
pub struct UnihanDir {
    root: PathBuf,
    mode: LoadMode,
}

impl UnihanDir {
    pub fn new(root: impl Into<PathBuf>, mode: LoadMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse one `(file, field)` pair, degrading to an empty map when the
    /// file cannot be opened or read.
    pub fn field(&self, source: &FieldSource) -> FieldValues {
        let path = self.root.join(&source.file);
        match load_field(&path, &source.field, self.mode) {
            Ok(values) => {
                info!(
                    "found {} {} entries in {}",
                    values.len(),
                    source.field,
                    source.file
                );
                values
            }
            Err(err) => {
                warn!("{err}; {} contributes no entries", source.field);
                FieldValues::new()
            }
        }
    }

    /// Merge every source in order; earlier sources keep their values.
    pub fn aggregate(&self, sources: &[FieldSource]) -> FieldValues {
        aggregate_with(sources, |source| self.field(source))
    }

    /// Names of the `.txt` files present in the directory, sorted.
    pub fn text_files(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Fold `sources` through `load`, keeping the first value seen per character.
pub fn aggregate_with<F>(sources: &[FieldSource], mut load: F) -> FieldValues
where
    F: FnMut(&FieldSource) -> FieldValues,
{
    sources
        .iter()
        .fold(FieldValues::new(), |acc, source| merge_first_wins(acc, load(source)))
}

/// Union two maps; entries already present in `acc` are never replaced.
pub fn merge_first_wins(mut acc: FieldValues, next: FieldValues) -> FieldValues {
    let before = acc.len();
    for (c, value) in next {
        acc.entry(c).or_insert(value);
    }
    debug!("merge added {} new characters", acc.len() - before);
    acc
}

/// Open `path` and extract `field` from it.
pub fn load_field(path: &Path, field: &str, mode: LoadMode) -> Result<FieldValues, SourceError> {
    let buffer = load_file(path, mode)?;
    Ok(parse_field(buffer.as_slice(), field))
}

/// Extract `field` from any reader.
pub fn read_field(mut reader: impl Read, field: &str) -> Result<FieldValues, SourceError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(parse_field(&buf, field))
}

/// Extract `field` from a buffer of tagged records.
///
/// Blank lines, `#` comments, lines with fewer than three columns, lines that
/// are not valid UTF-8, and lines whose key is not `U+XXXX` are skipped. A
/// character repeated within the buffer keeps its last value.
pub fn parse_field(bytes: &[u8], field: &str) -> FieldValues {
    let mut values = FieldValues::new();
    for raw_line in bytes.split(|b| *b == b'\n') {
        let Some((c, value)) = parse_record(raw_line, field) else {
            continue;
        };
        values.insert(c, value.to_string());
    }
    values
}

fn parse_record<'a>(raw_line: &'a [u8], field: &str) -> Option<(char, &'a str)> {
    let line = std::str::from_utf8(raw_line).ok()?.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut columns = line.split('\t');
    let key = columns.next()?;
    let name = columns.next()?;
    let value = columns.next()?;
    if name != field {
        return None;
    }
    let c = parse_codepoint(key)?;
    Some((c, value))
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    match mode {
        LoadMode::Mmap => {
            let map = unsafe { Mmap::map(&file) }?;
            Ok(Buffer::Mmap(map))
        }
        LoadMode::Owned => {
            let mut file = file;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(Buffer::Owned(buf))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Unihan_IRGSources.txt
#
U+4E00\tkTotalStrokes\t1
U+4E00\tkRSUnicode\t1.0
U+4E8C\tkTotalStrokes\t2

4E09\tkTotalStrokes\t3
U+4E5D\tkTotalStrokes
U+4E8C\tkTotalStrokes\t2 3
U+4E03\tkTotalStrokes\t2\textra\r
";

    #[test]
    fn keeps_only_requested_field() {
        let values = parse_field(SAMPLE.as_bytes(), "kRSUnicode");
        assert_eq!(values.len(), 1);
        assert_eq!(values[&'一'], "1.0");
    }

    #[test]
    fn skips_malformed_lines_and_overwrites_duplicates() {
        let values = parse_field(SAMPLE.as_bytes(), "kTotalStrokes");
        assert_eq!(values.len(), 3);
        assert_eq!(values[&'一'], "1");
        assert_eq!(values[&'二'], "2 3");
        assert_eq!(values[&'七'], "2");
        assert!(!values.contains_key(&'三'));
        assert!(!values.contains_key(&'九'));
    }

    #[test]
    fn tolerates_invalid_utf8_lines() {
        let mut bytes = b"U+4E00\tkDefinition\tone\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"U+4E8C\tkDefinition\ttwo\n");
        let values = parse_field(&bytes, "kDefinition");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn first_writer_wins_across_sources() {
        let a = FieldSource::new("a.txt", "kTotalStrokes");
        let b = FieldSource::new("b.txt", "kTotalStrokes");
        let merged = aggregate_with(&[a.clone(), b.clone()], |source| {
            if *source == a {
                parse_field(b"U+4E00\tkTotalStrokes\t5\n", &source.field)
            } else {
                parse_field(
                    b"U+4E00\tkTotalStrokes\t7\nU+4E8C\tkTotalStrokes\t2\n",
                    &source.field,
                )
            }
        });
        assert_eq!(merged[&'一'], "5");
        assert_eq!(merged[&'二'], "2");
    }

    #[test]
    fn aggregation_is_idempotent() {
        let sources = [
            FieldSource::new("a.txt", "kMandarin"),
            FieldSource::new("a.txt", "kHanyuPinyin"),
        ];
        let load = |source: &FieldSource| {
            parse_field(
                "U+4E00\tkMandarin\tyī\nU+4E00\tkHanyuPinyin\t10001.010:yī\nU+4E8C\tkHanyuPinyin\t10009.010:èr\n"
                    .as_bytes(),
                &source.field,
            )
        };
        let once = aggregate_with(&sources, load);
        let twice = aggregate_with(&sources, load);
        assert_eq!(once, twice);
        assert_eq!(once[&'一'], "yī");
        assert_eq!(once[&'二'], "10009.010:èr");
    }

    #[test]
    fn empty_source_list_yields_empty_map() {
        let merged = aggregate_with(&[], |_| FieldValues::new());
        assert!(merged.is_empty());
    }
}
