use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dictionary::CharacterDictionary;
use crate::pipeline::PipelineOutput;

pub const SIMPLIFIED_FILE: &str = "simplified_chars_by_stroke.json";
pub const TRADITIONAL_FILE: &str = "traditional_chars_by_stroke.json";
pub const DICTIONARY_FILE: &str = "chinese_characters.json";

/// Write a list as a JSON array of one-character strings.
pub fn write_char_list(path: &Path, chars: &[char]) -> Result<()> {
    write_json(path, chars)
}

/// Write the dictionary as a JSON object keyed by character.
pub fn write_dictionary(path: &Path, dictionary: &CharacterDictionary) -> Result<()> {
    write_json(path, dictionary)
}

/// Write all three artifacts into `out_dir`, creating it if needed.
pub fn write_all(out_dir: &Path, output: &PipelineOutput) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let simplified = out_dir.join(SIMPLIFIED_FILE);
    write_char_list(&simplified, output.simplified())?;
    let traditional = out_dir.join(TRADITIONAL_FILE);
    write_char_list(&traditional, output.traditional())?;
    let dictionary = out_dir.join(DICTIONARY_FILE);
    write_dictionary(&dictionary, &output.dictionary)?;

    Ok(vec![simplified, traditional, dictionary])
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("serialize {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))
}
