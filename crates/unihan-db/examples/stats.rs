use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use unihan_db::{FieldSource, LoadMode, UnihanDir};

const FIELDS: [(&str, &str); 6] = [
    ("Unihan_IRGSources.txt", "kTotalStrokes"),
    ("Unihan_Variants.txt", "kSimplifiedVariant"),
    ("Unihan_Variants.txt", "kTraditionalVariant"),
    ("Unihan_Readings.txt", "kDefinition"),
    ("Unihan_Readings.txt", "kMandarin"),
    ("Unihan_Readings.txt", "kHanyuPinyin"),
];

fn main() -> Result<()> {
    let unihan_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p unihan-db --example stats -- <path-to-unihan-dir>")?;

    let dir = UnihanDir::new(&unihan_dir, LoadMode::Mmap);
    let files = dir
        .text_files()
        .with_context(|| format!("listing {}", unihan_dir.display()))?;

    println!("Directory: {}", unihan_dir.display());
    println!("Text files: {}", files.len());
    for (file, field) in FIELDS {
        let values = dir.field(&FieldSource::new(file, field));
        println!("{field:<20} {:>7} entries ({file})", values.len());
    }

    // Spot-check one well-known character.
    let strokes = dir.field(&FieldSource::new("Unihan_IRGSources.txt", "kTotalStrokes"));
    println!("U+4E00 kTotalStrokes: {:?}", strokes.get(&'一'));

    Ok(())
}
