use std::env;
use std::path::PathBuf;

use unihan_db::{FieldSource, LoadMode, UnihanDir};

fn unihan_dir() -> Option<PathBuf> {
    env::var("UNIHAN_DIR").ok().map(PathBuf::from)
}

#[test]
fn loads_unihan_release() {
    let Some(dir) = unihan_dir() else {
        eprintln!("skipping: UNIHAN_DIR not set");
        return;
    };
    let dir = UnihanDir::new(dir, LoadMode::Mmap);

    let strokes = dir.aggregate(&[FieldSource::new("Unihan_IRGSources.txt", "kTotalStrokes")]);
    assert!(strokes.len() > 50_000, "stroke table too small");
    assert_eq!(strokes.get(&'一').map(String::as_str), Some("1"));

    let mandarin = dir.aggregate(&[FieldSource::new("Unihan_Readings.txt", "kMandarin")]);
    assert!(mandarin.len() > 20_000, "mandarin readings too small");
}
