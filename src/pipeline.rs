use std::time::Instant;

use tracing::{info, warn};
use unihan_db::UnihanDir;

use crate::aggregates::Aggregates;
use crate::corpus::Corpus;
use crate::dictionary::CharacterDictionary;
use crate::plan::SourcePlan;

/// Everything a run produces.
#[derive(Clone, Debug, Default)]
pub struct PipelineOutput {
    pub corpus: Corpus,
    pub dictionary: CharacterDictionary,
}

impl PipelineOutput {
    pub fn simplified(&self) -> &[char] {
        self.corpus.simplified_list()
    }

    pub fn traditional(&self) -> &[char] {
        self.corpus.traditional_list()
    }
}

/// Aggregate, assemble and project everything `plan` declares.
///
/// Never fails: unreadable sources and unparsable values only shrink the
/// output.
pub fn run(dir: &UnihanDir, plan: &SourcePlan) -> PipelineOutput {
    if !dir.root().is_dir() {
        warn!("Unihan directory {} does not exist", dir.root().display());
    }

    info!("parsing Unihan data from {}", dir.root().display());
    let start = Instant::now();
    let aggregates = Aggregates::load(dir, plan);
    info!("sources parsed in {} ms", start.elapsed().as_millis());

    if aggregates.definitions.is_empty() {
        report_missing_definitions(dir);
    }

    let corpus = Corpus::assemble(&aggregates);
    info!("corpus: {}", corpus.stats());

    let dictionary = CharacterDictionary::build(&aggregates);
    info!("dictionary: {}", dictionary.stats());

    PipelineOutput { corpus, dictionary }
}

fn report_missing_definitions(dir: &UnihanDir) {
    warn!("no definitions found in any source");
    match dir.text_files() {
        Ok(files) if files.is_empty() => warn!("no .txt files in {}", dir.root().display()),
        Ok(files) => warn!("available files: {}", files.join(", ")),
        Err(err) => warn!("cannot list {}: {err}", dir.root().display()),
    }
}
