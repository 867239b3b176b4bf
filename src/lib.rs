//! Stroke-ordered Chinese character lists and a reading/meaning dictionary
//! built from the Unihan database.
//!
//! A run aggregates each attribute from the sources a [`SourcePlan`] names,
//! assembles a [`Corpus`] of in-scope ideographs, projects it into the
//! simplified and traditional lists, and builds a [`CharacterDictionary`].
//!
//! ```no_run
//! use hanzi_strokes::{SourcePlan, pipeline};
//! use unihan_db::{LoadMode, UnihanDir};
//!
//! let dir = UnihanDir::new("Unihan_data", LoadMode::Mmap);
//! let output = pipeline::run(&dir, &SourcePlan::default());
//! println!("{} simplified characters", output.simplified().len());
//! ```

pub mod aggregates;
pub mod corpus;
pub mod dictionary;
pub mod output;
pub mod pipeline;
pub mod plan;

pub use aggregates::Aggregates;
pub use corpus::{Corpus, CorpusStats};
pub use dictionary::{CharacterDictionary, DictionaryEntry, DictionaryStats};
pub use pipeline::{PipelineOutput, run};
pub use plan::{Attribute, SourcePlan};
