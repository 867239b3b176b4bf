use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use unihan_db::{LoadMode, UnihanDir};

use hanzi_strokes::{SourcePlan, output, pipeline};

const DEFAULT_UNIHAN_DIR: &str = "Unihan_data";
const DEFAULT_OUT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "hanzi-strokes")]
#[command(about = "Build stroke-ordered character lists and a pinyin dictionary from Unihan")]
struct Cli {
    /// Directory holding the extracted Unihan_*.txt files.
    #[arg(long, env = "UNIHAN_DIR", default_value = DEFAULT_UNIHAN_DIR)]
    unihan_dir: PathBuf,

    /// Directory the JSON artifacts are written to.
    #[arg(long, env = "HANZI_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// JSON source plan overriding the built-in Unihan sources.
    #[arg(long, env = "UNIHAN_PLAN")]
    plan: Option<PathBuf>,

    /// How source files are loaded: `mmap` or `owned`.
    #[arg(long, env = "UNIHAN_LOAD_MODE", default_value = "mmap", value_parser = parse_load_mode)]
    load_mode: LoadMode,

    /// Print the effective source plan as JSON and exit.
    #[arg(long, default_value_t = false)]
    print_plan: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let plan = match &cli.plan {
        Some(path) => {
            info!("using source plan {}", path.display());
            SourcePlan::load(path)?
        }
        None => SourcePlan::default(),
    };

    if cli.print_plan {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &plan)?;
        writeln!(stdout)?;
        return Ok(());
    }

    info!(
        "using Unihan data at {} (mode: {:?})",
        cli.unihan_dir.display(),
        cli.load_mode
    );
    let start = Instant::now();
    let dir = UnihanDir::new(&cli.unihan_dir, cli.load_mode);
    let result = pipeline::run(&dir, &plan);

    for path in output::write_all(&cli.out_dir, &result)? {
        info!("wrote {}", path.display());
    }
    info!(
        "generated {} simplified and {} traditional characters, {} dictionary entries in {} ms",
        result.simplified().len(),
        result.traditional().len(),
        result.dictionary.len(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn parse_load_mode(raw: &str) -> Result<LoadMode, String> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Ok(LoadMode::Mmap),
        "owned" => Ok(LoadMode::Owned),
        other => Err(format!("unknown load mode {other:?} (expected mmap or owned)")),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .init();
}
