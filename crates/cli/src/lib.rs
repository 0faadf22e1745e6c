use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use flags::InputFormatFlag;
use keyfield_planner::{analyze, Allocator, PlannerConfig};
use serde::Serialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod flags;
mod input;
mod report;

const CONFIG_ENV: &str = "KEYFIELD_CONFIG";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    print_stdout(&body)
}

#[derive(Parser)]
#[command(name = "keyfield")]
#[command(about = "Pack scored keywords into fixed-size text fields", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Planner config (TOML); falls back to $KEYFIELD_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Place keywords into the three output fields
    Optimize(OptimizeArgs),

    /// Show the expanded, scored and sorted candidate pool
    Pool(PoolArgs),

    /// Report which words of each phrase are missing from a reference text
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct KeywordInputArgs {
    /// Keyword file (stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value = "auto")]
    format: InputFormatFlag,
}

#[derive(Args)]
struct OptimizeArgs {
    #[command(flatten)]
    source: KeywordInputArgs,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PoolArgs {
    #[command(flatten)]
    source: KeywordInputArgs,

    /// Show at most this many rows
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// File with one phrase per line
    #[arg(long)]
    phrases: PathBuf,

    /// Reference text the phrases are checked against
    #[arg(long)]
    reference: PathBuf,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Commands {
    const fn json(&self) -> bool {
        match self {
            Commands::Optimize(args) => args.json,
            Commands::Pool(args) => args.json,
            Commands::Analyze(args) => args.json,
        }
    }
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.command.json() {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Optimize(args) => run_optimize(args, config),
        Commands::Pool(args) => run_pool(args, config),
        Commands::Analyze(args) => run_analyze(args),
    }
}

fn resolve_config(flag: Option<&Path>) -> Result<PlannerConfig> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => PlannerConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(PlannerConfig::default()),
    }
}

fn read_keywords(source: &KeywordInputArgs) -> Result<Vec<keyfield_planner::KeywordCandidate>> {
    let raw = input::read_source(source.input.as_deref())?;
    input::parse_keywords(&raw, source.format.as_domain())
}

fn run_optimize(args: OptimizeArgs, config: PlannerConfig) -> Result<()> {
    let candidates = read_keywords(&args.source)?;
    let allocator = Allocator::new(config);
    let result = allocator.optimize_placement(&candidates);

    log::info!(
        "Planned {} input keywords, total points {:.2}",
        candidates.len(),
        result.total_points
    );

    if args.json {
        print_json(&result)
    } else {
        print_stdout(&report::render_optimization_report(
            allocator.config(),
            &result,
        ))
    }
}

fn run_pool(args: PoolArgs, config: PlannerConfig) -> Result<()> {
    let candidates = read_keywords(&args.source)?;
    let mut pool = Allocator::new(config).working_pool(&candidates);

    if args.json {
        if let Some(limit) = args.limit {
            pool.truncate(limit);
        }
        print_json(&pool)
    } else {
        print_stdout(&report::render_pool_report(&pool, args.limit))
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let phrases = fs::read_to_string(&args.phrases)
        .with_context(|| format!("Failed to read {}", args.phrases.display()))?;
    let reference = fs::read_to_string(&args.reference)
        .with_context(|| format!("Failed to read {}", args.reference.display()))?;

    let phrases = input::parse_phrases(&phrases);
    let rows = analyze(&phrases, &reference);

    if args.json {
        print_json(&rows)
    } else {
        print_stdout(&report::render_analysis_report(&rows))
    }
}
