//! Vocablink CLI: link controlled vocabularies into bow-tie edges.
//!
//! Usage:
//!   vocablink link --vocabulary vocab.json [--config link.yaml] [--output links.json]
//!   vocablink score "<from label>" "<to label>" [--relationship leads_to]
//!   vocablink validate --links links.json
//!   vocablink bowtie --vocabulary vocab.json --activity <id>

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vocablink::link::{ConfidenceModel, LinkSet};
use vocablink::{
    assemble_bowtie, Aggregator, LinkConfig, LinkEngine, LinkResult, MethodSet, Relationship,
    Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "vocablink",
    version,
    about = "Vocabulary linking engine for bow-tie risk diagrams"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that run the engine.
#[derive(clap::Args)]
struct RunOptions {
    /// Vocabulary document (.json, .yaml or .yml)
    #[arg(long)]
    vocabulary: PathBuf,
    /// Linking config file (.json, .yaml or .yml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Minimum aggregated similarity for a link
    #[arg(long)]
    threshold: Option<f64>,
    /// Maximum links per source item and boundary
    #[arg(long)]
    max_links: Option<usize>,
    /// Comma-separated similarity methods (jaccard, keyword, causal)
    #[arg(long, value_delimiter = ',')]
    methods: Option<Vec<String>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Link a vocabulary and write the edge list as JSON
    Link {
        #[command(flatten)]
        run: RunOptions,
        /// Write JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score a single label pair and explain the result
    Score {
        /// Source label
        from: String,
        /// Target label
        to: String,
        /// Comma-separated similarity methods
        #[arg(long, value_delimiter = ',')]
        methods: Option<Vec<String>>,
        /// Relationship used to phrase the reasoning
        #[arg(long, default_value = "causes", value_parser = parse_relationship)]
        relationship: Relationship,
    },
    /// Check an edge list against the bow-tie relationship table
    Validate {
        /// JSON edge list (`{"links": [...]}` or a bare array)
        #[arg(long)]
        links: PathBuf,
    },
    /// Show the bow-tie chains reachable from one activity
    Bowtie {
        #[command(flatten)]
        run: RunOptions,
        /// Activity id to start from
        #[arg(long)]
        activity: String,
    },
}

fn parse_relationship(name: &str) -> Result<Relationship, String> {
    Relationship::parse(name).ok_or_else(|| {
        format!("unknown relationship '{}' (expected causes, leads_to, prevents or mitigates)", name)
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve config: file first, then command-line overrides.
fn resolve_config(run: &RunOptions) -> LinkResult<LinkConfig> {
    let mut config = match &run.config {
        Some(path) => LinkConfig::from_path(path)?,
        None => LinkConfig::default(),
    };
    if let Some(threshold) = run.threshold {
        config.similarity_threshold = threshold;
    }
    if let Some(max_links) = run.max_links {
        config.max_links_per_item = max_links;
    }
    if let Some(methods) = &run.methods {
        config.methods = MethodSet::from_names(methods);
    }
    Ok(config)
}

fn run_engine(run: &RunOptions) -> LinkResult<LinkSet> {
    let config = resolve_config(run)?;
    let vocabulary = Vocabulary::from_path(&run.vocabulary)?;
    Ok(LinkEngine::new(config).link(&vocabulary))
}

fn write_output(content: &str, output: Option<&Path>) -> LinkResult<()> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_link(run: &RunOptions, output: Option<&Path>) -> i32 {
    let set = match run_engine(run) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let violations = set.validate();
    if !violations.is_empty() {
        eprintln!("Warning: {} structural violations in output", violations.len());
    }

    let written = set
        .to_json_pretty()
        .and_then(|json| write_output(&json, output));
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        return 1;
    }

    eprint!("{}", set.summary());
    0
}

fn cmd_score(from: &str, to: &str, methods: Option<&[String]>, relationship: Relationship) -> i32 {
    let methods = methods.map(MethodSet::from_names).unwrap_or_default();
    let aggregator = Aggregator::new(methods);
    let breakdown = aggregator.breakdown(from, to, None);

    for (method, score) in &breakdown.scores {
        println!("{:<10} {:.3}", method.as_str(), score);
    }
    println!("{:<10} {:.3}", "similarity", breakdown.similarity);

    let assessment = ConfidenceModel::default().assess(
        from,
        to,
        relationship,
        breakdown.similarity,
        &breakdown.methods(),
        Some(&breakdown),
    );
    println!("{:<10} {:.3} ({})", "confidence", assessment.confidence, assessment.level);
    println!("{}", assessment.reasoning);
    0
}

fn cmd_validate(path: &Path) -> i32 {
    let set = match LinkSet::from_path(path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let violations = set.validate();
    if violations.is_empty() {
        println!("{} edges, no structural violations", set.len());
        return 0;
    }
    for violation in &violations {
        println!("{}", violation);
    }
    println!("{} of {} edges violate the bow-tie structure", violations.len(), set.len());
    1
}

fn cmd_bowtie(run: &RunOptions, activity: &str) -> i32 {
    let set = match run_engine(run) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let bowtie = assemble_bowtie(&set, activity);
    if bowtie.is_empty() {
        eprintln!("Warning: no causal chains found for activity '{}'", activity);
    }

    println!("{:<6}  {:<32}  {:<32}", "SCORE", "PRESSURE", "CONSEQUENCE");
    println!("{}", "-".repeat(74));
    for chain in &bowtie.chains {
        println!(
            "{:<6.3}  {:<32}  {:<32}",
            chain.score, chain.pressure.name, chain.consequence.name
        );
    }
    for control in &bowtie.preventive_controls {
        println!("preventive  {} → {} ({:.3})", control.control.name, control.target_id, control.similarity);
    }
    for control in &bowtie.protective_controls {
        println!("protective  {} → {} ({:.3})", control.control.name, control.target_id, control.similarity);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Link { run, output } => cmd_link(&run, output.as_deref()),
        Commands::Score {
            from,
            to,
            methods,
            relationship,
        } => cmd_score(&from, &to, methods.as_deref(), relationship),
        Commands::Validate { links } => cmd_validate(&links),
        Commands::Bowtie { run, activity } => cmd_bowtie(&run, &activity),
    };
    std::process::exit(code);
}
