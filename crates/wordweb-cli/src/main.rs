//! Wordweb CLI - word graph queries from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Build a graph from a text file and show stats
//! wordweb stats input.txt
//!
//! # Print the adjacency listing
//! wordweb show input.txt
//!
//! # Bridge words and text augmentation
//! wordweb bridge input.txt explore new
//! wordweb generate input.txt "seek to explore new worlds"
//!
//! # Shortest paths, optionally writing a highlighted DOT file
//! wordweb path input.txt to life --dot path.dot
//! wordweb path input.txt to
//!
//! # PageRank
//! wordweb pagerank input.txt --top 10
//! wordweb rank input.txt new
//!
//! # Random walk, cancelled after 500ms
//! wordweb walk input.txt --step-delay-ms 100 --timeout-ms 500 -o walk.txt
//!
//! # Export
//! wordweb export input.txt --format dot -o graph.dot
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordweb_core::formats::{Adjacency, Dot, Json};
use wordweb_core::{EngineConfig, Session};

#[derive(Parser)]
#[command(name = "wordweb")]
#[command(about = "Word graph CLI", long_about = None)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show statistics about the word graph
    Stats {
        /// Input text file
        input: PathBuf,
    },

    /// Print the adjacency listing
    Show {
        /// Input text file
        input: PathBuf,
    },

    /// Query bridge words between two words
    Bridge {
        /// Input text file
        input: PathBuf,

        /// First word
        word1: String,

        /// Second word
        word2: String,
    },

    /// Insert bridge words into new text
    Generate {
        /// Input text file
        input: PathBuf,

        /// Text to augment
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Shortest path between two words, or from one word to all others
    Path {
        /// Input text file
        input: PathBuf,

        /// Starting word
        from: String,

        /// Target word (omit for all reachable words)
        to: Option<String>,

        /// Write a DOT file highlighting the path
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Compute PageRank centrality
    Pagerank {
        /// Input text file
        input: PathBuf,

        /// Number of top words to show
        #[arg(short, long, default_value = "20")]
        top: usize,

        /// Damping factor (overrides the config file)
        #[arg(long)]
        damping: Option<f64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// PageRank score of a single word
    Rank {
        /// Input text file
        input: PathBuf,

        /// Word to look up
        word: String,
    },

    /// Random walk from a random start word
    Walk {
        /// Input text file
        input: PathBuf,

        /// Write the walk transcript to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cancel the walk after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Pause between steps (overrides the config file)
        #[arg(long)]
        step_delay_ms: Option<u64>,
    },

    /// Export the graph
    Export {
        /// Input text file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "dot")]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Graphviz DOT
    Dot,
    /// JSON nodes and edges
    Json,
    /// Sorted adjacency listing
    Adjacency,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }

    match cli.command {
        Commands::Stats { input } => cmd_stats(config, &input),
        Commands::Show { input } => cmd_show(config, &input),
        Commands::Bridge {
            input,
            word1,
            word2,
        } => cmd_bridge(config, &input, &word1, &word2),
        Commands::Generate { input, text } => cmd_generate(config, &input, &text.join(" ")),
        Commands::Path {
            input,
            from,
            to,
            dot,
        } => cmd_path(config, &input, &from, to.as_deref(), dot.as_deref()),
        Commands::Pagerank {
            input,
            top,
            damping,
            json,
        } => {
            if let Some(d) = damping {
                config.pagerank.damping_factor = d;
            }
            cmd_pagerank(config, &input, top, json)
        }
        Commands::Rank { input, word } => cmd_rank(config, &input, &word),
        Commands::Walk {
            input,
            output,
            timeout_ms,
            step_delay_ms,
        } => {
            if let Some(ms) = step_delay_ms {
                config.walk.step_delay_ms = ms;
            }
            cmd_walk(config, &input, output.as_deref(), timeout_ms)
        }
        Commands::Export {
            input,
            format,
            output,
        } => cmd_export(config, &input, format, output.as_deref()),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(config: EngineConfig, path: &Path) -> Result<Session> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", path.display()));

    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut session = Session::new(config);
    let corpus = session
        .load_text(&text)
        .with_context(|| format!("Failed to build graph from {}", path.display()))?;

    pb.finish_and_clear();
    info!(
        words = corpus.graph.word_count(),
        edges = corpus.graph.edge_count(),
        elapsed = ?start.elapsed(),
        "loaded {}",
        path.display()
    );
    Ok(session)
}

/// Print a query result; well-defined negative outcomes are ordinary output.
fn print_outcome<T: Display>(result: wordweb_core::Result<T>) -> Result<()> {
    match result {
        Ok(value) => println!("{value}"),
        Err(e) if e.is_negative_result() => println!("{e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn cmd_stats(config: EngineConfig, input: &Path) -> Result<()> {
    let session = load_session(config, input)?;
    let corpus = session.corpus()?;
    let stats = corpus.graph.stats();

    println!("Word Graph Statistics");
    println!("=====================");
    println!("Tokens:         {}", corpus.token_count);
    println!("Words:          {}", stats.word_count);
    println!("Edges:          {}", stats.edge_count);
    println!("Total weight:   {}", stats.total_weight);
    println!("Dangling words: {}", stats.dangling_count);
    println!("Avg out-degree: {:.2}", stats.avg_out_degree);

    Ok(())
}

fn cmd_show(config: EngineConfig, input: &Path) -> Result<()> {
    let session = load_session(config, input)?;
    print!("{}", Adjacency::to_string(&session.corpus()?.graph)?);
    Ok(())
}

fn cmd_bridge(config: EngineConfig, input: &Path, word1: &str, word2: &str) -> Result<()> {
    let session = load_session(config, input)?;
    print_outcome(session.bridge_words(word1, word2))
}

fn cmd_generate(config: EngineConfig, input: &Path, text: &str) -> Result<()> {
    let mut session = load_session(config, input)?;
    println!("{}", session.generate_text(text)?);
    Ok(())
}

fn cmd_path(
    config: EngineConfig,
    input: &Path,
    from: &str,
    to: Option<&str>,
    dot: Option<&Path>,
) -> Result<()> {
    let session = load_session(config, input)?;

    let Some(to) = to else {
        let paths = session.all_shortest_paths(from)?;
        if paths.is_empty() {
            println!("No other word is reachable from \"{}\".", from.trim().to_lowercase());
        }
        for path in &paths {
            println!("{}: {} (weight {})", path.target(), path, path.weight);
        }
        return Ok(());
    };

    match session.shortest_path(from, to) {
        Ok(path) => {
            println!("Shortest path: {}", path);
            println!("Total weight: {}", path.weight);
            if let Some(dot_path) = dot {
                let content = session.export_dot(Some(&path.words))?;
                write_output(Some(dot_path), &content)?;
            }
            Ok(())
        }
        Err(e) => print_outcome::<String>(Err(e)),
    }
}

fn cmd_pagerank(config: EngineConfig, input: &Path, top: usize, json: bool) -> Result<()> {
    let mut session = load_session(config, input)?;

    let start = Instant::now();
    let result = session.page_rank()?;
    debug!(elapsed = ?start.elapsed(), "pagerank computed");

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "PageRank ({} iterations, {}):",
        result.iterations,
        if result.converged {
            "converged"
        } else {
            "not converged"
        }
    );
    for (i, (word, score)) in result.ranked().iter().take(top).enumerate() {
        println!("{}. {} ({:.6})", i + 1, word, score);
    }

    Ok(())
}

fn cmd_rank(config: EngineConfig, input: &Path, word: &str) -> Result<()> {
    let mut session = load_session(config, input)?;
    session.page_rank()?;

    let word = word.trim().to_lowercase();
    match session.rank_of(&word) {
        Some(score) => println!("PageRank of \"{}\": {:.6}", word, score),
        None => println!("No \"{}\" in the graph!", word),
    }
    Ok(())
}

fn cmd_walk(
    config: EngineConfig,
    input: &Path,
    output: Option<&Path>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let mut session = load_session(config, input)?;
    let handle = session.spawn_walk()?;

    if let Some(ms) = timeout_ms {
        let deadline = Instant::now() + Duration::from_millis(ms);
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        if !handle.is_finished() {
            debug!("walk timed out, cancelling");
            handle.cancel();
        }
    }

    let record = handle.join()?;
    println!("{record}");
    if let Some(path) = output {
        write_output(Some(path), &format!("{record}\n"))?;
    }
    Ok(())
}

fn cmd_export(
    config: EngineConfig,
    input: &Path,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let session = load_session(config, input)?;
    let corpus = session.corpus()?;

    let content = match format {
        ExportFormat::Dot => Dot::to_string(&corpus.graph, None)?,
        ExportFormat::Json => Json::to_string(corpus)? + "\n",
        ExportFormat::Adjacency => Adjacency::to_string(&corpus.graph)?,
    };

    write_output(output, &content)
}
