//! dnabag CLI - Command line interface for dna_bag
//!
//! Builds a counting trie from sequences given as arguments and/or a file,
//! then reports composition, exact counts, or the tree itself.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dna_bag::{
    composition, input, parse_targets, render_tree, Composition, Config, DnaTrie, OutputFormat,
    SymbolCounts, SymbolSet, TreeExport,
};
use std::path::PathBuf;

/// Sequences used by `demo`
const DEMO_SEQUENCES: [&str; 7] = ["ACTGA", "TAA", "CTAA", "TAAT", "TAATT", "ACT", "ACTG"];
const DEMO_TARGETS: [&str; 2] = ["A", "T"];

#[derive(Parser)]
#[command(name = "dnabag")]
#[command(about = "A compact counting trie for DNA sequences")]
#[command(version)]
struct Cli {
    /// Output format (json or text); overrides the config file
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to a JSON config file (default: ~/.config/dnabag/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SequenceArgs {
    /// Sequences over A, C, G, T, N (case-insensitive)
    sequences: Vec<String>,

    /// Read additional sequences from a file, one per line
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the share of symbol positions that are targets
    Report {
        #[command(flatten)]
        input: SequenceArgs,
        /// Target symbols, comma separated (default from config: C,G)
        #[arg(short, long, value_delimiter = ',')]
        targets: Option<Vec<String>>,
    },

    /// Count exact and prefix occurrences of a query sequence
    Count {
        /// The sequence to look up
        query: String,
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Print the trie
    Tree {
        #[command(flatten)]
        input: SequenceArgs,
    },

    /// Run the report on a built-in sample set with targets A,T
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Report { input, targets } => {
            let targets = match targets {
                Some(targets) => parse_targets(&targets)?,
                None => config.target_set()?,
            };
            let trie = build_trie(&input)?;
            report(format, &trie, &targets);
        }

        Commands::Count { query, input } => {
            let trie = build_trie(&input)?;
            let count = trie.count_of(&query)?;
            let prefix = trie.prefix_count(&query)?;
            output(
                format,
                &serde_json::json!({
                    "query": query,
                    "count": count,
                    "prefix_count": prefix,
                    "insertions": trie.insertions()
                }),
                format!("{}: {} exact, {} with prefix", query, count, prefix),
            );
        }

        Commands::Tree { input } => {
            let trie = build_trie(&input)?;
            output(
                format,
                &serde_json::to_value(TreeExport::from_trie(&trie))?,
                render_tree(&trie).trim_end().to_string(),
            );
        }

        Commands::Demo => {
            let trie = DnaTrie::from_sequences(DEMO_SEQUENCES)?;
            report(format, &trie, &parse_targets(DEMO_TARGETS)?);
        }
    }

    Ok(())
}

fn build_trie(args: &SequenceArgs) -> anyhow::Result<DnaTrie> {
    let mut trie = DnaTrie::new();
    trie.insert_all(&args.sequences)?;
    if let Some(path) = &args.file {
        let sequences = input::read_sequences(path)
            .with_context(|| format!("Failed to read sequences from {}", path.display()))?;
        trie.insert_all(&sequences)
            .with_context(|| format!("Bad sequence in {}", path.display()))?;
    }
    Ok(trie)
}

fn report(format: OutputFormat, trie: &DnaTrie, targets: &SymbolSet) {
    let counts = SymbolCounts::from_trie(trie);
    let result: Composition = composition(trie, targets);
    let targets_list: Vec<String> = targets.iter().map(|s| s.to_string()).collect();

    let text = match result.fraction() {
        Some(fraction) => format!(
            "{} Fraction: {:.2} ({}/{})",
            targets,
            fraction,
            result.target_count,
            result.total_count
        ),
        None => format!("{} Fraction: n/a (0/0)", targets),
    };

    output(
        format,
        &serde_json::json!({
            "targets": targets_list,
            "target_count": result.target_count,
            "total_count": result.total_count,
            "fraction": result.fraction(),
            "counts": counts,
            "insertions": trie.insertions()
        }),
        text,
    );
}

fn output(format: OutputFormat, value: &serde_json::Value, text: String) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!("{}", text);
        }
    }
}
