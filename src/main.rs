mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Query, StatFormat, Step};
use itertools::Itertools;
use runetrie::{
    dataset::{self, Format},
    Stats, Trie,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read or write: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse the input: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Trie(#[from] runetrie::Error),
    #[error("Unable to encode the stats: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No keys match: '{0}'")]
    NoMatches(String),
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn entry() -> Result<(), Error> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let format = Format {
        delimiter: cli.load.delimiter,
        lowercase: cli.load.lowercase,
    };
    let mut trie = dataset::parse(cli.input.lock(), format)?;

    let stdout = std::io::stdout();
    run(&mut trie, cli.step, &mut stdout.lock())
}

/// Applies each step in order, stopping after the query that ends the chain.
fn run(trie: &mut Trie<String>, step: Step, out: &mut impl Write) -> Result<(), Error> {
    let mut next = Some(step);
    while let Some(step) = next.take() {
        match step {
            Step::Put(chain) => {
                let (opts, then) = chain.into_parts();
                if trie.put(&opts.key, opts.value).is_some() {
                    debug!(key = %opts.key, "overwrote existing key");
                }
                next = then;
            }
            Step::Delete(chain) => {
                let (opts, then) = chain.into_parts();
                if trie.delete(&opts.key).is_none() {
                    info!(key = %opts.key, "nothing to delete");
                }
                next = then;
            }
            Step::Query(query) => answer(trie, query, out)?,
        }
    }
    Ok(())
}

fn answer(trie: &Trie<String>, query: Query, out: &mut impl Write) -> Result<(), Error> {
    match query {
        Query::Get(opts) => writeln!(out, "{}", trie.get(&opts.key)?)?,
        Query::Keys(opts) => write_keys(out, trie.keys(), opts.unsorted, "")?,
        Query::Prefix(opts) => write_keys(
            out,
            trie.keys_with_prefix(&opts.prefix),
            opts.list.unsorted,
            &opts.prefix,
        )?,
        Query::Longest(opts) => writeln!(out, "{}", trie.longest_prefix(&opts.query))?,
        Query::Fuzzy(opts) => write_keys(
            out,
            trie.keys_with_fuzzy_match(&opts.pattern),
            opts.list.unsorted,
            &opts.pattern,
        )?,
        Query::Depth => writeln!(out, "{}", trie.depth())?,
        Query::Stats(opts) => write_stats(out, &trie.stats(), opts.format)?,
    }
    Ok(())
}

fn write_keys(
    out: &mut impl Write,
    keys: Vec<String>,
    unsorted: bool,
    pattern: &str,
) -> Result<(), Error> {
    if keys.is_empty() {
        return Err(Error::NoMatches(pattern.to_owned()));
    }
    let keys = if unsorted {
        keys
    } else {
        keys.into_iter().sorted().collect_vec()
    };
    for key in keys {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, stats: &Stats, format: StatFormat) -> Result<(), Error> {
    match format {
        StatFormat::Human => {
            writeln!(out, "keys:  {}", stats.keys)?;
            writeln!(out, "nodes: {}", stats.nodes)?;
            writeln!(out, "depth: {}", stats.depth)?;
            writeln!(out, "chars: {}", stats.chars)?;
        }
        StatFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, stats)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
