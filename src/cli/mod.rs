mod chain;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
pub use chain::Chain;

/// Load keys into a trie and query it.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File of `key<DELIMITER>value` records, one per line. Use `-` for stdin.
    pub input: clio::Input,

    #[command(flatten)]
    pub load: OptsLoad,

    /// Increase logging verbosity. Can be repeated.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub step: Step,
}

#[derive(Debug, Subcommand)]
#[command(subcommand_precedence_over_arg = true)]
pub enum Step {
    /// Insert a key with a value.
    Put(Chain<OptsPut, Self>),
    /// Remove a key.
    Delete(Chain<OptsKey, Self>),
    #[command(flatten)]
    /// Final query to run.
    Query(Query),
}

#[derive(Debug, Subcommand)]
pub enum Query {
    /// Print the value stored under a key.
    Get(OptsKey),
    /// List every key.
    Keys(OptsList),
    /// List the keys starting with a prefix.
    Prefix(OptsPrefix),
    /// Print the longest part of a query that lies on a path of the trie.
    Longest(OptsLongest),
    /// List the keys matching a pattern, where '.' stands for any one character.
    Fuzzy(OptsFuzzy),
    /// Print the height of the trie.
    Depth,
    /// Display statistics about the trie.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsLoad {
    /// Separator between key and value: a single ASCII character, or `tab`.
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: u8,
    /// Lowercase every key while loading.
    #[arg(short, long, default_value_t = false)]
    pub lowercase: bool,
}

#[derive(Debug, Args)]
pub struct OptsPut {
    /// Key to insert.
    pub key: String,
    /// Value to store against the key.
    #[arg(default_value = "")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct OptsKey {
    /// Key to look up.
    pub key: String,
}

#[derive(Debug, Args)]
pub struct OptsList {
    /// Print keys in traversal order instead of sorting them.
    #[arg(short, long, default_value_t = false)]
    pub unsorted: bool,
}

#[derive(Debug, Args)]
pub struct OptsPrefix {
    /// Prefix every listed key starts with.
    pub prefix: String,

    #[command(flatten)]
    pub list: OptsList,
}

#[derive(Debug, Args)]
pub struct OptsLongest {
    /// String to match against the trie.
    pub query: String,
}

#[derive(Debug, Args)]
pub struct OptsFuzzy {
    /// Pattern of the same length as the keys to find.
    pub pattern: String,

    #[command(flatten)]
    pub list: OptsList,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
                _ => Err(format!("'{value}' is not a single ASCII character")),
            }
        }
    }
}
