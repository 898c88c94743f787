use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "doctags",
    about = "Build search tags for project documents from a catalog"
)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a catalog and print every project with its document tags
    Build(BuildArgs),
    /// Extract keywords from a piece of text
    Keywords(KeywordsArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Build --

#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Catalog JSON file (defaults to $DOCTAGS_CATALOG)
    pub catalog: Option<PathBuf>,

    /// Extra non-words, comma or space separated (defaults to
    /// $DOCTAGS_NON_WORDS)
    #[arg(long)]
    pub non_words: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail if any catalog entry was rejected
    #[arg(long)]
    pub strict: bool,
}

// -- Keywords --

#[derive(Debug, Parser)]
pub struct KeywordsArgs {
    /// Text to extract keywords from
    pub text: String,

    /// Comma-separated words to leave out
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Non-words, comma or space separated (defaults to
    /// $DOCTAGS_NON_WORDS)
    #[arg(long)]
    pub non_words: Option<String>,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "doctags",
            &mut std::io::stdout(),
        );
    }
}
