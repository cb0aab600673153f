//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `keys`: List every key path in the catalog
//! - `resolve`: Resolve the catalog for one language
//! - `check`: Report leaves missing the fallback or other languages
//! - `render`: Localize a JSON element document
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog JSON file (overrides config file)
    #[arg(long, env = "I18NBIND_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the active language is chosen.
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Language to resolve (overrides query string and config file)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// URL query string to read the language from, e.g. "?hl=ko"
    #[arg(long, conflicts_with = "lang")]
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Print a JSON object instead of aligned lines
    #[arg(long)]
    pub json: bool,

    /// Print every binding write (text, placeholder, value)
    #[arg(long, conflicts_with = "json")]
    pub trace: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// JSON element document to localize
    pub document: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub language: LanguageArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every key path in the catalog
    Keys(KeysCommand),
    /// Resolve every key for the selected language
    Resolve(ResolveCommand),
    /// Report keys missing the fallback language or other translations
    Check(CheckCommand),
    /// Write resolved text into a JSON element document and print it
    Render(RenderCommand),
    /// Initialize a new .i18nbindrc.json configuration file
    Init,
}
