use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "snipvault", version, about = "Store, search, and render code snippets")]
pub struct Cli {
    /// Storage directory (overrides the configured one).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a new snippet from --code, --file, or --stdin.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        language: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        description: String,
        #[command(flatten)]
        code: CodeSource,
    },
    /// Change fields of an existing snippet; omitted fields are kept.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        code: CodeSource,
    },
    /// Delete a snippet.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// List snippets matching a search term and language.
    List {
        #[command(flatten)]
        query: QueryArgs,
        /// Print highlighted HTML markup instead of raw code.
        #[arg(long)]
        html: bool,
    },
    /// Print one snippet.
    Show { id: String },
    /// Copy a snippet's code to the clipboard.
    Copy { id: String },
    /// Write an HTML snippet to a file for previewing in a browser.
    Preview {
        id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render matching snippets as an HTML page.
    Render {
        #[command(flatten)]
        query: QueryArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Export all snippets to a JSON file.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import snippets from a JSON file, appending them to the collection.
    Import {
        file: PathBuf,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show or change the theme.
    Theme { action: Option<ThemeAction> },
    /// Show the config, or remember a storage directory.
    Config {
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct CodeSource {
    /// Code text.
    #[arg(long)]
    pub code: Option<String>,
    /// Read code from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Read code from standard input.
    #[arg(long)]
    pub stdin: bool,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Case-insensitive text to look for in title, description, tags, and code.
    #[arg(long, short, default_value = "")]
    pub search: String,
    /// Exact language tag to keep.
    #[arg(long, short, default_value = "")]
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
