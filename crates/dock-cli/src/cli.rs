use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use dock_core::VERSION;

/// Launch Dock - a personal start page with password-protected notes
#[derive(Parser)]
#[command(name = "dock")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file
    #[arg(short, long, global = true, env = "DOCK_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an empty data file
    Init,

    /// Manage shortcut tabs
    #[command(subcommand)]
    Tab(TabCommand),

    /// Manage shortcuts inside a tab
    #[command(subcommand)]
    Shortcut(ShortcutCommand),

    /// Manage item categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage items inside a category
    #[command(subcommand)]
    Item(ItemCommand),

    /// Read and write item notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Export all dashboard data to a timestamped JSON file
    Export(ExportArgs),

    /// Replace dashboard data from an exported JSON file
    Import(ImportArgs),

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments shared by `list` commands
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Reorder arguments (zero-based positions; out-of-range values are clamped)
#[derive(Args)]
pub struct MoveArgs {
    /// Current position
    #[arg(value_name = "FROM")]
    pub from: usize,

    /// New position
    #[arg(value_name = "TO")]
    pub to: usize,
}

#[derive(Subcommand)]
pub enum TabCommand {
    /// Add a tab
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Rename a tab
    Rename {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Remove a tab and its shortcuts
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Move a tab to a new position
    Move(MoveArgs),
    /// List tabs and their shortcuts
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum ShortcutCommand {
    /// Add a shortcut to a tab
    Add {
        #[arg(value_name = "TAB_ID")]
        tab_id: String,
        #[arg(value_name = "URL")]
        url: String,
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Remove a shortcut by URL
    Rm {
        #[arg(value_name = "TAB_ID")]
        tab_id: String,
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Move a shortcut within its tab
    Move {
        #[arg(value_name = "TAB_ID")]
        tab_id: String,
        #[command(flatten)]
        positions: MoveArgs,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Add a category
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Rename a category
    Rename {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Remove a category and its items
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Move a category to a new position
    Move(MoveArgs),
    /// List categories and their items
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum ItemCommand {
    /// Add an item to a category
    Add {
        #[arg(value_name = "CAT_ID")]
        category_id: String,
        #[arg(value_name = "NAME")]
        name: String,
        /// Link to open (invalid URLs are stored empty)
        #[arg(long, default_value = "")]
        link: String,
    },
    /// Change an item's name and link
    Edit {
        #[arg(value_name = "CAT_ID")]
        category_id: String,
        #[arg(value_name = "ITEM_ID")]
        item_id: String,
        /// New name (defaults to the current one)
        #[arg(long)]
        name: Option<String>,
        /// New link (defaults to the current one)
        #[arg(long)]
        link: Option<String>,
    },
    /// Remove an item
    Rm {
        #[arg(value_name = "CAT_ID")]
        category_id: String,
        #[arg(value_name = "ITEM_ID")]
        item_id: String,
    },
    /// Move an item within its category
    Move {
        #[arg(value_name = "CAT_ID")]
        category_id: String,
        #[command(flatten)]
        positions: MoveArgs,
    },
}

/// Item address shared by note commands
#[derive(Args)]
pub struct NoteTarget {
    #[arg(value_name = "CAT_ID")]
    pub category_id: String,
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Write an item's note
    Set {
        #[command(flatten)]
        target: NoteTarget,
        /// Note text (read from stdin when omitted)
        #[arg(long)]
        body: Option<String>,
        /// Encrypt the note under the master password (an encrypted note
        /// always stays encrypted)
        #[arg(long)]
        encrypt: bool,
    },
    /// Print an item's note
    Show {
        #[command(flatten)]
        target: NoteTarget,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encrypt a plain note in place
    Encrypt {
        #[command(flatten)]
        target: NoteTarget,
    },
    /// Decrypt an encrypted note in place
    Decrypt {
        #[command(flatten)]
        target: NoteTarget,
    },
    /// Remove an item's note
    Clear {
        #[command(flatten)]
        target: NoteTarget,
        /// Discard an encrypted note without its password
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the export into (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Exported JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_note_set() {
        let cli = Cli::try_parse_from([
            "dock", "note", "set", "cat-1", "item-1", "--body", "hi", "--encrypt",
        ])
        .expect("parse");
        match cli.command {
            Commands::Note(NoteCommand::Set {
                target,
                body,
                encrypt,
            }) => {
                assert_eq!(target.category_id, "cat-1");
                assert_eq!(target.item_id, "item-1");
                assert_eq!(body.as_deref(), Some("hi"));
                assert!(encrypt);
            }
            _ => panic!("expected note set"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["dock", "-vv", "config"]).expect("parse");
        assert_eq!(cli.verbose, 2);
    }
}
