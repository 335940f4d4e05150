// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Path to the notes file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute; opens the interactive UI when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse and edit notes in the terminal UI
    Ui,

    /// List notes as "index: title (category)"
    List,

    /// Show a single note
    Show {
        /// Position of the note in the list
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Output the stored JSON record instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a note
    Add {
        /// Note title (at most 50 characters)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Category label
        #[arg(short = 'k', long, value_name = "CATEGORY", default_value = "Misc")]
        category: String,

        /// Note text
        #[arg(short = 't', long, value_name = "TEXT", default_value = "")]
        content: String,
    },

    /// Edit a note; omitted fields keep their value
    Edit {
        /// Position of the note in the list
        #[arg(value_name = "INDEX")]
        index: usize,

        /// New title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// New category label
        #[arg(short = 'k', long, value_name = "CATEGORY")]
        category: Option<String>,

        /// New note text
        #[arg(short = 't', long, value_name = "TEXT")]
        content: Option<String>,
    },

    /// Remove a note
    Remove {
        /// Position of the note in the list
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// List the available categories
    Categories,

    /// Show version and build information
    About,
}
