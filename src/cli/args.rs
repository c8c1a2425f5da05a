//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report unused StyleSheet entries
//! - `init`: Write a default `.sheetcheckrc.json`
//! - `serve`: Start MCP server for AI integration

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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Resolve style sheets imported from other modules
    #[arg(long)]
    pub enable_imports_check: bool,

    /// Additional style sheet factory object, e.g. `OtherStyleSheet`.
    /// Can be specified multiple times.
    #[arg(long = "style-sheet-object-name", value_name = "NAME")]
    pub style_sheet_object_names: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for unused StyleSheet entries
    Check(CheckCommand),
    /// Initialize a new .sheetcheckrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
