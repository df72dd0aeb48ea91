use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Break a project idea into role-based tasks and track them on a board
///
/// A remote task generator selects the roles a project needs and writes
/// tasks for each of them. The tasks land in the "To Do" column of a
/// four-column board (To Do, In Progress, Code Review, Done) where they can
/// be moved, filtered and exported. The board lives in memory for the
/// duration of one session.
#[derive(Parser)]
#[command(version, about, name = "tb")]
pub struct Args {
    /// URL of the task generator. Defaults to
    /// http://localhost:8000/generate-tasks
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Seconds to wait for the task generator before giving up
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Taskboard CLI
///
/// - `generate`: one-shot breakdown of a single description
/// - `session`: interactive board (the default)
/// - `serve`: MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a board for one project description and print it
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Start an interactive board session
    #[command(alias = "s")]
    Session,
    /// Start the MCP server
    Serve,
}
