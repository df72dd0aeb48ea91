//! Command-line front end: one-shot generation and the interactive session
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so the handlers never see clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers → Display → Renderer
//! ```
//!
//! The interactive session parses each input line with a multicall clap
//! parser, so every session command gets the same help and error messages as
//! the top-level commands.

use std::{io::BufRead, ops::ControlFlow};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use taskboard_core::{
    display::{Board, OperationStatus},
    handlers,
    params::{ExportBoard, GenerateProject, MoveTask, SetFilter},
    session::BoardSession,
    HttpTaskGenerator,
};

use crate::renderer::TerminalRenderer;

const SESSION_INTRO: &str = "Taskboard session. Type `help` for commands, `quit` to leave.\n";

/// Generate a board for one project description
#[derive(Args)]
pub struct GenerateArgs {
    /// Project description; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// Also write the board as JSON. Without a value the file goes to
    /// $XDG_DATA_HOME/taskboard/exports/ under a name derived from the
    /// description
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    pub export: Option<String>,
}

impl From<&GenerateArgs> for GenerateProject {
    fn from(val: &GenerateArgs) -> Self {
        GenerateProject {
            description: val.description.join(" "),
        }
    }
}

/// One line of input in the interactive session
#[derive(Parser)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Generate tasks for a project description, replacing the board
    #[command(alias = "g")]
    Generate(DescriptionArgs),
    /// Show the board
    #[command(alias = "ls")]
    Show,
    /// Move a task to another column
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Show only tasks whose title, description or role contains the text.
    /// Without text the search is cleared
    Search(SearchArgs),
    /// Show only the given comma-separated roles. Without roles all are shown
    Roles(RolesArgs),
    /// Remove the search text and role filter
    Clear,
    /// Write the board as JSON
    Export(ExportArgs),
    /// Start over with an empty board
    Reset,
    /// Leave the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

#[derive(Args)]
pub struct DescriptionArgs {
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub description: Vec<String>,
}

impl From<DescriptionArgs> for GenerateProject {
    fn from(val: DescriptionArgs) -> Self {
        GenerateProject {
            description: val.description.join(" "),
        }
    }
}

#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "ID of the task to move, as shown on the board")]
    pub task_id: String,
    #[arg(help = "Target column (todo, inProgress, codeReview, done)")]
    pub to: String,
}

impl From<MoveArgs> for MoveTask {
    fn from(val: MoveArgs) -> Self {
        MoveTask {
            task_id: val.task_id,
            to: val.to,
        }
    }
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl From<SearchArgs> for SetFilter {
    fn from(val: SearchArgs) -> Self {
        SetFilter {
            search: Some(val.text.join(" ")),
            roles: None,
        }
    }
}

#[derive(Args)]
pub struct RolesArgs {
    /// Role names separated by commas; names may contain spaces
    #[arg(num_args = 0.., trailing_var_arg = true)]
    pub roles: Vec<String>,
}

impl From<RolesArgs> for SetFilter {
    fn from(val: RolesArgs) -> Self {
        let joined = val.roles.join(" ");
        SetFilter {
            search: None,
            roles: Some(
                joined
                    .split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "Destination file; defaults to the XDG data directory")]
    pub path: Option<String>,
}

impl From<ExportArgs> for ExportBoard {
    fn from(val: ExportArgs) -> Self {
        ExportBoard { path: val.path }
    }
}

/// Drives one board session against the task generator
pub struct Cli {
    session: BoardSession,
    generator: HttpTaskGenerator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(generator: HttpTaskGenerator, renderer: TerminalRenderer) -> Self {
        Self {
            session: BoardSession::new(),
            generator,
            renderer,
        }
    }

    /// Generate a single board, print it and optionally export it
    pub async fn generate_once(mut self, args: GenerateArgs) -> Result<()> {
        let result = handlers::handle_generate(&mut self.session, &self.generator, &(&args).into())
            .await
            .context("Failed to generate tasks")?;
        self.renderer
            .status(&OperationStatus::success(result.to_string().trim_end()))?;
        self.renderer.render(&Board(self.session.state()).to_string())?;

        if let Some(path) = args.export {
            let exported = handlers::handle_export(&self.session, &ExportBoard { path: Some(path) })
                .context("Failed to export board")?;
            self.renderer
                .status(&OperationStatus::success(exported.to_string().trim_end()))?;
        }
        Ok(())
    }

    /// Read commands line by line until `quit` or end of input
    pub async fn run_session<R: BufRead>(mut self, input: R) -> Result<()> {
        self.renderer.render(SESSION_INTRO)?;
        self.renderer.prompt()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.execute(&line).await {
                Ok(ControlFlow::Break(())) => break,
                Ok(ControlFlow::Continue(())) => {}
                Err(e) => self.renderer.status(&OperationStatus::failure(format!("{e:#}")))?,
            }
            self.renderer.prompt()?;
        }
        Ok(())
    }

    async fn execute(&mut self, line: &str) -> Result<ControlFlow<()>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        let command = match SessionLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Help requests and usage errors both arrive here
                self.renderer.render(&format!("{}\n", e.render()))?;
                return Ok(ControlFlow::Continue(()));
            }
        };
        debug!("session command: {}", words[0]);

        match command {
            SessionCommand::Generate(args) => {
                let result =
                    handlers::handle_generate(&mut self.session, &self.generator, &args.into())
                        .await
                        .context("Failed to generate tasks")?;
                self.renderer
                    .status(&OperationStatus::success(result.to_string().trim_end()))?;
                self.show()?;
            }
            SessionCommand::Show => self.show()?,
            SessionCommand::Move(args) => {
                let outcome = handlers::handle_move_task(&mut self.session, &args.into())?;
                self.renderer
                    .status(&OperationStatus::success(outcome.to_string().trim_end()))?;
            }
            SessionCommand::Search(args) => self.filter(args.into())?,
            SessionCommand::Roles(args) => self.filter(args.into())?,
            SessionCommand::Clear => self.filter(SetFilter {
                search: Some(String::new()),
                roles: Some(Vec::new()),
            })?,
            SessionCommand::Export(args) => {
                let exported = handlers::handle_export(&self.session, &args.into())?;
                self.renderer
                    .status(&OperationStatus::success(exported.to_string().trim_end()))?;
            }
            SessionCommand::Reset => {
                handlers::handle_reset(&mut self.session);
                self.renderer.status(&OperationStatus::success("Board reset"))?;
            }
            SessionCommand::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn filter(&mut self, params: SetFilter) -> Result<()> {
        let filter = handlers::handle_set_filter(&mut self.session, &params);
        self.renderer
            .status(&OperationStatus::success(format!("Showing {filter}")))?;
        self.show()
    }

    fn show(&self) -> Result<()> {
        self.renderer.render(&Board(self.session.state()).to_string())
    }
}
