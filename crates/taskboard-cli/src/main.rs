//! Taskboard CLI Application
//!
//! Command-line interface for breaking project ideas into role-based tasks
//! on a kanban board.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TaskboardMcpServer};
use renderer::TerminalRenderer;
use taskboard_core::{GeneratorConfig, HttpTaskGenerator};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        endpoint,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let config = GeneratorConfig::builder()
        .with_endpoint(endpoint)
        .with_timeout(timeout.map(Duration::from_secs))
        .build()
        .context("Invalid task generator settings")?;
    info!("Task generator endpoint: {}", config.endpoint);

    let generator =
        HttpTaskGenerator::new(config).context("Failed to initialize task generator client")?;
    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Generate(args)) => Cli::new(generator, renderer).generate_once(args).await,
        Some(Serve) => {
            info!("Starting Taskboard MCP server");
            run_stdio_server(TaskboardMcpServer::new(generator))
                .await
                .context("MCP server failed")
        }
        Some(Session) | None => {
            Cli::new(generator, renderer)
                .run_session(std::io::stdin().lock())
                .await
        }
    }
}
