//! Deutsch Daily MCP Server - Main Entry Point
//!
//! This is the main entry point for the Deutsch Daily MCP server application.
//! The actual implementation is in the `deutsch_daily` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use deutsch_daily::DeutschDailyHandler;
use deutsch_daily::telemetry;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::info;

/// Deutsch Daily MCP Server - daily German vocabulary via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the progress file
    file: String,

    /// Vocabulary JSON file to use instead of the bundled word list
    #[arg(long)]
    words: Option<PathBuf>,

    /// Grammar topic JSON file to use instead of the bundled topics
    #[arg(long)]
    grammar: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    telemetry::init_tracing();

    let handler =
        DeutschDailyHandler::new(&args.file, args.words.as_deref(), args.grammar.as_deref())?;
    info!(file = %args.file, "Serving on stdio");
    serve_stdio(handler).await?;
    Ok(())
}
