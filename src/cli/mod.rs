//! CLI module for the Event Registrar API
//!
//! A single `serve` subcommand runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Event Registrar - backend for the event registration flow
#[derive(Parser)]
#[command(name = "event-registrar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
