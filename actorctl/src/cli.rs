//! # CLI
//!
//! This module defines the command-line interface of `actorctl` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring headers are `key:value`);
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "actorctl", version, about = "CLI for the easyharun actor service")]
pub struct Cli {
    /// The server URL to connect to (e.g. http://localhost:50051)
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the actor service is alive
    ///
    /// Sends a ping carrying an identifier and prints the identifier the server
    /// answers with.
    Ping {
        /// Identifier to send with the ping
        #[arg(long, default_value = "actorctl")]
        id: String,

        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// List the actors currently running on the server
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// actorctl http://localhost:50051 actors
    /// actorctl http://localhost:50051 actors --json
    /// ```
    Actors {
        /// Print the raw response as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}
