//! # Actorctl CLI Entry Point
//!
//! The main executable for the `actorctl` tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Installs the tracing subscriber and parses command-line
//!    arguments using [`cli::Cli`].
//! 2. **Connection**: Establishes a connection to the target server via `actorctl_core`.
//! 3. **Execution**: Delegates the request to the [`ActorClient`].
//! 4. **Presentation**: Formats and prints the resulting data or error status to
//!    standard output/error.

mod cli;
mod formatter;

use actorctl_core::client::ActorClient;
use actorctl_core::proto::{ActorsRunningGetRequest, PingRequest};
use clap::Parser;
use cli::{Cli, Commands};
use formatter::{ActorTable, FormattedString, JsonBody};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let url = args.url;

    match args.command {
        Commands::Ping { id, headers } => run_ping(&url, id, headers).await,
        Commands::Actors { json, headers } => run_actors(&url, json, headers).await,
    }
}

async fn connect_or_exit(url: &str) -> ActorClient {
    match ActorClient::connect(url).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_ping(url: &str, id: String, headers: Vec<(String, String)>) {
    let mut client = connect_or_exit(url).await;

    match client.ping(PingRequest { id }, headers).await {
        Ok(response) => println!("{}", FormattedString::from(response)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_actors(url: &str, json: bool, headers: Vec<(String, String)>) {
    let mut client = connect_or_exit(url).await;

    match client
        .actors_running_get(ActorsRunningGetRequest::default(), headers)
        .await
    {
        Ok(response) if json => println!("{}", FormattedString::from(JsonBody(response))),
        Ok(response) => println!("{}", FormattedString::from(ActorTable(response.items))),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}
