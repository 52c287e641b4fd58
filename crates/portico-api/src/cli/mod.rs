//! CLI definitions for the `portico` binary.

pub mod chat;
pub mod knowledge;
pub mod submit;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Support services for a personal portfolio site: FAQ assistant and
/// contact-form delivery pipeline.
#[derive(Parser)]
#[command(name = "portico", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON where output is data-shaped.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "3000", env = "PORTICO_PORT")]
        port: u16,

        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1", env = "PORTICO_HOST")]
        host: String,

        /// Emit line-delimited JSON logs (for log collectors).
        #[arg(long)]
        json_logs: bool,
    },

    /// Ask the assistant one question.
    Ask {
        /// The question to answer.
        message: String,

        /// Answer locally without calling the remote endpoint.
        #[arg(long)]
        local: bool,
    },

    /// Interactive chat session with the assistant.
    Chat {
        /// Answer locally without calling the remote endpoint.
        #[arg(long)]
        local: bool,
    },

    /// Send a contact-form submission through the delivery pipeline.
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Optional subject; a default is used when omitted.
        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Print the built-in knowledge base.
    Kb,

    /// Generate shell completions.
    Completions { shell: Shell },
}
