use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "mahal")]
#[command(about = "Browse records and their detail lines from a remote record service")]
#[command(version)]
pub struct Cli {
    /// Print the result of a single request and exit instead of opening the TUI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record service base URL (overrides MAHAL_SERVER_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Request timeout in milliseconds (overrides MAHAL_HTTP_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Print Arabic text as received, for terminals that shape it themselves
    #[arg(long, global = true)]
    pub no_shape: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the first record and its lines
    First,

    /// Show the record after the given one
    Next {
        /// Identifier of the record to move from
        #[arg(long)]
        last_id: String,
    },

    /// Show the record before the given one
    Prev {
        /// Identifier of the record to move from
        #[arg(long)]
        last_id: String,
    },

    /// Show the detail lines for a mah_idd
    Lines {
        #[arg(long)]
        mah_idd: String,
    },
}

impl Cli {
    /// Apply command line overrides on top of the environment configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.http.timeout_ms = timeout_ms;
        }
        if self.no_shape {
            config.shape_text = false;
        }
    }
}
