//! Command-line interface.

pub mod completions;
pub mod lifecycle;
pub mod output;
pub mod prompt;
pub mod status;
pub mod sync;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::core::compose::Compose;
use crate::error::Result;

/// Provision secrets and TLS proxy config for a self-hosted Infisical stack.
#[derive(Parser)]
#[command(
    name = "dockhand",
    about = "Provision secrets and TLS proxy config for a self-hosted Infisical stack",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the OS secure store and rely on .env alone
    #[arg(long, global = true, env = "DOCKHAND_NO_KEYRING")]
    pub no_keyring: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reconcile secrets and regenerate .env / Caddyfile if stale
    Sync,

    /// Reconcile, then bring the stack up (compose up -d)
    Up,

    /// Reconcile, then tear the stack down (compose down)
    Down,

    /// Show what's resolved, what's missing, and whether files are stale
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Anything else is forwarded verbatim to docker compose
    #[command(external_subcommand)]
    Compose(Vec<String>),
}

/// Execute the parsed command line.
///
/// Compose detection is fatal before any reconciliation work for every
/// path that can reach compose; `status` and `completions` never do.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Completions { shell }) => completions::execute(shell),
        Some(Command::Status { json }) => status::execute(cli.no_keyring, json),
        command => {
            let compose = Compose::discover()?;
            sync::execute(cli.no_keyring)?;

            match command {
                None | Some(Command::Sync) => Ok(()),
                Some(Command::Up) => lifecycle::execute(&compose, &["up", "-d"]),
                Some(Command::Down) => lifecycle::execute(&compose, &["down"]),
                Some(Command::Compose(args)) => lifecycle::forward(&compose, &args),
                // Handled by the outer match arms
                Some(Command::Status { .. }) | Some(Command::Completions { .. }) => {
                    unreachable!()
                }
            }
        }
    }
}
