//! Dockhand - secret provisioning for a self-hosted Infisical stack.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dockhand::cli::output;
use dockhand::cli::{execute, Cli};
use dockhand::error::DockhandError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DOCKHAND_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dockhand=debug")
        } else {
            EnvFilter::new("dockhand=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            DockhandError::ComposeNotFound => {
                Some("install docker with the compose plugin, or docker-compose")
            }
            DockhandError::MissingInput(_) => {
                Some("set the value in .env, or answer the prompt")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
