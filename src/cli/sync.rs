//! Sync command - one reconciliation pass.
//!
//! Resolves every required secret, then persists and regenerates the
//! Caddyfile only when the change gate says something is stale.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::TerminalPrompt;
use crate::core::constants::{CADDYFILE, DOMAIN, ENV_FILE, STATE_DIR};
use crate::core::reconcile::{self, Provenance};
use crate::core::{caddy, env, store};
use crate::error::{DockhandError, Result};

/// Run a reconciliation pass against the current directory.
pub fn execute(no_keyring: bool) -> Result<()> {
    std::fs::create_dir_all(STATE_DIR)?;

    let store = if no_keyring { None } else { store::discover() };
    match &store {
        Some(s) => info!(backend = s.name(), "secure store available"),
        None => info!("secure store unavailable, continuing without"),
    }

    let file_env = env::load(Path::new(ENV_FILE))?;
    let mut prompt = TerminalPrompt;

    let outcome = reconcile::reconcile(store.as_deref(), &file_env, &mut prompt)?;

    for (key, provenance) in &outcome.provenance {
        match provenance {
            Provenance::Generated => output::success(&format!("generated {}", output::key(key))),
            Provenance::Prompted => output::success(&format!("received {}", output::key(key))),
            _ => {}
        }
    }

    let caddyfile = Path::new(CADDYFILE);
    if !reconcile::needs_write(&outcome, caddyfile) {
        output::success("all files up to date");
        return Ok(());
    }

    reconcile::persist(&outcome, store.as_deref(), Path::new(ENV_FILE))?;
    if let Some(s) = &store {
        output::success(&format!("secrets stored in {}", s.name()));
    }
    output::success(&format!("{} written", output::path(ENV_FILE)));

    let domain = outcome
        .env
        .get(DOMAIN)
        .ok_or_else(|| DockhandError::MissingInput(DOMAIN.to_string()))?;
    caddy::write(domain, caddyfile)?;
    output::success(&format!(
        "{} generated for {}",
        output::path(CADDYFILE),
        domain
    ));

    Ok(())
}
