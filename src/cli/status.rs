//! Quick status overview command.
//!
//! Read-only: reports what each source can resolve and whether the next
//! sync would write anything. Never prompts, never touches compose beyond
//! detection, and exits zero even when things are missing.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::compose::Compose;
use crate::core::constants::{self, CADDYFILE, ENV_FILE};
use crate::core::{env, store};
use crate::error::Result;

#[derive(Serialize)]
struct Status {
    backend: Option<&'static str>,
    compose: Option<&'static str>,
    env_file: bool,
    env_entries: usize,
    caddyfile: bool,
    missing: Vec<&'static str>,
    up_to_date: bool,
}

/// Show the resolution status for the current directory.
pub fn execute(no_keyring: bool, json: bool) -> Result<()> {
    let store = if no_keyring { None } else { store::discover() };
    let compose = Compose::discover().ok();
    let file_env = env::load(Path::new(ENV_FILE))?;
    let caddyfile = Path::new(CADDYFILE).exists();

    // A required key counts as resolved if the env file or the secure
    // store holds a non-empty value for it.
    let mut missing = Vec::new();
    for key in constants::store_keys() {
        let in_file = file_env.get(key).is_some_and(|v| !v.is_empty());
        let in_store = match &store {
            Some(s) => s.get(key)?.is_some_and(|v| !v.is_empty()),
            None => false,
        };
        if !in_file && !in_store {
            missing.push(key);
        }
    }

    let status = Status {
        backend: store.as_ref().map(|s| s.name()),
        compose: compose.map(|c| c.describe()),
        env_file: Path::new(ENV_FILE).exists(),
        env_entries: file_env.len(),
        caddyfile,
        up_to_date: missing.is_empty() && caddyfile,
        missing,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    output::section("Dockhand Status");
    output::kv(
        "backend",
        status.backend.unwrap_or("unavailable (using .env only)"),
    );
    output::kv("compose", status.compose.unwrap_or("not found"));
    output::kv(
        "env file",
        if status.env_file {
            format!("{} entries", status.env_entries)
        } else {
            "not found".to_string()
        },
    );
    output::kv(
        "caddyfile",
        if status.caddyfile { "present" } else { "missing" },
    );

    if status.up_to_date {
        output::success("all files up to date");
    } else {
        if !status.missing.is_empty() {
            output::warn("unresolved keys:");
            for key in &status.missing {
                println!("  {}", output::key(key));
            }
        }
        output::hint("run: dockhand sync");
    }

    Ok(())
}
