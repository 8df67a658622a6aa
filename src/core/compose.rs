//! docker compose detection and invocation.
//!
//! Two variants are recognized: the `docker compose` plugin and the
//! standalone `docker-compose` binary. Neither being present is fatal at
//! startup, before any reconciliation work.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{DockhandError, Result};

/// The detected compose variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compose {
    /// `docker compose` (plugin)
    Plugin,
    /// `docker-compose` (standalone binary)
    Standalone,
}

impl Compose {
    /// Detect which compose variant is available.
    ///
    /// Prefers the `docker compose` plugin, probed with
    /// `docker compose version`; falls back to `docker-compose` on PATH.
    pub fn discover() -> Result<Self> {
        if which::which("docker").is_ok() && plugin_responds() {
            debug!("using docker compose plugin");
            return Ok(Self::Plugin);
        }

        if which::which("docker-compose").is_ok() {
            debug!("using standalone docker-compose");
            return Ok(Self::Standalone);
        }

        Err(DockhandError::ComposeNotFound)
    }

    /// Human-readable name of the variant.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Plugin => "docker compose",
            Self::Standalone => "docker-compose",
        }
    }

    /// Run the compose tool with the given arguments, inheriting stdio.
    ///
    /// Returns the child's exit code; the caller decides whether to
    /// propagate it as the process exit status.
    pub fn run(&self, args: &[String]) -> Result<i32> {
        info!(tool = self.describe(), ?args, "invoking compose");

        let mut cmd = self.command();
        cmd.args(args);

        let status = cmd.status()?;
        Ok(status.code().unwrap_or(1))
    }

    fn command(&self) -> Command {
        match self {
            Self::Plugin => {
                let mut cmd = Command::new("docker");
                cmd.arg("compose");
                cmd
            }
            Self::Standalone => Command::new("docker-compose"),
        }
    }
}

fn plugin_responds() -> bool {
    Command::new("docker")
        .args(["compose", "version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
