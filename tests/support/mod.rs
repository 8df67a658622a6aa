//! Test support utilities for dockhand integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::collections::BTreeMap;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir, home dir, and a bin dir that holds a
/// fake `docker-compose` — PATH is restricted to that bin dir so the real
/// docker never runs. No process-global state is mutated; child processes
/// use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Temporary bin directory on PATH, containing the fake compose
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment with a fake compose on PATH.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");

        let t = Self { dir, home, bin };
        t.install_fake_compose();
        t
    }

    /// Create a test environment with a fully seeded .env, so runs never
    /// prompt and never generate.
    pub fn seeded() -> Self {
        let t = Self::new();
        t.write_env(fixtures::SEEDED_ENV);
        t
    }

    /// Install a fake `docker-compose` that logs its argv to `compose.log`
    /// in the project dir and exits with `DOCKHAND_TEST_COMPOSE_EXIT` (or 0).
    #[cfg(unix)]
    fn install_fake_compose(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = "#!/bin/sh\necho \"$@\" >> compose.log\nexit ${DOCKHAND_TEST_COMPOSE_EXIT:-0}\n";
        let path = self.bin.path().join("docker-compose");
        std::fs::write(&path, script).expect("failed to write fake compose");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake compose");
    }

    #[cfg(not(unix))]
    fn install_fake_compose(&self) {}

    /// Write .env in the project dir.
    pub fn write_env(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".env"), contents).expect("failed to write .env");
    }

    /// Read .env from the project dir.
    pub fn env_text(&self) -> String {
        std::fs::read_to_string(self.dir.path().join(".env")).expect("failed to read .env")
    }

    /// Read and parse .env into a mapping.
    pub fn env_map(&self) -> BTreeMap<String, String> {
        dockhand::core::env::parse(&self.env_text())
    }

    /// Whether a file exists in the project dir.
    pub fn has_file(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the project dir.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }

    /// Argv lines the fake compose received, one invocation per line.
    pub fn compose_log(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("compose.log")).unwrap_or_default()
    }
}
