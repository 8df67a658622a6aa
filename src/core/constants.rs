//! Constants used throughout dockhand.
//!
//! Centralizes the fixed key sets, default values, and file names the
//! reconciler operates on.

use crate::core::generate::Rule;

/// Application label that namespaces every secure-store entry.
pub const APP_LABEL: &str = "dockhand";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Reverse-proxy configuration artifact.
pub const CADDYFILE: &str = "Caddyfile";

/// State directory for the Tailscale sidecar.
pub const STATE_DIR: &str = "tailscale-state";

/// Upstream address the reverse proxy points at.
pub const UPSTREAM: &str = "localhost:8080";

/// Required sensitive keys and the rule used to generate each when no
/// source provides a value.
pub const GENERATED_KEYS: &[(&str, Rule)] = &[
    ("POSTGRES_PASSWORD", Rule::Hex { bytes: 32 }),
    ("ENCRYPTION_KEY", Rule::Hex { bytes: 16 }),
    ("AUTH_SECRET", Rule::Base64NoPad { bytes: 32 }),
];

/// Required external keys, prompted for in this order when unresolved.
pub const PROMPTED_KEYS: &[&str] = &["TS_AUTHKEY", "CLOUDFLARE_API_TOKEN", "DOMAIN"];

/// Built-in defaults, the lowest-precedence source.
pub const DEFAULTS: &[(&str, &str)] = &[
    ("POSTGRES_USER", "infisical"),
    ("POSTGRES_DB", "infisical"),
    ("REDIS_URL", "redis://localhost:6379"),
];

/// Derived key names. Recomputed every pass, never read back as input.
pub const SITE_URL: &str = "SITE_URL";
pub const DB_CONNECTION_URI: &str = "DB_CONNECTION_URI";
pub const DOMAIN: &str = "DOMAIN";

/// Keys persisted to the secure store: everything generated or prompted.
pub fn store_keys() -> impl Iterator<Item = &'static str> {
    GENERATED_KEYS
        .iter()
        .map(|(k, _)| *k)
        .chain(PROMPTED_KEYS.iter().copied())
}
