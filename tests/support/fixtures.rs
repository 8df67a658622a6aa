//! Test fixtures and constants.

/// Stdin feeding all three prompts in order
/// (TS_AUTHKEY, CLOUDFLARE_API_TOKEN, DOMAIN).
pub const PROMPT_INPUT: &str = "tskey-abc123\ncf-token-456\nexample.com\n";

/// A .env with every required key already resolved, so a run neither
/// generates nor prompts.
pub const SEEDED_ENV: &str = r#"AUTH_SECRET="c2VlZGVkLWF1dGgtc2VjcmV0"
CLOUDFLARE_API_TOKEN="cf-token-456"
DOMAIN="example.com"
ENCRYPTION_KEY="00112233445566778899aabbccddeeff"
POSTGRES_PASSWORD="seededpassword"
TS_AUTHKEY="tskey-abc123"
"#;

/// Required keys the engine must resolve one way or another.
pub const REQUIRED_KEYS: &[&str] = &[
    "POSTGRES_PASSWORD",
    "ENCRYPTION_KEY",
    "AUTH_SECRET",
    "TS_AUTHKEY",
    "CLOUDFLARE_API_TOKEN",
    "DOMAIN",
];
