//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A secret key name (e.g., POSTGRES_PASSWORD, DOMAIN).
///
/// Must be a valid environment variable name.
pub type SecretKey = String;

/// A secret value. Opaque text; encoding rules apply only at generation time.
pub type SecretValue = String;

/// The flat key/value mapping built up during a reconciliation pass.
///
/// BTreeMap so serialization is deterministic (sorted by key).
pub type Env = BTreeMap<SecretKey, SecretValue>;
