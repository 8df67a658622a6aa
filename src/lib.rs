//! Dockhand - secret provisioning for a self-hosted Infisical stack.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── sync          # Reconciliation pass driver
//! │   ├── status        # Resolution overview
//! │   ├── lifecycle     # up / down / compose passthrough
//! │   ├── prompt        # Interactive input collaborator
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # .env codec
//!     ├── generate      # CSPRNG secret generation rules
//!     ├── reconcile     # Precedence merge + change gate
//!     ├── derive        # Values computed from the resolved set
//!     ├── caddy         # Caddyfile emitter
//!     ├── compose       # docker compose detection and invocation
//!     └── store/        # Secure store backends
//!         ├── mod       # SecureStore trait + discovery
//!         ├── keychain  # macOS Keychain implementation
//!         └── keyutils  # Linux kernel keyring implementation
//! ```
//!
//! # Features
//!
//! - Defaults < secure store < .env precedence with per-key provenance
//! - CSPRNG generation for database, encryption, and auth secrets
//! - Idempotent runs: nothing rewritten unless something actually changed
//! - Caddyfile rendering that references credentials indirectly
//! - Thin docker compose wrapper with verbatim passthrough

pub mod cli;
pub mod core;
pub mod error;
