//! Secret value generation.
//!
//! All randomness comes from the OS CSPRNG. The encoding of each class of
//! secret is fixed: hex for keys consumed as hex strings, unpadded standard
//! base64 for the auth secret.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

/// Encoding rule for a generated secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `bytes` random bytes, lowercase hex encoded.
    Hex { bytes: usize },
    /// `bytes` random bytes, standard base64 with trailing `=` stripped.
    Base64NoPad { bytes: usize },
}

/// Generate a fresh secret value under the given rule.
pub fn generate(rule: Rule) -> String {
    match rule {
        Rule::Hex { bytes } => hex::encode(random_bytes(bytes)),
        Rule::Base64NoPad { bytes } => {
            let encoded = STANDARD.encode(random_bytes(bytes));
            encoded.trim_end_matches('=').to_string()
        }
    }
}

fn random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    OsRng.fill_bytes(&mut buf);
    buf
}
