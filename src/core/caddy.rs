//! Caddyfile emitter.
//!
//! Renders the reverse-proxy block for the stack: a host match on the
//! domain, a proxy to the fixed local upstream, and a Cloudflare
//! DNS-challenge TLS block. The API token is referenced as a Caddy
//! environment placeholder; the secret value never appears in the file.

use std::path::Path;

use tracing::info;

use crate::core::constants::UPSTREAM;
use crate::error::Result;

/// Render the Caddyfile contents for a domain.
pub fn render(domain: &str) -> String {
    format!(
        "{domain} {{\n    reverse_proxy {upstream}\n\n    tls {{\n        dns cloudflare {{env.CLOUDFLARE_API_TOKEN}}\n    }}\n}}\n",
        domain = domain,
        upstream = UPSTREAM,
    )
}

/// Overwrite the artifact file in full. Never a merge or patch.
pub fn write(domain: &str, path: &Path) -> Result<()> {
    std::fs::write(path, render(domain))?;
    info!(domain, path = %path.display(), "caddyfile written");
    Ok(())
}
