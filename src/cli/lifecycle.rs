//! Stack lifecycle commands - up, down, and compose passthrough.

use crate::core::compose::Compose;
use crate::error::Result;

/// Run a fixed compose verb (`up -d`, `down`).
pub fn execute(compose: &Compose, args: &[&str]) -> Result<()> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    forward(compose, &args)
}

/// Forward arguments verbatim to the compose tool.
///
/// A non-zero child exit becomes this process's own exit status.
pub fn forward(compose: &Compose, args: &[String]) -> Result<()> {
    let code = compose.run(args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
