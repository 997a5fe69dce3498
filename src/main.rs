use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::{debug, info};

use quote_patcher::config::{PatchTarget, CONFIRMATION_MESSAGE};

fn main() -> Result<()> {
    // Colours only when a human is watching stderr
    quote_patcher::init_with_logger(std::io::stderr().is_terminal());

    // Log version and environment information
    info!(
        "Starting quote-patcher v{} on {}",
        quote_patcher::version(),
        std::env::consts::OS
    );

    // The target path is relative, so it resolves against the working directory
    let target = PatchTarget::builtin();
    info!("Patching {}", target.path.display());

    // Any open/read/decode/write failure ends the run with a non-zero status
    let outcome = target
        .apply()
        .with_context(|| format!("Failed to patch {}", target.path.display()))?;

    // The report is diagnostic only; failing to render it must not fail the run
    match outcome.to_json() {
        Ok(report) => debug!("Patch report: {}", report),
        Err(e) => debug!("Could not render patch report: {}", e),
    }

    // stdout carries exactly this line, everything else goes to stderr
    println!("{}", CONFIRMATION_MESSAGE);

    Ok(())
}
