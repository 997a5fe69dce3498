// Literal in-place text substitution for a single file

pub mod document;
pub mod outcome;

pub use document::{count_occurrences, DocumentBuffer};
pub use outcome::{content_digest, PatchOutcome};

use std::path::Path;
use tracing::{debug, info, warn, Level};

use crate::diff::unified_summary;
use crate::error::PatchResult;

/// Replace every exact occurrence of `old_literal` with `new_literal` in the
/// file at `path`, writing the result back in place.
///
/// Zero occurrences is not an error: the unchanged text is written back.
/// An empty `old_literal` matches at every char boundary, like `str::replace`.
/// Nothing is checked between the read and the write, so a concurrent edit
/// to the file in that window is overwritten.
pub fn patch(
    path: impl AsRef<Path>,
    old_literal: &str,
    new_literal: &str,
) -> PatchResult<PatchOutcome> {
    let path = path.as_ref();

    let mut document = DocumentBuffer::load(path)?;
    let original = document.text().to_owned();

    let replacements = document.replace_all(old_literal, new_literal);
    if replacements == 0 {
        warn!(
            "No occurrence of the old literal in {}, content left as is",
            path.display()
        );
    }

    document.store()?;

    if tracing::enabled!(Level::DEBUG) {
        if let Some(summary) = unified_summary(path, &original, document.text()) {
            debug!("Change summary:\n{}", summary);
        }
    }

    let outcome = PatchOutcome::new(path, replacements, &original, document.text());
    info!(
        replacements = outcome.replacements,
        changed = outcome.changed(),
        "Patched {}",
        path.display()
    );
    Ok(outcome)
}
