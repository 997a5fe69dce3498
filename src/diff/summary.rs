use similar::TextDiff;
use std::path::Path;

/// Lines of unchanged context shown around each hunk
const CONTEXT_LINES: usize = 3;

/// Render a unified diff of a rewrite, or `None` when nothing changed
pub fn unified_summary(path: &Path, before: &str, after: &str) -> Option<String> {
    if before == after {
        return None;
    }

    let label = path.display().to_string();
    let diff = TextDiff::from_lines(before, after);
    let rendered = diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string();

    Some(rendered)
}
