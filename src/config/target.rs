use std::path::PathBuf;

use crate::error::PatchResult;
use crate::patch::{patch, PatchOutcome};

/// Insights panel component holding the feedback quote, relative to the working directory
pub const TARGET_PATH: &str =
    "packages/ui/src/components/VideoAnalysis/FeedbackPanel/VideoAnalysisInsightsV2.tsx";

pub const OLD_QUOTE: &str = "\"Your energy really connects with the audience. Let's refine your pacing so your impact is even stronger.\"";

pub const NEW_QUOTE: &str = "\"Look, you've got energy, I'll give you that. But your pacing? It's like watching a sloth try to deliver a TED Talk. Let's fix that disaster before your next presentation.\"";

/// One file and the literal pair to substitute in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTarget {
    pub path: PathBuf,
    pub old_literal: String,
    pub new_literal: String,
}

impl PatchTarget {
    pub fn new(
        path: impl Into<PathBuf>,
        old_literal: impl Into<String>,
        new_literal: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            old_literal: old_literal.into(),
            new_literal: new_literal.into(),
        }
    }

    /// The quote rewrite this binary exists to perform.
    ///
    /// The path is left relative, so it resolves against whatever directory
    /// the process is started from.
    pub fn builtin() -> Self {
        Self::new(TARGET_PATH, OLD_QUOTE, NEW_QUOTE)
    }

    /// Run the substitution against the file on disk
    pub fn apply(&self) -> PatchResult<PatchOutcome> {
        patch(&self.path, &self.old_literal, &self.new_literal)
    }
}

impl Default for PatchTarget {
    fn default() -> Self {
        Self::builtin()
    }
}
