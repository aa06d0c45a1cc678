//! Intent engine errors.

use super::kind::IntentKind;

/// Raised while compiling a pattern bank.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("Invalid pattern for {intent}: {pattern}")]
    InvalidPattern {
        intent: IntentKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Intent {0} listed more than once")]
    DuplicateIntent(IntentKind),

    #[error("Intent {0} has no patterns")]
    EmptyPatterns(IntentKind),
}
