//! Source chain orchestrating player-state sources.

mod diagnostics;
mod source_chain;

pub use diagnostics::{AttemptOutcome, FetchDiagnostics, SkipReason, SourceAttempt};
pub use source_chain::SourceChain;
