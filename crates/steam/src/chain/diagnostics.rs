//! Attempt tracking for source chain diagnostics.

/// Why a source was skipped without being called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Source needs a Web API key and none is configured.
    MissingApiKey,
}

/// Outcome of one source within a chain run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    Skipped(SkipReason),
    /// Source answered but had nothing for this player and game.
    Empty,
    Failed(String),
    Success(usize),
}

/// Record of a single source attempt.
#[derive(Clone, Debug)]
pub struct SourceAttempt {
    pub source_id: &'static str,
    pub outcome: AttemptOutcome,
}

/// Ordered record of what every source did during one fetch.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<SourceAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, source_id: &'static str, outcome: AttemptOutcome) {
        self.attempts.push(SourceAttempt { source_id, outcome });
    }

    /// Summary for logging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| match &a.outcome {
                AttemptOutcome::Success(count) => format!("{}: SUCCESS ({})", a.source_id, count),
                AttemptOutcome::Empty => format!("{}: EMPTY", a.source_id),
                AttemptOutcome::Skipped(reason) => {
                    format!("{}: SKIPPED ({:?})", a.source_id, reason)
                }
                AttemptOutcome::Failed(err) => format!("{}: ERROR ({})", a.source_id, err),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn has_success(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| matches!(a.outcome, AttemptOutcome::Success(_)))
    }

    /// Ids of the sources that were actually called, in order.
    pub fn called_sources(&self) -> Vec<&'static str> {
        self.attempts
            .iter()
            .filter(|a| !matches!(a.outcome, AttemptOutcome::Skipped(_)))
            .map(|a| a.source_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = FetchDiagnostics::new();
        diag.record("PLAYER_ACHIEVEMENTS", AttemptOutcome::Failed("Timeout".to_string()));
        diag.record("USER_STATS", AttemptOutcome::Empty);
        diag.record("COMMUNITY_STATS", AttemptOutcome::Success(12));

        assert_eq!(
            diag.summary(),
            "PLAYER_ACHIEVEMENTS: ERROR (Timeout) -> USER_STATS: EMPTY -> COMMUNITY_STATS: SUCCESS (12)"
        );
        assert!(diag.has_success());
    }

    #[test]
    fn test_called_sources_excludes_skips() {
        let mut diag = FetchDiagnostics::new();
        diag.record("PLAYER_ACHIEVEMENTS", AttemptOutcome::Skipped(SkipReason::MissingApiKey));
        diag.record("USER_STATS", AttemptOutcome::Skipped(SkipReason::MissingApiKey));
        diag.record("COMMUNITY_STATS", AttemptOutcome::Empty);

        assert_eq!(diag.called_sources(), vec!["COMMUNITY_STATS"]);
        assert!(!diag.has_success());
    }
}
