use std::collections::HashMap;

use crate::curriculum::SkillGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum UnlockState {
    Locked,
    Unlocked,
    Completed(u32),
}

impl UnlockState {
    /// A node is reachable (clickable for navigation) exactly when it is
    /// not locked.
    pub(in crate::app) fn is_reachable(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

#[derive(Clone, Debug)]
pub(in crate::app) struct UnlockRecord {
    pub(in crate::app) state: UnlockState,
    pub(in crate::app) last_score: Option<u32>,
    pub(in crate::app) updated: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::app) enum AttemptOutcome {
    /// Score met the pass threshold; lists successors that moved
    /// Locked -> Unlocked as a result (may be empty on a repeat pass).
    Passed { newly_unlocked: Vec<String> },
    /// Score fell short; no successor changed, the theory review should open.
    RemediationRequired,
    /// Contract violation (locked or unknown node); nothing changed.
    Rejected,
}

/// Per-node availability, driven by quiz completion events. Unlocking is
/// monotonic: no transition ever returns a node to `Locked`.
pub(in crate::app) struct UnlockBoard {
    records: HashMap<String, UnlockRecord>,
    pass_threshold: u32,
}

impl UnlockBoard {
    pub(in crate::app) fn new(graph: &SkillGraph) -> Self {
        let records = graph
            .nodes()
            .iter()
            .map(|node| {
                let state = if node.entry {
                    UnlockState::Unlocked
                } else {
                    UnlockState::Locked
                };
                (
                    node.id.clone(),
                    UnlockRecord {
                        state,
                        last_score: None,
                        updated: node.updated.clone(),
                    },
                )
            })
            .collect();

        Self {
            records,
            pass_threshold: graph.pass_threshold,
        }
    }

    pub(in crate::app) fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    pub(in crate::app) fn state(&self, id: &str) -> UnlockState {
        self.records
            .get(id)
            .map(|record| record.state)
            .unwrap_or(UnlockState::Locked)
    }

    pub(in crate::app) fn record(&self, id: &str) -> Option<&UnlockRecord> {
        self.records.get(id)
    }

    pub(in crate::app) fn is_reachable(&self, id: &str) -> bool {
        self.state(id).is_reachable()
    }

    pub(in crate::app) fn reachable_count(&self) -> usize {
        self.records
            .values()
            .filter(|record| record.state.is_reachable())
            .count()
    }

    /// Apply a completed quiz attempt. Valid on `Unlocked` and `Completed`
    /// nodes (retries are allowed, and a later passing retry still unlocks
    /// successors). Calling this on a locked node is a programming error in
    /// the caller; it is guarded as a no-op rather than surfaced to the UI.
    pub(in crate::app) fn record_attempt(
        &mut self,
        graph: &SkillGraph,
        id: &str,
        score: u32,
    ) -> AttemptOutcome {
        let score = score.min(100);

        match self.records.get_mut(id) {
            Some(record) if record.state.is_reachable() => {
                record.state = UnlockState::Completed(score);
                record.last_score = Some(score);
            }
            _ => {
                log::warn!("attempt recorded against locked or unknown node {id:?}");
                return AttemptOutcome::Rejected;
            }
        }

        if score < self.pass_threshold {
            return AttemptOutcome::RemediationRequired;
        }

        let mut newly_unlocked = Vec::new();
        for successor in graph.successors(id) {
            if let Some(record) = self.records.get_mut(&successor.id)
                && record.state == UnlockState::Locked
            {
                record.state = UnlockState::Unlocked;
                newly_unlocked.push(successor.id.clone());
            }
        }

        AttemptOutcome::Passed { newly_unlocked }
    }
}
