use serde::{Deserialize, Serialize};

use crate::*;

/// Complete copy of the engine plus the session score, taken once at round
/// start and after every completed move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) engine: PlayEngine,
    pub(crate) score: Score,
}

/// Append-only undo stack. The bottom entry is the round's initial state and
/// can never be undone past.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    pub(crate) fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Discards the most recent entry and yields the one beneath it.
    pub(crate) fn undo(&mut self) -> Result<Snapshot> {
        if self.entries.len() < 2 {
            return Err(GameError::EmptyHistory);
        }
        self.entries.pop();
        match self.entries.last() {
            Some(snapshot) => Ok(snapshot.clone()),
            None => Err(GameError::EmptyHistory),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
