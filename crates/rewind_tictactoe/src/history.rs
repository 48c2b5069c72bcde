//! Append-only move history with redo truncation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Board, Coordinate};

/// One recorded snapshot: the board after a move and where that move went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board snapshot. Never mutated once recorded.
    #[getter(copy)]
    board: Board,
    /// Coordinate of the move that produced this snapshot; `None` for game start.
    #[getter(copy)]
    coordinate: Option<Coordinate>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    pub(crate) fn after_move(board: Board, coordinate: Coordinate) -> Self {
        Self {
            board,
            coordinate: Some(coordinate),
        }
    }
}

/// Ordered board snapshots from game start.
///
/// Entry 0 is always the empty start board. New entries are appended after
/// dropping any redo tail beyond the step being played from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the start entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries, including the start entry. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the start entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Discards every entry after `step`, then appends `entry`.
    ///
    /// Returns the step of the appended entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub(crate) fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let keep = (step + 1).min(self.entries.len());
        let dropped = self.entries.len() - keep;
        if dropped > 0 {
            debug!(dropped, "Discarding redo tail");
        }
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
