//! Reversible edit history
//!
//! Every topology mutation is recorded as a `Command` holding the route key
//! and the attribute values needed to re-apply it (`after`) and to invert it
//! (`before`). Undo and redo move commands between two stacks and restore
//! state through the store directly, so restoring never records anything.

use std::fmt;

use serde::Serialize;

use crate::error::{EdgeError, HistoryError};
use crate::graph::store::EdgeStore;
use crate::graph::types::{EdgeAttrs, RouteKey};

/// Kind tag of a recorded mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Add,
    Remove,
    Update,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Add => write!(f, "add"),
            CommandKind::Remove => write!(f, "remove"),
            CommandKind::Update => write!(f, "update"),
        }
    }
}

/// One recorded topology mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Command {
    Add {
        key: RouteKey,
        after: EdgeAttrs,
    },
    Remove {
        key: RouteKey,
        before: EdgeAttrs,
    },
    Update {
        key: RouteKey,
        before: EdgeAttrs,
        after: EdgeAttrs,
    },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Remove { .. } => CommandKind::Remove,
            Command::Update { .. } => CommandKind::Update,
        }
    }

    pub fn key(&self) -> &RouteKey {
        match self {
            Command::Add { key, .. } | Command::Remove { key, .. } | Command::Update { key, .. } => {
                key
            }
        }
    }

    /// Attributes before the mutation; `None` for an add
    pub fn before(&self) -> Option<EdgeAttrs> {
        match self {
            Command::Add { .. } => None,
            Command::Remove { before, .. } | Command::Update { before, .. } => Some(*before),
        }
    }

    /// Attributes after the mutation; `None` for a remove
    pub fn after(&self) -> Option<EdgeAttrs> {
        match self {
            Command::Remove { .. } => None,
            Command::Add { after, .. } | Command::Update { after, .. } => Some(*after),
        }
    }

    /// Perform the mutation on `store`
    pub fn apply(&self, store: &mut EdgeStore) -> Result<(), EdgeError> {
        let RouteKey {
            origin,
            destination,
        } = self.key();
        match self {
            Command::Add { after, .. } => store.add_edge(origin, destination, *after),
            Command::Remove { .. } => store.remove_edge(origin, destination).map(|_| ()),
            Command::Update { after, .. } => {
                store.update_edge(origin, destination, *after).map(|_| ())
            }
        }
    }

    /// Invert the mutation on `store`
    pub fn revert(&self, store: &mut EdgeStore) -> Result<(), EdgeError> {
        let RouteKey {
            origin,
            destination,
        } = self.key();
        match self {
            Command::Add { .. } => store.remove_edge(origin, destination).map(|_| ()),
            Command::Remove { before, .. } => store.add_edge(origin, destination, *before),
            Command::Update { before, .. } => {
                store.update_edge(origin, destination, *before).map(|_| ())
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.key())
    }
}

/// Which side of the history a listed command is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// On the undo stack: currently in effect
    Applied,
    /// On the redo stack: currently reverted
    Undone,
}

/// A command as listed by `History::entries`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub state: EntryState,
    pub command: Command,
}

/// Undo/redo stacks
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation that was just performed. Any redo timeline is
    /// discarded.
    pub fn record(&mut self, command: Command) {
        tracing::debug!(command = %command, discarded_redo = self.redo_stack.len(), "record");
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Revert the most recent mutation and move it onto the redo stack
    pub fn undo(&mut self, store: &mut EdgeStore) -> Result<Command, HistoryError> {
        let command = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        if let Err(source) = command.revert(store) {
            self.undo_stack.push(command.clone());
            return Err(HistoryError::Conflict {
                command: Box::new(command),
                source,
            });
        }
        tracing::debug!(command = %command, "undo");
        self.redo_stack.push(command.clone());
        Ok(command)
    }

    /// Re-apply the most recently undone mutation and move it back onto the
    /// undo stack
    pub fn redo(&mut self, store: &mut EdgeStore) -> Result<Command, HistoryError> {
        let command = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        if let Err(source) = command.apply(store) {
            self.redo_stack.push(command.clone());
            return Err(HistoryError::Conflict {
                command: Box::new(command),
                source,
            });
        }
        tracing::debug!(command = %command, "redo");
        self.undo_stack.push(command.clone());
        Ok(command)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// All recorded commands, newest first.
    ///
    /// Commands form one timeline: applied commands oldest to newest, then
    /// undone ones in the order redo would re-apply them. The listing walks
    /// that timeline backwards, so the undone command furthest from being
    /// redone comes first and the oldest applied command comes last.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let undone = self.redo_stack.iter().map(|command| HistoryEntry {
            state: EntryState::Undone,
            command: command.clone(),
        });
        let applied = self.undo_stack.iter().rev().map(|command| HistoryEntry {
            state: EntryState::Applied,
            command: command.clone(),
        });
        undone.chain(applied).collect()
    }
}
