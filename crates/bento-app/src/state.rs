// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::CandidateId;

/// At most one selected candidate. Cleared only by selecting the same
/// candidate again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<CandidateId>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&CandidateId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &CandidateId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn toggle(&mut self, id: &CandidateId) -> Option<&CandidateId> {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
        self.selected.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub selection: SelectionState,
    pub cursor: usize,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SelectCandidate(CandidateId),
    MoveCursor { delta: isize, len: usize },
    SetCursor { row: usize, len: usize },
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SelectionChanged(Option<CandidateId>),
    CursorMoved(usize),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SelectCandidate(id) => {
                let selected = self.selection.toggle(&id).cloned();
                tracing::debug!(candidate = %id, selected = selected.is_some(), "selection toggled");
                vec![AppEvent::SelectionChanged(selected)]
            }
            AppCommand::MoveCursor { delta, len } => {
                if len == 0 {
                    self.cursor = 0;
                    return Vec::new();
                }
                let max = (len - 1) as isize;
                let next = (self.cursor as isize + delta).clamp(0, max) as usize;
                self.move_cursor_to(next)
            }
            AppCommand::SetCursor { row, len } => {
                if row >= len {
                    return Vec::new();
                }
                self.move_cursor_to(row)
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn move_cursor_to(&mut self, row: usize) -> Vec<AppEvent> {
        if row == self.cursor {
            return Vec::new();
        }
        self.cursor = row;
        vec![AppEvent::CursorMoved(row)]
    }
}
