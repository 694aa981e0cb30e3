//! Board use-case service.
//!
//! # Responsibility
//! - Validate raw form input before it reaches the store.
//! - Provide column projections and display previews for list rendering.
//!
//! # Invariants
//! - Invalid drafts never reach the store and never trigger notification.
//! - The submit verdict is a single pass/fail; it carries no per-field
//!   detail.
//! - Column projections preserve snapshot order.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ProjectSnapshot, ProjectStore};
use crate::validation::{validate, FieldCheck, FieldValue};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum character count for a project title.
pub const TITLE_MIN_LENGTH: usize = 3;
/// Minimum character count for a project description.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Smallest accepted people assignment.
pub const PEOPLE_MIN: i64 = 1;
/// Largest accepted people assignment.
pub const PEOPLE_MAX: i64 = 5;

/// Character cap for derived description previews.
const PREVIEW_MAX_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Raw form input for one project submission.
///
/// Transient value gathered by the input component; consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: i64,
}

/// Service error for board use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardServiceError {
    /// At least one submitted field failed validation.
    ///
    /// Deliberately detail-free: the UI surfaces one blocking verdict for
    /// the whole form.
    InvalidInput,
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid project input"),
        }
    }
}

impl Error for BoardServiceError {}

/// Use-case facade over the application's single project store.
#[derive(Default)]
pub struct BoardService {
    store: ProjectStore,
}

impl BoardService {
    /// Creates a service owning a fresh empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around an existing store instance.
    pub fn with_store(store: ProjectStore) -> Self {
        Self { store }
    }

    /// Validates one draft and appends it to the board.
    ///
    /// # Contract
    /// - Title: required, at least [`TITLE_MIN_LENGTH`] characters.
    /// - Description: required, at least [`DESCRIPTION_MIN_LENGTH`]
    ///   characters.
    /// - People: between [`PEOPLE_MIN`] and [`PEOPLE_MAX`] inclusive.
    /// - Returns the created stable project id.
    ///
    /// # Errors
    /// - `BoardServiceError::InvalidInput` when any field check fails; the
    ///   store is left untouched and no listener is notified.
    pub fn submit_project(&mut self, draft: &ProjectDraft) -> Result<ProjectId, BoardServiceError> {
        if !draft_is_valid(draft) {
            warn!("event=project_rejected module=service status=ok reason=invalid_input");
            return Err(BoardServiceError::InvalidInput);
        }

        let id = self
            .store
            .add_project(draft.title.as_str(), draft.description.as_str(), draft.people);
        info!(
            "event=project_submitted module=service status=ok project_id={}",
            id
        );
        Ok(id)
    }

    /// Moves one project to another column.
    ///
    /// Stale or unknown ids are tolerated silently, matching store
    /// semantics.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        self.store.move_project(id, new_status);
    }

    /// Registers one change listener on the underlying store.
    pub fn subscribe(&mut self, listener: impl FnMut(ProjectSnapshot) + Send + 'static) {
        self.store.subscribe(listener);
    }

    /// Returns a detached copy of the current board state.
    pub fn snapshot(&self) -> ProjectSnapshot {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Runs every field check for one draft and folds them into one verdict.
fn draft_is_valid(draft: &ProjectDraft) -> bool {
    let title_check = FieldCheck {
        required: true,
        min_length: Some(TITLE_MIN_LENGTH),
        ..FieldCheck::new(FieldValue::text(draft.title.as_str()))
    };
    let description_check = FieldCheck {
        required: true,
        min_length: Some(DESCRIPTION_MIN_LENGTH),
        ..FieldCheck::new(FieldValue::text(draft.description.as_str()))
    };
    let people_check = FieldCheck {
        required: true,
        min: Some(PEOPLE_MIN),
        max: Some(PEOPLE_MAX),
        ..FieldCheck::new(FieldValue::number(draft.people))
    };

    validate(&title_check) && validate(&description_check) && validate(&people_check)
}

/// Filters one snapshot down to the projects of a single column.
///
/// Listener-side helper: each column view filters the full snapshot to the
/// subset relevant to it. Snapshot order is preserved.
pub fn projects_in_column(snapshot: &[Project], status: ProjectStatus) -> Vec<Project> {
    snapshot
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}

/// Derives a single-line description preview for list rendering.
///
/// Rules:
/// - Whitespace runs collapse to single spaces.
/// - The result is trimmed and capped at 100 characters.
/// - Returns `None` when nothing printable remains.
pub fn derive_description_preview(description: &str) -> Option<String> {
    let normalized = WHITESPACE_RE.replace_all(description, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::derive_description_preview;

    #[test]
    fn preview_collapses_whitespace_runs() {
        let preview = derive_description_preview("rebuild\n\nthe   landing\tpage");
        assert_eq!(preview.as_deref(), Some("rebuild the landing page"));
    }

    #[test]
    fn preview_caps_length_at_one_hundred_chars() {
        let long = "x".repeat(250);
        let preview = derive_description_preview(&long).expect("preview should exist");
        assert_eq!(preview.chars().count(), 100);
    }

    #[test]
    fn preview_is_none_for_blank_input() {
        assert_eq!(derive_description_preview("   \n\t "), None);
    }
}
