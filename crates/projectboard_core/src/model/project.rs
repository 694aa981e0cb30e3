//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by the board columns.
//! - Provide status helpers shared by store, service and UI shells.
//!
//! # Invariants
//! - `id` is stable, never nil, and never reused for another project.
//! - `status` is one of exactly two values (`active`, `finished`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work has not been completed yet.
    Active,
    /// Work is done and archived in the finished column.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used by column wiring and wire formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Parses one project status from its stable string id.
pub fn parse_project_status(value: &str) -> Option<ProjectStatus> {
    match value.trim() {
        "active" => Some(ProjectStatus::Active),
        "finished" => Some(ProjectStatus::Finished),
        _ => None,
    }
}

/// Canonical record for one board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for drag/drop targeting and auditing.
    pub id: ProjectId,
    /// Short project title shown as the list item headline.
    pub title: String,
    /// Free-form description body.
    pub description: String,
    /// Number of people assigned to the project.
    pub people: i64,
    /// Column membership; new projects always start `active`.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a generated stable ID.
    ///
    /// # Invariants
    /// - The generated id is a v4 UUID and therefore never nil.
    /// - `status` starts as `ProjectStatus::Active`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `ProjectValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
        status: ProjectStatus,
    ) -> Result<Self, ProjectValidationError> {
        if id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status,
        })
    }

    /// Returns whether this project sits in the active column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Display label for the assigned people count.
    ///
    /// Singular for exactly one person, plural otherwise.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

/// Structural validation errors for project records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// The nil UUID is reserved and never a valid project identity.
    NilId,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
        }
    }
}

impl Error for ProjectValidationError {}
