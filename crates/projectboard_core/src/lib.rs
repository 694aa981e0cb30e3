//! Core domain logic for ProjectBoard.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    parse_project_status, Project, ProjectId, ProjectStatus, ProjectValidationError,
};
pub use service::board_service::{
    derive_description_preview, projects_in_column, BoardService, BoardServiceError, ProjectDraft,
    DESCRIPTION_MIN_LENGTH, PEOPLE_MAX, PEOPLE_MIN, TITLE_MIN_LENGTH,
};
pub use store::project_store::{ProjectListener, ProjectSnapshot, ProjectStore};
pub use validation::{validate, FieldCheck, FieldValue};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
