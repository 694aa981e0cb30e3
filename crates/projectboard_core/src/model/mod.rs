//! Domain model for board projects.
//!
//! # Responsibility
//! - Define the canonical record shared by board columns and input flows.
//! - Keep one project shape for every UI projection.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - A project is always in exactly one of two statuses.

pub mod project;
