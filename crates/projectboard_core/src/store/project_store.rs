//! Project store with synchronous listener fan-out.
//!
//! # Responsibility
//! - Append and re-column project records in insertion order.
//! - Push a fresh snapshot to every listener after each effective change.
//!
//! # Invariants
//! - Record ids are generated v4 UUIDs and unique for the store lifetime.
//! - Notification is synchronous and runs in subscription order.
//! - Each listener call receives its own detached snapshot copy.
//! - A mutation that changes nothing notifies nobody.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};

/// Detached copy of the store's record sequence handed to listeners.
pub type ProjectSnapshot = Vec<Project>;

/// Change listener registered with [`ProjectStore::subscribe`].
///
/// `Send` is required so embedding shells can keep the store in a
/// process-wide context.
pub type ProjectListener = Box<dyn FnMut(ProjectSnapshot) + Send>;

/// Ordered in-memory project collection with publish/subscribe updates.
///
/// One store instance serves a whole running application; construct it once
/// in the embedding shell and pass it to every component that needs it.
/// There is no teardown and no unsubscribe: both the store and its listeners
/// live for the process lifetime.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<ProjectListener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener at the end of the notification order.
    pub fn subscribe(&mut self, listener: impl FnMut(ProjectSnapshot) + Send + 'static) {
        self.listeners.push(Box::new(listener));
        debug!(
            "event=listener_registered module=store status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Appends a new active project and notifies all listeners.
    ///
    /// # Contract
    /// - Generates a fresh unique id; never fails.
    /// - Performs no input validation; callers validate before calling.
    /// - Returns the generated stable id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_added module=store status=ok project_id={} total={}",
            id,
            self.projects.len()
        );
        self.notify_all();
        id
    }

    /// Moves one project to another column and notifies all listeners.
    ///
    /// # Contract
    /// - Unknown ids are tolerated silently; stale drag/drop references from
    ///   the UI must not surface as errors.
    /// - Moving a project onto its current column changes nothing and
    ///   notifies nobody.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_move_ignored module=store status=ok reason=unknown_id project_id={}",
                id
            );
            return;
        };

        if project.status == new_status {
            debug!(
                "event=project_move_ignored module=store status=ok reason=same_status project_id={}",
                id
            );
            return;
        }

        project.status = new_status;
        info!(
            "event=project_moved module=store status=ok project_id={} column={}",
            id,
            new_status.as_str()
        );
        self.notify_all();
    }

    /// Returns a detached copy of the current record sequence.
    pub fn snapshot(&self) -> ProjectSnapshot {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Invokes every listener with its own fresh snapshot, in subscription
    /// order, before returning to the caller.
    fn notify_all(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}
