//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projectboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use projectboard_core::{projects_in_column, BoardService, ProjectDraft, ProjectStatus};

fn main() {
    println!("projectboard_core ping={}", projectboard_core::ping());
    println!(
        "projectboard_core version={}",
        projectboard_core::core_version()
    );

    // Small end-to-end probe: one submission, one move, counted via the
    // same listener path the UI shells use.
    let mut board = BoardService::new();
    board.subscribe(|snapshot| {
        let active = projects_in_column(&snapshot, ProjectStatus::Active).len();
        let finished = projects_in_column(&snapshot, ProjectStatus::Finished).len();
        println!("board update: active={active} finished={finished}");
    });

    let draft = ProjectDraft {
        title: "smoke project".to_string(),
        description: "verify store wiring".to_string(),
        people: 2,
    };
    match board.submit_project(&draft) {
        Ok(id) => board.move_project(id, ProjectStatus::Finished),
        Err(err) => println!("submit failed: {err}"),
    }
}
