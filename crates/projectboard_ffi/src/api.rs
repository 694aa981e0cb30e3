//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board functions to Dart via FRB.
//! - Own the single long-lived board instance for the running application.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Exactly one board instance exists per process, created lazily on first
//!   board call.
//! - Return values are envelope structs with stable meaning.

use log::info;
use projectboard_core::{
    core_version as core_version_inner, derive_description_preview,
    init_logging as init_logging_inner, parse_project_status, ping as ping_inner,
    projects_in_column, BoardService, ProjectDraft,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static BOARD: OnceLock<Mutex<BoardService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered list entry for a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumnItem {
    /// Stable project ID in string form, used as drag payload.
    pub project_id: String,
    /// Project title shown as the item headline.
    pub title: String,
    /// Display label for the assigned people count.
    pub people_label: String,
    /// Single-line description preview (empty when none derivable).
    pub preview: String,
}

/// Column listing envelope for board list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardListResponse {
    /// Items of the requested column in board insertion order.
    pub items: Vec<BoardColumnItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created project ID.
    pub project_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            ok: true,
            project_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Validates one submitted form draft and appends it to the board.
///
/// # FFI contract
/// - Sync call; notification fan-out completes before returning.
/// - Invalid input returns `ok=false` with a single form-level verdict and
///   no per-field detail.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit_project(
    title: String,
    description: String,
    people: i64,
) -> BoardActionResponse {
    let mut board = match lock_board() {
        Ok(board) => board,
        Err(response) => return response,
    };

    let draft = ProjectDraft {
        title,
        description,
        people,
    };
    match board.submit_project(&draft) {
        Ok(id) => BoardActionResponse::success("Project added.", Some(id.to_string())),
        Err(err) => BoardActionResponse::failure(format!("Invalid input: {err}.")),
    }
}

/// Moves one project to the given column.
///
/// Input semantics:
/// - `project_id`: stable project UUID in string form (the drag payload).
/// - `column`: `active` or `finished` (the drop target id).
///
/// # FFI contract
/// - Sync call; notification fan-out completes before returning.
/// - Malformed `project_id` or `column` values are boundary failures.
/// - A well-formed request always succeeds: stale ids and same-column drops
///   are tolerated silently.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move_project(project_id: String, column: String) -> BoardActionResponse {
    let Ok(id) = Uuid::parse_str(project_id.trim()) else {
        return BoardActionResponse::failure(format!("Malformed project id: `{project_id}`."));
    };
    let Some(status) = parse_project_status(column.as_str()) else {
        return BoardActionResponse::failure(format!("Unknown board column: `{column}`."));
    };

    let mut board = match lock_board() {
        Ok(board) => board,
        Err(response) => return response,
    };

    board.move_project(id, status);
    BoardActionResponse::success("Move request processed.", None)
}

/// Lists the projects of one board column in insertion order.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unknown column values return an empty listing with a diagnostic
///   message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_list_projects(column: String) -> BoardListResponse {
    let Some(status) = parse_project_status(column.as_str()) else {
        return BoardListResponse {
            items: vec![],
            message: format!("Unknown board column: `{column}`."),
        };
    };

    let board = match lock_board() {
        Ok(board) => board,
        Err(response) => {
            return BoardListResponse {
                items: vec![],
                message: response.message,
            }
        }
    };

    let items: Vec<BoardColumnItem> = projects_in_column(&board.snapshot(), status)
        .into_iter()
        .map(|project| BoardColumnItem {
            project_id: project.id.to_string(),
            title: project.title.clone(),
            people_label: project.people_label(),
            preview: derive_description_preview(&project.description).unwrap_or_default(),
        })
        .collect();

    BoardListResponse {
        message: format!("{} project(s) in column {}.", items.len(), status.as_str()),
        items,
    }
}

fn lock_board() -> Result<MutexGuard<'static, BoardService>, BoardActionResponse> {
    let board = BOARD.get_or_init(|| {
        let mut service = BoardService::new();
        // Shell-level listener: metadata-only audit trail of board changes.
        service.subscribe(|snapshot| {
            info!(
                "event=board_changed module=ffi status=ok total={}",
                snapshot.len()
            );
        });
        Mutex::new(service)
    });

    board
        .lock()
        .map_err(|_| BoardActionResponse::failure("Board state is unavailable."))
}
