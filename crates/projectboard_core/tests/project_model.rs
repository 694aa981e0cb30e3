use projectboard_core::{
    parse_project_status, Project, ProjectStatus, ProjectValidationError,
};
use uuid::Uuid;

#[test]
fn new_project_starts_active_with_generated_id() {
    let project = Project::new("site relaunch", "rebuild the landing page", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "site relaunch");
    assert_eq!(project.description, "rebuild the landing page");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
}

#[test]
fn people_label_uses_singular_for_one_person() {
    let solo = Project::new("solo work", "one person project", 1);
    assert_eq!(solo.people_label(), "1 person");

    let team = Project::new("team work", "four person project", 4);
    assert_eq!(team.people_label(), "4 persons");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Project::with_id(Uuid::nil(), "invalid", "nil id", 2, ProjectStatus::Active)
        .unwrap_err();
    assert_eq!(err, ProjectValidationError::NilId);
}

#[test]
fn with_id_keeps_caller_provided_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project =
        Project::with_id(id, "imported", "already has identity", 2, ProjectStatus::Finished)
            .unwrap();

    assert_eq!(project.id, id);
    assert_eq!(project.status, ProjectStatus::Finished);
    assert!(!project.is_active());
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "wire check", "serde shape", 5, ProjectStatus::Finished)
        .unwrap();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "wire check");
    assert_eq!(json["description"], "serde shape");
    assert_eq!(json["people"], 5);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn status_string_ids_round_trip() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.as_str(), "finished");

    assert_eq!(parse_project_status("active"), Some(ProjectStatus::Active));
    assert_eq!(
        parse_project_status(" finished "),
        Some(ProjectStatus::Finished)
    );
    assert_eq!(parse_project_status("archived"), None);
    assert_eq!(parse_project_status(""), None);
}
