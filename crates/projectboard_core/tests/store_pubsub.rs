use projectboard_core::{ProjectSnapshot, ProjectStatus, ProjectStore};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Registers a listener that records every snapshot it receives.
fn record_snapshots(store: &mut ProjectStore) -> Arc<Mutex<Vec<ProjectSnapshot>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    store.subscribe(move |snapshot| {
        sink.lock().expect("snapshot sink lock").push(snapshot);
    });
    received
}

#[test]
fn add_appends_active_record_and_notifies_every_listener_once() {
    let mut store = ProjectStore::new();
    let first_listener = record_snapshots(&mut store);
    let second_listener = record_snapshots(&mut store);

    store.add_project("warm-up", "existing entry", 2);
    let id = store.add_project("site relaunch", "rebuild the landing page", 3);

    for received in [&first_listener, &second_listener] {
        let snapshots = received.lock().expect("snapshot sink lock");
        assert_eq!(snapshots.len(), 2, "one fan-out per add");

        let latest = snapshots.last().expect("snapshot from second add");
        assert_eq!(latest.len(), 2);
        let newest = latest.last().expect("new record at the end");
        assert_eq!(newest.id, id);
        assert_eq!(newest.status, ProjectStatus::Active);
    }
}

#[test]
fn generated_ids_are_unique_across_adds() {
    let mut store = ProjectStore::new();

    let mut ids = HashSet::new();
    for index in 0..200 {
        let id = store.add_project(format!("project {index}"), "uniqueness run", 1);
        assert!(ids.insert(id), "id generated twice: {id}");
    }

    assert_eq!(store.len(), 200);
}

#[test]
fn move_with_unknown_id_alters_nothing_and_notifies_nobody() {
    let mut store = ProjectStore::new();
    store.add_project("site relaunch", "rebuild the landing page", 3);
    let received = record_snapshots(&mut store);
    let before = store.snapshot();

    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert!(received.lock().expect("snapshot sink lock").is_empty());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn move_to_identical_status_does_not_notify() {
    let mut store = ProjectStore::new();
    let id = store.add_project("site relaunch", "rebuild the landing page", 3);
    let received = record_snapshots(&mut store);

    store.move_project(id, ProjectStatus::Active);

    assert!(received.lock().expect("snapshot sink lock").is_empty());
}

#[test]
fn move_to_differing_status_updates_only_that_record_and_notifies_once() {
    let mut store = ProjectStore::new();
    let moved_id = store.add_project("site relaunch", "rebuild the landing page", 3);
    let untouched_id = store.add_project("press kit", "assemble launch assets", 2);
    let received = record_snapshots(&mut store);

    store.move_project(moved_id, ProjectStatus::Finished);

    let snapshots = received.lock().expect("snapshot sink lock");
    assert_eq!(snapshots.len(), 1, "exactly one fan-out per effective move");

    let snapshot = &snapshots[0];
    let moved = snapshot
        .iter()
        .find(|project| project.id == moved_id)
        .expect("moved record present");
    assert_eq!(moved.status, ProjectStatus::Finished);

    let untouched = snapshot
        .iter()
        .find(|project| project.id == untouched_id)
        .expect("untouched record present");
    assert_eq!(untouched.status, ProjectStatus::Active);
}

#[test]
fn listeners_run_in_subscription_order() {
    let mut store = ProjectStore::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let sink = Arc::clone(&order);
        store.subscribe(move |_snapshot| {
            sink.lock().expect("order sink lock").push(label);
        });
    }

    store.add_project("site relaunch", "rebuild the landing page", 3);

    assert_eq!(
        *order.lock().expect("order sink lock"),
        ["first", "second", "third"]
    );
}

#[test]
fn each_listener_receives_its_own_detached_copy() {
    let mut store = ProjectStore::new();
    let received = record_snapshots(&mut store);

    store.subscribe(|mut snapshot| {
        // A listener that mangles its copy must not affect anyone else.
        snapshot.clear();
    });
    let late_listener = record_snapshots(&mut store);

    store.add_project("site relaunch", "rebuild the landing page", 3);

    assert_eq!(received.lock().expect("snapshot sink lock")[0].len(), 1);
    assert_eq!(late_listener.lock().expect("snapshot sink lock")[0].len(), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_preserves_insertion_order() {
    let mut store = ProjectStore::new();
    let first = store.add_project("first", "created first", 1);
    let second = store.add_project("second", "created second", 2);
    let third = store.add_project("third", "created third", 3);

    let ids: Vec<_> = store.snapshot().iter().map(|project| project.id).collect();
    assert_eq!(ids, [first, second, third]);
}
