//! End-to-end scenarios driving the backend the way a frontend would.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use family_scheduler_core::domain::agenda;
use family_scheduler_core::domain::commands::availabilities::{
    AvailabilityPatch, CreateAvailabilityCommand, UpdateAvailabilityCommand,
};
use family_scheduler_core::domain::commands::members::{
    CreateMemberCommand, DeleteMemberCommand, SelectMemberCommand,
};
use family_scheduler_core::{Backend, JsonConnection, KeyValueStore, MemoryStore};
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn memory_backend() -> Backend {
    init_logging();
    Backend::new(Arc::new(MemoryStore::new())).unwrap()
}

fn add_member(backend: &Backend, name: &str, color: &str) -> String {
    backend
        .member_service
        .create_member(CreateMemberCommand {
            name: name.to_string(),
            color: color.to_string(),
            avatar: None,
        })
        .unwrap()
        .member
        .id
}

fn add_availability(backend: &Backend, member_id: &str, date: NaiveDate) -> String {
    backend
        .availability_service
        .create_availability(
            CreateAvailabilityCommand {
                member_id: Some(member_id.to_string()),
                date,
                all_day: true,
                time_slots: None,
                note: None,
            },
            &backend.member_service,
        )
        .unwrap()
        .availability
        .id
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

#[test]
fn two_members_on_the_same_day_make_a_common_date() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");
    let bob = add_member(&backend, "Bob", "#8b5cf6");

    add_availability(&backend, &alice, june(1));
    add_availability(&backend, &bob, june(1));

    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;
    let common = agenda::common_dates(&listed);

    assert_eq!(common.len(), 1);
    assert_eq!(common[0].day_key(), "2024-06-01");
    assert_eq!(common[0].availabilities.len(), 2);
}

#[test]
fn one_member_alone_never_makes_a_common_date() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");

    // Inserted newest-first; grouping still comes back in date order
    add_availability(&backend, &alice, june(2));
    add_availability(&backend, &alice, june(1));

    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;

    let grouped = agenda::group_by_date(&listed);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].day_key(), "2024-06-01");
    assert_eq!(grouped[1].day_key(), "2024-06-02");
    assert_eq!(grouped[0].availabilities.len(), 1);
    assert_eq!(grouped[1].availabilities.len(), 1);

    assert!(agenda::common_dates(&listed).is_empty());
}

#[test]
fn duplicate_entries_by_one_member_do_not_make_a_common_date() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");
    add_member(&backend, "Bob", "#8b5cf6");

    // Alice marked the same day twice; nobody else is free that day
    add_availability(&backend, &alice, june(1));
    add_availability(&backend, &alice, june(1));

    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;

    assert_eq!(agenda::group_by_date(&listed).len(), 1);
    assert!(agenda::common_dates(&listed).is_empty());
}

#[test]
fn removing_a_member_takes_their_availabilities_along() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");
    let bob = add_member(&backend, "Bob", "#8b5cf6");

    add_availability(&backend, &alice, june(1));
    add_availability(&backend, &alice, june(8));
    add_availability(&backend, &bob, june(1));

    let result = backend
        .member_service
        .delete_member(
            DeleteMemberCommand {
                member_id: alice.clone(),
            },
            &backend.availability_service,
        )
        .unwrap();

    assert!(result.removed);
    assert_eq!(result.removed_availabilities, 2);

    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|a| a.member_id != alice));
}

#[test]
fn whitespace_only_names_are_rejected() {
    let backend = memory_backend();

    let result = backend.member_service.create_member(CreateMemberCommand {
        name: "   ".to_string(),
        color: "#3b82f6".to_string(),
        avatar: None,
    });

    assert!(result.is_err());
    assert!(backend.member_service.list_members().unwrap().members.is_empty());
}

#[test]
fn member_ids_stay_unique_through_add_and_remove_churn() {
    let backend = memory_backend();

    let mut ids = Vec::new();
    for name in ["Alice", "Bob", "Carol", "Dan"] {
        ids.push(add_member(&backend, name, "#3b82f6"));
    }
    backend
        .member_service
        .delete_member(
            DeleteMemberCommand {
                member_id: ids[1].clone(),
            },
            &backend.availability_service,
        )
        .unwrap();
    add_member(&backend, "Erin", "#8b5cf6");

    let members = backend.member_service.list_members().unwrap().members;
    let unique: HashSet<&str> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(unique.len(), members.len());
    assert_eq!(members.len(), 4);
}

#[test]
fn selection_feeds_new_entries_and_clears_on_removal() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");

    backend
        .member_service
        .select_member(SelectMemberCommand {
            member_id: Some(alice.clone()),
        })
        .unwrap();

    // No explicit member: the entry lands on whoever is selected
    let created = backend
        .availability_service
        .create_availability(
            CreateAvailabilityCommand {
                member_id: None,
                date: june(3),
                all_day: false,
                time_slots: None,
                note: Some("  after lunch  ".to_string()),
            },
            &backend.member_service,
        )
        .unwrap();

    assert_eq!(created.availability.member_id, alice);
    assert_eq!(created.availability.note, Some("after lunch".to_string()));

    backend
        .member_service
        .delete_member(
            DeleteMemberCommand { member_id: alice },
            &backend.availability_service,
        )
        .unwrap();

    let selected = backend.member_service.get_selected_member().unwrap();
    assert!(selected.selected_member.member.is_none());
}

#[test]
fn partial_updates_touch_only_the_given_fields() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");
    let id = add_availability(&backend, &alice, june(1));

    let result = backend
        .availability_service
        .update_availability(UpdateAvailabilityCommand {
            availability_id: id,
            patch: AvailabilityPatch {
                note: Some("bring snacks".to_string()),
                ..AvailabilityPatch::default()
            },
        })
        .unwrap();

    let updated = result.availability.unwrap();
    assert_eq!(updated.note, Some("bring snacks".to_string()));
    assert_eq!(updated.date, june(1));
    assert!(updated.all_day);
    assert_eq!(updated.member_id, alice);
}

#[test]
fn state_survives_backend_reconstruction_on_one_store() {
    init_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let first = Backend::new(store.clone()).unwrap();
    let alice = add_member(&first, "Alice", "#3b82f6");
    add_availability(&first, &alice, june(1));
    drop(first);

    let second = Backend::new(store).unwrap();

    let members = second.member_service.list_members().unwrap().members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Alice");
    assert_eq!(members[0].id, alice);

    // Dates must come back calendar-day-identical
    let listed = second
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, june(1));
    assert_eq!(listed[0].member_id, alice);
}

#[test]
fn json_files_round_trip_across_sessions() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();

    let alice;
    {
        let backend =
            Backend::new(Arc::new(JsonConnection::new(temp_dir.path()).unwrap())).unwrap();
        alice = add_member(&backend, "Alice", "#3b82f6");
        add_availability(&backend, &alice, june(15));
    }

    let backend = Backend::new(Arc::new(JsonConnection::new(temp_dir.path()).unwrap())).unwrap();
    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, june(15));
    assert_eq!(listed[0].member_id, alice);

    // One file per collection, holding the documented layout
    let raw = std::fs::read_to_string(temp_dir.path().join("familyMembers.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["name"], "Alice");
    assert_eq!(parsed[0]["color"], "#3b82f6");
}

#[test]
fn calendar_month_skips_entries_whose_member_is_gone() {
    init_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    // One resolvable member plus an entry left behind by a vanished one
    store
        .set(
            "familyMembers",
            r##"[{"id":"member::11111111-1111-4111-8111-111111111111","name":"Alice","color":"#3b82f6"}]"##,
        )
        .unwrap();
    store
        .set(
            "availabilities",
            r#"[
                {"id":"availability::22222222-2222-4222-8222-222222222222","memberId":"member::11111111-1111-4111-8111-111111111111","date":"2024-06-01T00:00:00.000Z","allDay":true},
                {"id":"availability::33333333-3333-4333-8333-333333333333","memberId":"member::99999999-9999-4999-8999-999999999999","date":"2024-06-01T00:00:00.000Z","allDay":true}
            ]"#,
        )
        .unwrap();

    let backend = Backend::new(store).unwrap();
    let calendar = backend
        .calendar_service
        .calendar_month(6, 2024, &backend.member_service, &backend.availability_service)
        .unwrap();

    let day_1 = calendar.days.iter().find(|d| d.day == 1).unwrap();
    assert_eq!(day_1.availabilities.len(), 1);
    assert_eq!(
        day_1.availabilities[0].member_id,
        "member::11111111-1111-4111-8111-111111111111"
    );

    // The stale record itself stays in storage untouched
    let listed = backend
        .availability_service
        .list_availabilities()
        .unwrap()
        .availabilities;
    assert_eq!(listed.len(), 2);
}

#[test]
fn export_snapshot_reflects_the_live_collections() {
    let backend = memory_backend();
    let alice = add_member(&backend, "Alice", "#3b82f6");
    add_availability(&backend, &alice, june(1));

    let snapshot = backend
        .export_service
        .export_snapshot(
            backend.store(),
            &backend.member_service,
            &backend.availability_service,
        )
        .unwrap();

    assert_eq!(snapshot.member_count, 1);
    assert_eq!(snapshot.availability_count, 1);
    assert!(snapshot.filename.starts_with("family-schedule-"));

    let document: serde_json::Value = serde_json::from_str(&snapshot.json_content).unwrap();
    let embedded: serde_json::Value =
        serde_json::from_str(document["familyMembers"].as_str().unwrap()).unwrap();
    assert_eq!(embedded[0]["name"], "Alice");
}
