//! Integration tests for session bootstrap, reload, and degraded environments.

use waylog_app::headless::{FixedLocation, MapCall, NoLocation, RecordingMapSurface, ScriptedForm};
use waylog_app::Controller;
use waylog_core::config::AppConfig;
use waylog_core::models::{GeoPoint, WorkoutDetails, WorkoutDraft, WorkoutId, WorkoutKind};
use waylog_core::ports::{FormFields, StorageBackend};
use waylog_core::WaylogError;
use waylog_store::MemoryStorage;

fn session(
    backend: MemoryStorage,
) -> Controller<RecordingMapSurface, FixedLocation, ScriptedForm, MemoryStorage> {
    Controller::bootstrap(
        AppConfig::default(),
        backend,
        RecordingMapSurface::new(),
        FixedLocation(GeoPoint::new(39.0, -12.0)),
        ScriptedForm::new(),
    )
}

#[test]
fn reload_restores_every_representation() {
    let mut first = session(MemoryStorage::new());

    first.map_clicked(GeoPoint::new(39.0, -12.0));
    first.form_mut().enter(FormFields {
        kind: WorkoutKind::Running,
        distance: 5.2,
        duration: 24.0,
        extra: 178.0,
    });
    let running = first.submit().unwrap();

    first.map_clicked(GeoPoint::new(41.5, -9.0));
    first.form_mut().enter(FormFields {
        kind: WorkoutKind::Cycling,
        distance: 27.0,
        duration: 95.0,
        extra: 523.0,
    });
    let cycling = first.submit().unwrap();

    let saved: Vec<_> = first.store().iter().cloned().collect();
    let backend = first.shutdown();

    let second = session(backend);

    // storage order is insertion order, with every field intact
    let restored: Vec<_> = second.store().iter().cloned().collect();
    assert_eq!(restored, saved);

    // the visible list replays as newest-first, the reverse of storage order
    let visible: Vec<WorkoutId> = second.list().cards().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![cycling, running]);

    // markers are rebuilt from the collection once the map comes up
    assert!(second.markers().contains(running));
    assert!(second.markers().contains(cycling));
    assert_eq!(second.map().live_markers(), 2);
}

#[test]
fn corrupted_storage_degrades_to_an_empty_session() {
    let mut backend = MemoryStorage::new();
    backend.set_item("workouts", "}} not a workout list").unwrap();

    let mut controller = session(backend);
    assert!(controller.store().is_empty());
    assert!(controller.list().is_empty());
    assert!(controller.markers().is_empty());

    // the session is fully usable afterwards
    controller.map_clicked(GeoPoint::new(39.0, -12.0));
    controller.form_mut().enter(FormFields {
        kind: WorkoutKind::Running,
        distance: 5.2,
        duration: 24.0,
        extra: 178.0,
    });
    let id = controller.submit().unwrap();
    assert_eq!(controller.persistence().load()[0].id, id);
}

#[test]
fn stale_derived_values_are_not_corrected_on_load() {
    // A snapshot written by an older build: the pace does not match
    // duration / distance. Loading must keep it as-is, not recompute it.
    let id = WorkoutId::generate();
    let snapshot = format!(
        r#"[{{"id":"{}","coords":[39.0,-12.0],"distance":5.2,"duration":24.0,
            "createdAt":"2023-01-05T10:00:00Z","description":"Running on January 5",
            "kind":"Running","cadence":178.0,"pace":999.0}}]"#,
        id
    );

    let mut backend = MemoryStorage::new();
    backend.set_item("workouts", &snapshot).unwrap();

    let controller = session(backend);
    let loaded = controller.store().find(id).expect("snapshot should load");
    match loaded.details {
        WorkoutDetails::Running { pace, .. } => assert_eq!(pace, 999.0),
        _ => panic!("expected a running payload"),
    }
}

#[test]
fn missing_geolocation_disables_the_map_but_not_the_log() {
    let mut seed = session(MemoryStorage::new());
    seed.map_clicked(GeoPoint::new(39.0, -12.0));
    seed.form_mut().enter(FormFields {
        kind: WorkoutKind::Cycling,
        distance: 27.0,
        duration: 95.0,
        extra: 523.0,
    });
    let persisted = seed.submit().unwrap();
    let backend = seed.shutdown();

    let mut controller = Controller::bootstrap(
        AppConfig::default(),
        backend,
        RecordingMapSurface::new(),
        NoLocation,
        ScriptedForm::new(),
    );

    // collection and list come back, the map stays untouched
    assert!(!controller.map_ready());
    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.list().len(), 1);
    assert!(controller.markers().is_empty());
    assert!(controller.map().calls().is_empty());

    // map clicks are ignored, so nothing can be staged
    controller.map_clicked(GeoPoint::new(40.0, -11.0));
    assert!(matches!(
        controller.submit(),
        Err(WaylogError::NoStagedPosition)
    ));

    // records can still be created directly once a position is known
    let id = controller
        .create_workout(WorkoutDraft::running(GeoPoint::new(40.0, -11.0), 5.2, 24.0, 178.0))
        .unwrap();
    assert!(controller.store().find(id).is_some());
    assert_eq!(controller.persistence().load().len(), 2);
    assert!(controller.markers().is_empty());

    controller.overview();
    controller.move_to(persisted);
    assert!(controller.map().calls().is_empty());
}

#[test]
fn edit_destroys_the_record_and_prefills_the_form() {
    let mut controller = session(MemoryStorage::new());

    controller.map_clicked(GeoPoint::new(39.0, -12.0));
    controller.form_mut().enter(FormFields {
        kind: WorkoutKind::Cycling,
        distance: 27.0,
        duration: 95.0,
        extra: 523.0,
    });
    let original = controller.submit().unwrap();

    controller.request_edit(original);

    // the record is gone from every representation
    assert!(controller.store().is_empty());
    assert!(controller.list().is_empty());
    assert!(controller.markers().is_empty());
    assert!(controller.persistence().load().is_empty());

    // the form holds the destroyed record's values
    assert_eq!(
        controller.form().fields(),
        FormFields {
            kind: WorkoutKind::Cycling,
            distance: 27.0,
            duration: 95.0,
            extra: 523.0,
        }
    );

    // resubmission creates a brand-new record with a fresh id
    let replacement = controller.submit().unwrap();
    assert_ne!(replacement, original);
    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.store().find(replacement).unwrap().distance, 27.0);
}

#[test]
fn edit_of_unknown_id_is_a_no_op() {
    let mut controller = session(MemoryStorage::new());
    controller.request_edit(WorkoutId::generate());

    assert!(controller.store().is_empty());
    assert_eq!(controller.form().fields(), FormFields::default());
}

#[test]
fn reset_storage_wipes_the_key_and_the_projections() {
    let mut controller = session(MemoryStorage::new());
    controller.map_clicked(GeoPoint::new(39.0, -12.0));
    controller.form_mut().enter(FormFields {
        kind: WorkoutKind::Running,
        distance: 5.2,
        duration: 24.0,
        extra: 178.0,
    });
    controller.submit().unwrap();

    controller.reset_storage();

    assert!(controller.store().is_empty());
    assert!(controller.list().is_empty());
    assert!(controller.markers().is_empty());

    let backend = controller.shutdown();
    assert_eq!(backend.get_item("workouts").unwrap(), None);
}

#[test]
fn bootstrap_renders_before_the_map_comes_up() {
    let mut seed = session(MemoryStorage::new());
    seed.map_clicked(GeoPoint::new(39.0, -12.0));
    seed.form_mut().enter(FormFields {
        kind: WorkoutKind::Running,
        distance: 5.2,
        duration: 24.0,
        extra: 178.0,
    });
    seed.submit().unwrap();
    let backend = seed.shutdown();

    let controller = session(backend);

    // the map sees exactly one view change and one marker per record
    let calls = controller.map().calls();
    assert!(matches!(calls[0], MapCall::SetView { zoom: 13, .. }));
    assert!(matches!(calls[1], MapCall::AddMarker { .. }));
    assert_eq!(calls.len(), 2);
}
