//! Scripted headless session: create, edit, delete, and reload workouts
//! without a real map or browser attached.
//!
//! Run with `cargo run --example session`. State persists under the system
//! temp directory between runs; set WAYLOG_STORAGE_KEY to use a fresh key.

use anyhow::Result;
use waylog_app::headless::{FixedLocation, RecordingMapSurface, ScriptedForm};
use waylog_app::Controller;
use waylog_core::config::AppConfig;
use waylog_core::models::{GeoPoint, WorkoutKind};
use waylog_core::ports::FormFields;
use waylog_store::FileStorage;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::default().load_from_env();
    let backend = FileStorage::new(std::env::temp_dir().join("waylog-session"))?;

    let mut app = Controller::bootstrap(
        config,
        backend,
        RecordingMapSurface::new(),
        FixedLocation(GeoPoint::new(39.0, -12.0)),
        ScriptedForm::new(),
    );

    // Log a run where the map was clicked
    app.map_clicked(GeoPoint::new(39.1, -12.2));
    app.form_mut().enter(FormFields {
        kind: WorkoutKind::Running,
        distance: 5.2,
        duration: 24.0,
        extra: 178.0,
    });
    let run = app.submit()?;

    // And a ride a little further north
    app.map_clicked(GeoPoint::new(41.5, -9.0));
    app.form_mut().enter(FormFields {
        kind: WorkoutKind::Cycling,
        distance: 27.0,
        duration: 95.0,
        extra: 523.0,
    });
    app.submit()?;

    app.overview();
    app.move_to(run);

    println!("workout log, newest first:");
    for card in app.list().cards() {
        println!("  {} — {}", card.title, card.lines.join(", "));
    }
    println!(
        "{} records, {} markers, {} map calls this session",
        app.store().len(),
        app.markers().len(),
        app.map().calls().len()
    );

    app.shutdown();
    Ok(())
}
