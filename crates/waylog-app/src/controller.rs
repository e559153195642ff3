//! Intent orchestration across the four workout stores.
//!
//! The controller is the only writer of the record collection, the marker
//! index, the rendered list, and durable storage. Every intent handler runs to
//! completion before the next may run, and for a given id it touches all four
//! stores before returning, so no representation outlives the others.

use waylog_core::config::AppConfig;
use waylog_core::error::{Result, WaylogError};
use waylog_core::models::{GeoBounds, GeoPoint, Workout, WorkoutDraft, WorkoutId, WorkoutKind};
use waylog_core::ports::{
    FormFields, LocationProvider, MapSurface, StorageBackend, WorkoutForm,
};
use waylog_store::{PersistenceAdapter, WorkoutStore};

use crate::confirm::{ConfirmGate, ConfirmState};
use crate::list::ListRenderer;
use crate::markers::MarkerRegistry;

/// One application session: the controller wired to its collaborators
pub struct Controller<M, L, F, B> {
    config: AppConfig,
    store: WorkoutStore,
    markers: MarkerRegistry,
    list: ListRenderer,
    persistence: PersistenceAdapter<B>,
    gate: ConfirmGate,
    map: M,
    location: L,
    form: F,
    map_ready: bool,
    pending_coords: Option<GeoPoint>,
}

impl<M, L, F, B> Controller<M, L, F, B>
where
    M: MapSurface,
    L: LocationProvider,
    F: WorkoutForm,
    B: StorageBackend,
{
    /// Wire a session and bring it up.
    ///
    /// Initialization order: load persisted data, replay the rendered list
    /// from it, then bring the map up at the device position and rebuild the
    /// marker index. Geolocation failure leaves the map unusable for the
    /// session but does not touch the collection or the list.
    pub fn bootstrap(config: AppConfig, backend: B, map: M, location: L, form: F) -> Self {
        let persistence = PersistenceAdapter::new(backend, config.storage_key.clone());

        let mut controller = Self {
            config,
            store: WorkoutStore::new(),
            markers: MarkerRegistry::new(),
            list: ListRenderer::new(),
            persistence,
            gate: ConfirmGate::new(),
            map,
            location,
            form,
            map_ready: false,
            pending_coords: None,
        };

        let records = controller.persistence.load();
        tracing::info!(count = records.len(), "Loaded persisted workouts");
        controller.store.replace_all(records);

        // Replay oldest-first; anchor insertion flips the visible order to
        // newest-first, same as if each record had just been created.
        for workout in controller.store.iter() {
            controller.list.render(workout);
        }

        controller.initialize_map();
        controller
    }

    fn initialize_map(&mut self) {
        match self.location.current_position() {
            Ok(position) => {
                self.map.set_view(position, self.config.map_zoom);
                self.rebuild_markers();
                self.map_ready = true;
            }
            Err(e) => {
                tracing::warn!("Map disabled for this session: {}", e);
                self.map_ready = false;
            }
        }
    }

    /// Re-register a marker for every stored workout
    fn rebuild_markers(&mut self) {
        for workout in self.store.iter() {
            let handle = self.map.add_marker(workout.coords, &workout.description);
            self.markers.add(workout.id, handle);
        }
    }

    /// A click on the map stages coordinates for the next submission
    pub fn map_clicked(&mut self, coords: GeoPoint) {
        if !self.map_ready {
            return;
        }
        self.pending_coords = Some(coords);
    }

    /// Submit the creation form against the staged map position.
    ///
    /// Validation failures abort before any store is touched; the staged
    /// position and the form survive for a corrected resubmission.
    pub fn submit(&mut self) -> Result<WorkoutId> {
        let coords = self.pending_coords.ok_or(WaylogError::NoStagedPosition)?;

        let fields = self.form.read();
        let draft = match fields.kind {
            WorkoutKind::Running => {
                WorkoutDraft::running(coords, fields.distance, fields.duration, fields.extra)
            }
            WorkoutKind::Cycling => {
                WorkoutDraft::cycling(coords, fields.distance, fields.duration, fields.extra)
            }
        };

        let id = self.create_workout(draft)?;
        self.pending_coords = None;
        self.form.clear();
        Ok(id)
    }

    /// Create a record and apply it to all four stores, collection first
    pub fn create_workout(&mut self, draft: WorkoutDraft) -> Result<WorkoutId> {
        let workout = Workout::create(draft)?;
        let id = workout.id;

        self.store.add(workout.clone())?;
        if self.map_ready {
            let handle = self.map.add_marker(workout.coords, &workout.description);
            self.markers.add(id, handle);
        }
        self.list.render(&workout);
        self.save();

        tracing::info!(%id, kind = %workout.kind(), "Created workout");
        Ok(id)
    }

    /// Remove one workout from every store; unknown ids are a silent no-op.
    ///
    /// Steps run in an order where each is individually idempotent: a retry
    /// after a partial failure converges on the same end state.
    pub fn request_delete(&mut self, id: WorkoutId) {
        self.list.remove_by_id(id);
        let removed = self.store.remove(id);
        self.markers.remove(id, &mut self.map);
        self.save();

        if removed.is_some() {
            tracing::info!(%id, "Deleted workout");
        }
    }

    /// Destroy the record and hand its values back to the form.
    ///
    /// Destroy-first is the intended semantics: abandoning the edit loses the
    /// record, and a resubmission creates a brand-new record with a fresh id.
    pub fn request_edit(&mut self, id: WorkoutId) {
        let Some(workout) = self.store.find(id) else {
            return;
        };

        let fields = FormFields {
            kind: workout.kind(),
            distance: workout.distance,
            duration: workout.duration,
            extra: workout.extra(),
        };
        let coords = workout.coords;

        self.request_delete(id);

        // The replacement keeps the old position unless the map is clicked again
        self.pending_coords = Some(coords);
        self.form.prefill(&fields);
        tracing::info!(%id, "Staged workout for editing");
    }

    /// Ask to delete every workout; arms the confirmation gate
    pub fn request_delete_all(&mut self) {
        if !self.gate.request() {
            tracing::debug!("Delete-all already awaiting confirmation");
        }
    }

    /// Confirm a pending delete-all; without one this is a no-op
    pub fn confirm_delete_all(&mut self) {
        if !self.gate.confirm() {
            return;
        }

        self.list.remove_all();
        self.markers.remove_all(&mut self.map);
        self.store.remove_all();
        self.save();

        tracing::info!("Deleted all workouts");
    }

    /// Dismiss a pending delete-all without touching any store
    pub fn cancel_delete_all(&mut self) {
        self.gate.cancel();
    }

    /// Fit the map around every workout; an empty collection makes no map calls
    pub fn overview(&mut self) {
        if !self.map_ready {
            return;
        }

        let Some(bounds) = GeoBounds::enclosing(self.store.iter().map(|w| w.coords)) else {
            return;
        };
        self.map.fit_bounds(bounds, self.config.fit_padding);
    }

    /// Center the map on a workout; unknown ids are a no-op
    pub fn move_to(&mut self, id: WorkoutId) {
        if !self.map_ready {
            return;
        }

        let Some(workout) = self.store.find(id) else {
            return;
        };
        let coords = workout.coords;
        self.map.set_view(coords, self.config.map_zoom);
    }

    /// Wipe durable storage and every live projection
    pub fn reset_storage(&mut self) {
        if let Err(e) = self.persistence.clear() {
            tracing::warn!("Failed to clear persisted workouts: {}", e);
        }

        self.list.remove_all();
        self.markers.remove_all(&mut self.map);
        self.store.remove_all();
        self.gate.cancel();
        self.pending_coords = None;
    }

    /// Tear the session down: drop the in-memory state, detach the markers,
    /// and hand the storage backend back with its last snapshot intact.
    pub fn shutdown(mut self) -> B {
        self.list.remove_all();
        self.markers.remove_all(&mut self.map);
        self.store.remove_all();
        self.persistence.into_backend()
    }

    fn save(&mut self) {
        // A failed write leaves the previous snapshot in place; the next save
        // retries from the full collection.
        if let Err(e) = self.persistence.save(self.store.iter()) {
            tracing::warn!("Failed to persist workouts: {}", e);
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    pub fn list(&self) -> &ListRenderer {
        &self.list
    }

    pub fn persistence(&self) -> &PersistenceAdapter<B> {
        &self.persistence
    }

    pub fn confirm_state(&self) -> ConfirmState {
        self.gate.state()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form surface, the one collaborator the user
    /// types into directly
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn map_ready(&self) -> bool {
        self.map_ready
    }
}
