//! Marker index on the map surface.

use std::collections::HashMap;

use waylog_core::models::WorkoutId;
use waylog_core::ports::{MapSurface, MarkerHandle};

/// Maps workout ids to their marker handles.
///
/// Holds handles only, never workout data. The registry is never a source of
/// truth; it is rebuilt from the workout collection whenever the map surface
/// comes up.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    handles: HashMap<WorkoutId, MarkerHandle>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle of a freshly placed marker
    pub fn add(&mut self, id: WorkoutId, handle: MarkerHandle) {
        self.handles.insert(id, handle);
    }

    /// Detach the marker for `id` and unregister it; no-op if absent
    pub fn remove(&mut self, id: WorkoutId, map: &mut dyn MapSurface) {
        if let Some(handle) = self.handles.remove(&id) {
            map.remove_marker(handle);
        }
    }

    /// Detach every marker, then clear the index
    pub fn remove_all(&mut self, map: &mut dyn MapSurface) {
        for handle in self.handles.values() {
            map.remove_marker(*handle);
        }
        self.handles.clear();
    }

    pub fn contains(&self, id: WorkoutId) -> bool {
        self.handles.contains_key(&id)
    }

    /// Ids currently carrying a marker
    pub fn ids(&self) -> impl Iterator<Item = WorkoutId> + '_ {
        self.handles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
