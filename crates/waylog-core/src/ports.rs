//! Port trait definitions
//!
//! These traits define the external collaborators the controller drives: the
//! map widget, the device geolocation service, the creation form, and the
//! durable key/value storage. Adapters implement them.

pub mod form;
pub mod storage;
pub mod surface;

pub use form::{FormFields, WorkoutForm};
pub use storage::StorageBackend;
pub use surface::{LocationProvider, MapSurface, MarkerHandle};
