//! Waylog App - Intent orchestration across the workout stores
//!
//! This crate wires the controller to the map surface, geolocation, form, and
//! storage ports, and keeps the four representations of the workout data — the
//! record collection, the marker index, the rendered list, and durable
//! storage — in lockstep across create, edit, and delete intents.

pub mod confirm;
pub mod controller;
pub mod headless;
pub mod list;
pub mod markers;

pub use confirm::{ConfirmGate, ConfirmState};
pub use controller::Controller;
pub use list::{ListRenderer, WorkoutCard};
pub use markers::MarkerRegistry;
