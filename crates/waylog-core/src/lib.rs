//! Waylog Core - Domain models, workout factory, ports, and configuration
//!
//! This crate contains the core domain logic and port definitions for the waylog system.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{Result, WaylogError};
