//! WinState — window session management for desktop shells.
//!
//! Tracks open windows, restores their saved geometry onto a visible display
//! and persists geometry changes through a namespaced, TTL-aware key-value
//! store. The native toolkit is reached only through the [`host`] traits.

pub mod app;
pub mod database;
pub mod host;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
