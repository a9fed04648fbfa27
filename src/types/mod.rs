// Shared type definitions
// Plain data passed between the key-value store, the geometry store and the window manager.

pub mod errors;
pub mod event;
pub mod geometry;
pub mod settings;
pub mod storage;
pub mod window;
