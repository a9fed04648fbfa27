// Storage and placement services
// Backing stores, the expiring key-value store, geometry persistence, display bounds and settings.

pub mod backing_store;
pub mod bounds_validator;
pub mod geometry_store;
pub mod kv_store;
pub mod settings_engine;
