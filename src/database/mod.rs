//! SQLite database layer for persisted window state.
//!
//! Provides connection management and schema migrations for the
//! `kv_entries` table used by the SQLite backing store.
//!
//! # Usage
//!
//! ```no_run
//! use winstate::database::Database;
//!
//! let db = Database::open("winstate.db").expect("failed to open database");
//!
//! // In-memory database for tests
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
