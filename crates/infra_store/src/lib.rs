//! Durable client-side state
//!
//! The only state that survives a restart is the insurance application
//! draft, persisted as a versioned JSON snapshot file. This crate owns the
//! serialize/deserialize contract: an explicit envelope with a schema
//! version, loaded once on start and rewritten on every mutation.

pub mod error;
pub mod snapshot;

pub use error::StoreError;
pub use snapshot::{Snapshot, SnapshotStore, SNAPSHOT_VERSION};
