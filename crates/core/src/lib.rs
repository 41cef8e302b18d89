//! todosync_core - Core for the todosync project.
//!
//! Domain types, request payloads, and the storage trait shared by the
//! server and the client crates. Everything here is framework-free so it can
//! be reused on both sides of the wire.

pub mod storage;
pub mod todo;
