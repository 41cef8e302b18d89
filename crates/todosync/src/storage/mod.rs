//! Storage backends for the todo table.
//!
//! Exactly one backend feature is enabled at a time (enforced in
//! `crate::state`). The in-memory backend also compiles under test so the
//! service and router tests run without external infrastructure.

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryTodoRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTodoRepository;
