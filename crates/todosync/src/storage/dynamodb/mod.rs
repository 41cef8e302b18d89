//! DynamoDB todo repository.
//!
//! Single-table design: todos live under a user partition with a GSI that
//! orders items by creation time.

pub mod conversions;
pub mod error;
pub mod keys;
pub mod repository;

pub use repository::DynamoDbTodoRepository;
