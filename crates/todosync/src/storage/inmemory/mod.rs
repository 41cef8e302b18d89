//! In-memory todo repository.

pub mod repository;

pub use repository::InMemoryTodoRepository;
