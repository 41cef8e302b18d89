pub mod attachments;
pub mod error;
pub mod health;
pub mod todos;

pub use error::AppError;
