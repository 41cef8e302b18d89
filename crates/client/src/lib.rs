//! todosync_client - CLI client for todosync API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod session;

pub use client::TodoSyncClient;
pub use error::{ClientError, Result};
pub use session::TodoList;
