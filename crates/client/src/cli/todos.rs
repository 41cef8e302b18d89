//! Todo CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Todo management commands.
#[derive(Debug, Parser)]
pub struct TodosCommand {
    #[command(subcommand)]
    pub action: TodosAction,
}

/// Available todo actions.
#[derive(Debug, Subcommand)]
pub enum TodosAction {
    /// List your todos.
    List {
        /// Filter locally by name substring (case-insensitive).
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a new todo.
    Create {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due_date: NaiveDate,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a todo.
    Update {
        /// Todo ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: String,
        /// New due date (YYYY-MM-DD).
        #[arg(long)]
        due_date: NaiveDate,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New status: 0=pending, 1=in-progress, 2=done.
        #[arg(long)]
        status: i32,
    },
    /// Delete a todo by ID.
    Delete {
        /// Todo ID.
        id: Uuid,
    },
    /// Attach a file to a todo via a presigned upload.
    Attach {
        /// Todo ID.
        id: Uuid,
        /// Path of the file to upload.
        #[arg(long)]
        file: PathBuf,
        /// Content type of the upload.
        #[arg(long, default_value = "image/png")]
        content_type: String,
    },
}
