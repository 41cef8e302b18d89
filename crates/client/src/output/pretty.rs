//! Pretty output formatting.

use todosync_core::todo::{TodoItem, TodoStatus};

fn status_label(status: i32) -> String {
    match TodoStatus::from_i32(status) {
        Some(status) => status.label().to_string(),
        None => format!("unknown ({})", status),
    }
}

/// Format a todo for display.
pub fn format_todo(todo: &TodoItem) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Due: {}",
        todo.name,
        status_label(todo.status),
        todo.todo_id,
        todo.due_date
    );
    if let Some(desc) = &todo.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if !todo.attachment_url.is_empty() {
        output.push_str(&format!("\n  Attachment: {}", todo.attachment_url));
    }
    output
}

/// Format todos for display.
pub fn format_todos(todos: &[TodoItem]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}
