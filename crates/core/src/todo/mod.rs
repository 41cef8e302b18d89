mod attachment;
mod requests;
mod search;
mod types;

pub use attachment::public_read_url;
pub use requests::{
    CreateTodoRequest, TodoListResponse, UpdateTodoRequest, UploadUrlResponse, ValidationError,
};
pub use search::filter_by_name;
pub use types::{TodoItem, TodoStatus, TodoUpdate};
