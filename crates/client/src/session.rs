//! Client-side todo list session state.
//!
//! [`TodoList`] owns the items a UI would render. Mutations call the API and
//! then patch the local list in place instead of re-fetching, so the view
//! updates immediately; the local copy is only guaranteed fresh as of the
//! last `load()`.

use uuid::Uuid;

use todosync_core::todo::{
    filter_by_name, CreateTodoRequest, TodoItem, UpdateTodoRequest,
};

use crate::client::TodoSyncClient;
use crate::error::Result;

/// In-memory list state for one authenticated session.
pub struct TodoList {
    client: TodoSyncClient,
    items: Vec<TodoItem>,
    initial_items: Vec<TodoItem>,
    search_text: String,
    loading: bool,
}

impl TodoList {
    /// Creates an empty session around an authenticated client.
    pub fn new(client: TodoSyncClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            initial_items: Vec::new(),
            search_text: String::new(),
            loading: false,
        }
    }

    /// The items currently visible (after any active search).
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The active search term, empty when no search is applied.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether a full fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches the full list, replacing both the visible items and the
    /// search-reset baseline.
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.client.list_todos().await;
        self.loading = false;

        let fetched = result?;
        self.items = fetched.clone();
        self.initial_items = fetched;
        Ok(())
    }

    /// Creates a todo and appends it to the visible list.
    pub async fn create(&mut self, req: CreateTodoRequest) -> Result<TodoItem> {
        let item = self.client.create_todo(req).await?;
        apply_created(&mut self.items, item.clone());
        Ok(item)
    }

    /// Updates a todo and patches the matching visible item in place.
    pub async fn update(&mut self, todo_id: Uuid, req: UpdateTodoRequest) -> Result<()> {
        self.client.update_todo(todo_id, req.clone()).await?;
        apply_updated(&mut self.items, todo_id, &req);
        Ok(())
    }

    /// Deletes a todo and drops it from the visible list.
    pub async fn delete(&mut self, todo_id: Uuid) -> Result<()> {
        self.client.delete_todo(todo_id).await?;
        apply_deleted(&mut self.items, todo_id);
        Ok(())
    }

    /// Filters the visible items by case-insensitive name substring.
    ///
    /// An empty term restores the list from the last full fetch, so
    /// mutations made while a search was active only reappear after the
    /// next `load()`.
    pub fn search(&mut self, term: &str) {
        self.search_text = term.to_string();
        if term.is_empty() {
            self.items = self.initial_items.clone();
        } else {
            self.items = filter_by_name(&self.items, term);
        }
    }
}

/// Append a freshly created item.
fn apply_created(items: &mut Vec<TodoItem>, item: TodoItem) {
    items.push(item);
}

/// Replace the mutable fields of the matching item, if present.
fn apply_updated(items: &mut [TodoItem], todo_id: Uuid, req: &UpdateTodoRequest) {
    if let Some(item) = items.iter_mut().find(|i| i.todo_id == todo_id) {
        item.name = req.name.clone();
        item.due_date = req.due_date;
        item.description = req.description.clone();
        item.status = req.status;
    }
}

/// Drop the matching item, if present.
fn apply_deleted(items: &mut Vec<TodoItem>, todo_id: Uuid) {
    items.retain(|i| i.todo_id != todo_id);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn item(name: &str) -> TodoItem {
        TodoItem {
            user_id: "u1".to_string(),
            todo_id: Uuid::new_v4(),
            created_at: "2024-01-01T10:00:00Z".parse().unwrap(),
            name: name.to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            description: None,
            status: 0,
            attachment_url: String::new(),
        }
    }

    fn session_with(items: Vec<TodoItem>) -> TodoList {
        let mut list = TodoList::new(TodoSyncClient::new("http://localhost:3000", "t"));
        list.items = items.clone();
        list.initial_items = items;
        list
    }

    #[test]
    fn test_apply_created_appends() {
        let mut items = vec![item("a")];
        apply_created(&mut items, item("b"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "b");
    }

    #[test]
    fn test_apply_updated_patches_matching_item() {
        let mut items = vec![item("a"), item("b")];
        let target = items[1].todo_id;
        let req = UpdateTodoRequest {
            name: "b2".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: Some("notes".to_string()),
            status: 2,
        };

        apply_updated(&mut items, target, &req);

        assert_eq!(items[0].name, "a");
        assert_eq!(items[1].name, "b2");
        assert_eq!(items[1].status, 2);
        assert_eq!(items[1].description.as_deref(), Some("notes"));
    }

    #[test]
    fn test_apply_updated_ignores_missing_item() {
        let mut items = vec![item("a")];
        let req = UpdateTodoRequest {
            name: "x".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: None,
            status: 1,
        };

        apply_updated(&mut items, Uuid::new_v4(), &req);

        assert_eq!(items[0].name, "a");
    }

    #[test]
    fn test_apply_deleted_filters_out_item() {
        let mut items = vec![item("a"), item("b")];
        let target = items[0].todo_id;

        apply_deleted(&mut items, target);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "b");
    }

    #[test]
    fn test_search_filters_current_items() {
        let mut list = session_with(vec![item("Buy milk"), item("Walk dog")]);

        list.search("milk");

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].name, "Buy milk");
        assert_eq!(list.search_text(), "milk");
    }

    #[test]
    fn test_empty_search_restores_last_fetch() {
        let mut list = session_with(vec![item("Buy milk"), item("Walk dog")]);

        list.search("milk");
        list.search("");

        assert_eq!(list.items().len(), 2);
        assert_eq!(list.search_text(), "");
    }

    #[test]
    fn test_search_narrows_within_previous_results() {
        let mut list = session_with(vec![item("Buy milk"), item("Buy bread"), item("Walk dog")]);

        list.search("buy");
        assert_eq!(list.items().len(), 2);

        // Searching again filters the already-narrowed list.
        list.search("milk");
        assert_eq!(list.items().len(), 1);

        list.search("");
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn test_local_mutations_during_search_are_lost_on_reset() {
        let mut list = session_with(vec![item("Buy milk"), item("Walk dog")]);

        list.search("milk");
        apply_created(&mut list.items, item("Read book"));
        assert_eq!(list.items().len(), 2);

        // The baseline from the last fetch wins until the next load().
        list.search("");
        assert_eq!(list.items().len(), 2);
        assert!(list.items().iter().all(|i| i.name != "Read book"));
    }
}
