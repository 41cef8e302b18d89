//! Local name search over an already-fetched list.

use super::types::TodoItem;

/// Case-insensitive substring match on `name`.
///
/// Operates purely on in-memory items; the server is never consulted. An
/// empty term matches everything.
pub fn filter_by_name(items: &[TodoItem], term: &str) -> Vec<TodoItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

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

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![item("Buy MILK"), item("Walk dog")];
        let found = filter_by_name(&items, "milk");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Buy MILK");
    }

    #[test]
    fn test_filter_matches_substring() {
        let items = vec![item("Buy milk"), item("Buy bread"), item("Walk dog")];
        assert_eq!(filter_by_name(&items, "buy").len(), 2);
        assert_eq!(filter_by_name(&items, "rea").len(), 1);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let items = vec![item("a"), item("b")];
        assert_eq!(filter_by_name(&items, "").len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = vec![item("Buy milk")];
        assert!(filter_by_name(&items, "xyz").is_empty());
    }
}
