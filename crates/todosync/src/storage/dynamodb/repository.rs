//! DynamoDB repository implementation.
//!
//! Implements [`TodoRepository`] from `todosync_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use todosync_core::storage::{Result, TodoRepository};
use todosync_core::todo::{public_read_url, TodoItem, TodoUpdate};

use super::conversions::{item_to_todo, todo_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_update_item_error,
};
use super::keys;

/// DynamoDB-based todo repository.
pub struct DynamoDbTodoRepository {
    client: Client,
    table_name: String,
    user_index: String,
}

impl DynamoDbTodoRepository {
    /// Creates a new repository with the given DynamoDB client, table name,
    /// and creation-ordered user index.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        user_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            user_index: user_index.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbTodoRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.user_index)
            .key_condition_expression("GSI1PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(keys::todo_gsi1_pk(user_id)))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_todo).collect()
    }

    async fn insert(&self, item: &TodoItem) -> Result<()> {
        let attributes = todo_to_item(item);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_fields(&self, todo_id: Uuid, user_id: &str, update: &TodoUpdate) -> Result<()> {
        // `name` and `status` are DynamoDB reserved words, hence the aliases.
        let description = match &update.description {
            Some(desc) => AttributeValue::S(desc.clone()),
            None => AttributeValue::Null(true),
        };

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(user_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .condition_expression("attribute_exists(PK)")
            .update_expression(
                "SET #name = :name, dueDate = :dueDate, description = :description, #status = :status",
            )
            .expression_attribute_names("#name", "name")
            .expression_attribute_names("#status", "status")
            .expression_attribute_values(":name", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(
                ":dueDate",
                AttributeValue::S(update.due_date.format("%Y-%m-%d").to_string()),
            )
            .expression_attribute_values(":description", description)
            .expression_attribute_values(":status", AttributeValue::N(update.status.to_string()))
            .send()
            .await
            .map_err(|e| {
                map_update_item_error(e, "TodoItem", format!("{}:{}", user_id, todo_id))
            })?;

        Ok(())
    }

    async fn set_attachment_url(&self, todo_id: Uuid, user_id: &str, url: &str) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(user_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .condition_expression("attribute_exists(PK)")
            .update_expression("SET attachmentUrl = :attachmentUrl")
            .expression_attribute_values(
                ":attachmentUrl",
                AttributeValue::S(public_read_url(url).to_string()),
            )
            .send()
            .await
            .map_err(|e| {
                map_update_item_error(e, "TodoItem", format!("{}:{}", user_id, todo_id))
            })?;

        Ok(())
    }

    async fn delete(&self, todo_id: Uuid, user_id: &str) -> Result<()> {
        // Unconditional, deleting an absent item succeeds.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(user_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
