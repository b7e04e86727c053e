//! Todo queries module
//!
//! One parameterized statement per operation. Ids and user ids arrive as
//! raw text and are cast by the store (`::int`), so a non-numeric value
//! fails in the store rather than being validated here.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Row from the todos table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub completed: bool,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Todo row joined with the owning user's email
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TodoWithOwner {
    pub id: i32,
    pub name: String,
    pub completed: bool,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub email: String,
}

/// All todos with their owner's email, newest first
pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<TodoWithOwner>, sqlx::Error> {
    sqlx::query_as(
        "SELECT t.*, u.email \
         FROM todos t \
         JOIN users u ON t.user_id = u.id \
         ORDER BY t.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Insert a new todo; the store assigns id, completed default and both
/// timestamps. An unknown user id violates the foreign key and errors.
pub async fn insert(pool: &PgPool, name: &str, user_id: &str) -> Result<Todo, sqlx::Error> {
    sqlx::query_as("INSERT INTO todos (name, user_id) VALUES ($1, $2::int) RETURNING *")
        .bind(name)
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// Fetch a single todo by id
pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM todos WHERE id = $1::int")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Update name and completed together, refreshing updated_at
pub async fn update_both(
    pool: &PgPool,
    id: &str,
    name: Option<&str>,
    completed: Option<&str>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE todos \
         SET name = $2, completed = $3::boolean, updated_at = NOW() \
         WHERE id = $1::int \
         RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(completed)
    .fetch_optional(pool)
    .await
}

/// Update only the name, refreshing updated_at
pub async fn update_name(
    pool: &PgPool,
    id: &str,
    name: Option<&str>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE todos \
         SET name = $2, updated_at = NOW() \
         WHERE id = $1::int \
         RETURNING *",
    )
    .bind(id)
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// Update only the completed flag, refreshing updated_at
pub async fn update_completed(
    pool: &PgPool,
    id: &str,
    completed: Option<&str>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE todos \
         SET completed = $2::boolean, updated_at = NOW() \
         WHERE id = $1::int \
         RETURNING *",
    )
    .bind(id)
    .bind(completed)
    .fetch_optional(pool)
    .await
}

/// Delete a todo by id, returning the deleted row
pub async fn delete(pool: &PgPool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as("DELETE FROM todos WHERE id = $1::int RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
