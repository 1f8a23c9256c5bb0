use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Envelope, Ticket, User};
use super::validation;

// GET /users - List all users
pub async fn get_users(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = db::get_all_users(&pool).await?;

    Ok(Json(users))
}

/// GET /users/:id
///
/// Looks the id up in the tickets table, not in users, so the response is a
/// list of ticket rows.
pub async fn get_user_by_id(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let rows = db::get_tickets_by_id(&pool, id).await?;

    Ok(Json(rows))
}

/// POST /users - Insert the given name as is
///
/// There is no validation here; a missing or non-string name reaches the
/// store as NULL and is refused by its NOT NULL constraint.
pub async fn create_user(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<User>>, ApiError> {
    let name = body.get("name").and_then(Value::as_str);

    let created = db::insert_user(&pool, name).await?;

    Ok(Json(created))
}

// PUT /users/:id - Rename a user
pub async fn update_user(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let name = validation::user_name(&body).inspect_err(|e| {
        tracing::warn!("PUT | /users/{} | 400 | FAIL: {}", user_id, e);
    })?;

    let updated = db::update_user(&pool, user_id, name).await?;

    if updated.is_empty() {
        let message = format!("L'utilisateur {} n'existe pas", user_id);
        tracing::warn!("PUT | /users/{} | 400 | FAIL: {}", user_id, message);
        return Err(ApiError::NotFound(message));
    }

    let message = format!("L'utilisateur {} a bien été modifié", user_id);
    tracing::info!("PUT | /users/{} | 200 | OK: {}", user_id, message);

    Ok(Json(Envelope::ok(message, updated)))
}

/// DELETE /users/:id - Remove a user and every ticket it owns
///
/// Both deletes run in one transaction. Responds with the deleted user row,
/// or an empty array when the user did not exist.
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    let removal = db::delete_user_cascade(&pool, user_id).await?;

    tracing::info!(
        "DELETE | /users/{} | 200 | {} user(s), {} ticket(s) removed",
        user_id,
        removal.users.len(),
        removal.tickets_removed
    );

    Ok(Json(removal.users))
}
