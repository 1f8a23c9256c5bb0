use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Envelope, Ticket};
use super::validation;

// GET /tickets - List all tickets
pub async fn get_tickets(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = db::get_all_tickets(&pool).await?;

    Ok(Json(tickets))
}

// GET /tickets/:id - Rows matching the id, so an empty array when there is none
pub async fn get_ticket_by_id(
    State(pool): State<SqlitePool>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = db::get_tickets_by_id(&pool, ticket_id).await?;

    Ok(Json(tickets))
}

/// POST /tickets - Create a ticket for an existing user
///
/// The body must carry a string `problem`, a boolean `done` and an integer
/// `user_id` naming a row of the users table. Responds with the inserted row.
pub async fn create_ticket(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let ticket = validation::new_ticket(&body).inspect_err(|e| {
        tracing::warn!("POST | /tickets | 400 | FAIL: {}", e);
    })?;

    if db::get_user_by_id(&pool, ticket.user_id).await?.is_none() {
        tracing::warn!("POST | /tickets | 400 | FAIL: {}", validation::USER_UNKNOWN);
        return Err(ApiError::Validation(validation::USER_UNKNOWN));
    }

    let created = db::insert_ticket(&pool, &ticket).await?;

    Ok(Json(created))
}

/// PUT /tickets/:id - Change the problem text and/or the done flag
///
/// Fields missing from the body keep their stored value.
pub async fn update_ticket(
    State(pool): State<SqlitePool>,
    Path(ticket_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<Ticket>>, ApiError> {
    let changes = validation::ticket_changes(&body).inspect_err(|e| {
        tracing::warn!("PUT | /tickets/{} | 400 | FAIL: {}", ticket_id, e);
    })?;

    let updated = db::update_ticket(&pool, ticket_id, &changes).await?;

    if updated.is_empty() {
        let message = format!("Le ticket {} n'existe pas", ticket_id);
        tracing::warn!("PUT | /tickets/{} | 400 | FAIL: {}", ticket_id, message);
        return Err(ApiError::NotFound(message));
    }

    let message = format!("Le ticket {} a bien été modifié", ticket_id);
    tracing::info!("PUT | /tickets/{} | 200 | OK: {}", ticket_id, message);

    Ok(Json(Envelope::ok(message, updated)))
}

// DELETE /tickets/:id - Deleting a missing ticket is not an error, it yields []
pub async fn delete_ticket(
    State(pool): State<SqlitePool>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let deleted = db::delete_ticket(&pool, ticket_id).await?;

    tracing::info!("DELETE | /tickets/{} | 200 | {} row(s) removed", ticket_id, deleted.len());

    Ok(Json(deleted))
}
