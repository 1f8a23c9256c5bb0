use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use crate::models::*;

/// Open the shared pool. The database file is created when it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// Create the two tables if they are missing. Existing tables are left untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL
           )"#
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS tickets (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               problem TEXT NOT NULL,
               done BOOLEAN NOT NULL,
               user_id INTEGER NOT NULL
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Ticket queries
pub async fn get_all_tickets(pool: &SqlitePool) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        r#"SELECT * FROM tickets"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_tickets_by_id(pool: &SqlitePool, ticket_id: i64) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        r#"SELECT * FROM tickets WHERE id = ?"#
    )
    .bind(ticket_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_ticket(pool: &SqlitePool, ticket: &NewTicket) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        r#"INSERT INTO tickets (problem, done, user_id) VALUES (?, ?, ?) RETURNING *"#
    )
    .bind(&ticket.problem)
    .bind(ticket.done)
    .bind(ticket.user_id)
    .fetch_all(pool)
    .await
}

pub async fn update_ticket(pool: &SqlitePool, ticket_id: i64, changes: &TicketChanges) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        r#"UPDATE tickets
           SET problem = COALESCE(?, problem), done = COALESCE(?, done)
           WHERE id = ?
           RETURNING *"#
    )
    .bind(changes.problem.as_deref())
    .bind(changes.done)
    .bind(ticket_id)
    .fetch_all(pool)
    .await
}

pub async fn delete_ticket(pool: &SqlitePool, ticket_id: i64) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(
        r#"DELETE FROM tickets WHERE id = ? RETURNING *"#
    )
    .bind(ticket_id)
    .fetch_all(pool)
    .await
}

// User queries
pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"SELECT * FROM users"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"SELECT * FROM users WHERE id = ?"#
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_user(pool: &SqlitePool, name: Option<&str>) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"INSERT INTO users (name) VALUES (?) RETURNING *"#
    )
    .bind(name)
    .fetch_all(pool)
    .await
}

pub async fn update_user(pool: &SqlitePool, user_id: i64, name: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"UPDATE users SET name = ? WHERE id = ? RETURNING *"#
    )
    .bind(name)
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Outcome of removing a user together with the tickets it owns
#[derive(Debug)]
pub struct UserRemoval {
    pub users: Vec<User>,
    pub tickets_removed: u64,
}

/// Delete a user's tickets, then the user, in a single transaction.
/// If either statement fails the transaction is dropped and rolled back.
pub async fn delete_user_cascade(pool: &SqlitePool, user_id: i64) -> Result<UserRemoval, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let tickets_removed = sqlx::query(
        r#"DELETE FROM tickets WHERE user_id = ?"#
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let users = sqlx::query_as::<_, User>(
        r#"DELETE FROM users WHERE id = ? RETURNING *"#
    )
    .bind(user_id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(UserRemoval { users, tickets_removed })
}
