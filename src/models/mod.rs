use serde::{Deserialize, Serialize};

/// Row from the users table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Row from the tickets table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ticket {
    pub id: i64,
    pub problem: String,
    pub done: bool,
    pub user_id: i64,
}

/// Validated body of POST /tickets
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub problem: String,
    pub done: bool,
    pub user_id: i64,
}

/// Validated body of PUT /tickets/{id}. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketChanges {
    pub problem: Option<String>,
    pub done: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvelopeStatus {
    Ok,
    Fail,
}

/// Uniform `{status, message, data}` wrapper for update and error responses.
/// `data` is left out of the JSON entirely when there is nothing to return.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Fail,
            message: message.into(),
            data: None,
        }
    }
}
