use serde_json::Value;
use crate::error::ApiError;
use crate::models::{NewTicket, TicketChanges};

pub const PROBLEM_REQUIRED: &str = "Obligation d'avoir un PROBLEM en string";
pub const DONE_REQUIRED: &str = "Obligation d'avoir un DONE en boolean";
pub const USER_ID_REQUIRED: &str = "Obligation d'avoir un USER_ID en nombre entier";
pub const USER_UNKNOWN: &str = "Le USER n'existe pas dans le tableau des users";
pub const TICKET_STRUCTURE: &str = "Structure incorrect";
pub const USER_STRUCTURE: &str = "Structure incorrect, pas de n°id et pas de nom";

/// Check the body of POST /tickets. Fields are checked in order and the first failure wins.
/// Whether `user_id` points at an existing user is left to the caller.
pub fn new_ticket(body: &Value) -> Result<NewTicket, ApiError> {
    let problem = body
        .get("problem")
        .and_then(Value::as_str)
        .ok_or(ApiError::Validation(PROBLEM_REQUIRED))?;

    let done = body
        .get("done")
        .and_then(Value::as_bool)
        .ok_or(ApiError::Validation(DONE_REQUIRED))?;

    let user_id = body
        .get("user_id")
        .and_then(whole_number)
        .ok_or(ApiError::Validation(USER_ID_REQUIRED))?;

    Ok(NewTicket {
        problem: problem.to_string(),
        done,
        user_id,
    })
}

/// Check the body of PUT /tickets/{id}. At least a non-empty `problem` or a `done` flag is needed.
pub fn ticket_changes(body: &Value) -> Result<TicketChanges, ApiError> {
    let problem = match present(body, "problem") {
        None => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(ApiError::Validation(TICKET_STRUCTURE)),
    };

    let done = match present(body, "done") {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => return Err(ApiError::Validation(TICKET_STRUCTURE)),
    };

    if problem.is_none() && done.is_none() {
        return Err(ApiError::Validation(TICKET_STRUCTURE));
    }

    Ok(TicketChanges { problem, done })
}

/// Check the body of PUT /users/{id}, which must carry a non-empty `name`.
pub fn user_name(body: &Value) -> Result<&str, ApiError> {
    body.get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::Validation(USER_STRUCTURE))
}

// null counts as absent
fn present<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

/// Accept any integer-valued JSON number, so `3` and `3.0` pass but `3.5` does not.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
