pub mod health;
pub mod tickets;
pub mod users;
pub mod validation;
