//! Domain DTOs for the birthday API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A birthday record as returned by the backend. The `id` is assigned by the
/// server and is only ever passed back to target a delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Birthday {
    pub id: i64,
    pub username: String,
    pub birth_date: NaiveDate,
}

/// Request payload for creating a birthday. `birth_date` is forwarded exactly
/// as the user typed it; the backend owns date validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBirthday {
    pub username: String,
    pub birth_date: String,
}

/// Raw values read from the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayForm {
    pub username: String,
    pub birth_date: String,
}

impl BirthdayForm {
    pub fn new(username: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            birth_date: birth_date.into(),
        }
    }
}
