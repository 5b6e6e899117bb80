//! Pure presentation helpers: username normalization, date display and the
//! projection from records to display rows.
//!
//! Nothing here touches the network or a concrete UI toolkit, so a view only
//! has to know how to draw a [`Listing`].

use chrono::{Datelike, NaiveDate};

use crate::types::Birthday;

/// Display strings. The panel ships in a single language.
pub mod messages {
    pub const EMPTY_PLACEHOLDER: &str = "Нет данных о днях рождения";
    pub const FILL_ALL_FIELDS: &str = "Заполните все поля";
    pub const ADD_FAILED: &str = "Ошибка при добавлении";
    pub const DELETE_FAILED: &str = "Ошибка при удалении";
    pub const CONFIRM_DELETE: &str = "Удалить эту запись?";
    pub const DELETE_BUTTON: &str = "Удалить";
}

/// Prefix `@` unless the handle already carries one.
pub fn normalize_username(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('@') {
        trimmed.to_string()
    } else {
        format!("@{trimmed}")
    }
}

/// Regional (ru-RU) short date: `DD.MM.YYYY`.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// One visible row, bound to the record it deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub label: String,
}

/// Everything the list container shows after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// No records: only the placeholder text, no delete controls.
    Empty,
    Rows(Vec<Row>),
}

impl Listing {
    pub fn rows(&self) -> &[Row] {
        match self {
            Listing::Empty => &[],
            Listing::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// Project records onto display rows, in the order received.
pub fn render(records: &[Birthday]) -> Listing {
    if records.is_empty() {
        return Listing::Empty;
    }
    Listing::Rows(
        records
            .iter()
            .map(|b| Row {
                id: b.id,
                label: format!("{} — {}", b.username, format_birth_date(b.birth_date)),
            })
            .collect(),
    )
}

/// Records whose birthday falls on `day`, in input order.
///
/// A 29 February birthday is celebrated on 28 February in common years.
pub fn birthdays_on(records: &[Birthday], day: NaiveDate) -> Vec<&Birthday> {
    let common_year = NaiveDate::from_ymd_opt(day.year(), 2, 29).is_none();
    records
        .iter()
        .filter(|b| {
            let (month, dom) = (b.birth_date.month(), b.birth_date.day());
            (month == day.month() && dom == day.day())
                || (common_year && month == 2 && dom == 29 && day.month() == 2 && day.day() == 28)
        })
        .collect()
}
