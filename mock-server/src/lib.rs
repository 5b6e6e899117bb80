use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Birthday {
    pub id: i64,
    pub username: String,
    pub birth_date: NaiveDate,
}

/// The date arrives as a string so an unparseable one can be answered with
/// 422 instead of axum's generic JSON rejection.
#[derive(Deserialize)]
pub struct CreateBirthday {
    pub username: String,
    pub birth_date: String,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Birthday>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new().nest("/api", api()).with_state(db)
}

fn api() -> Router<Db> {
    Router::new()
        .route("/birthdays", get(list_birthdays).post(create_birthday))
        .route("/birthdays/{id}", delete(delete_birthday))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_birthdays(State(db): State<Db>) -> Json<Vec<Birthday>> {
    let store = db.read().await;
    Json(store.rows.values().cloned().collect())
}

async fn create_birthday(
    State(db): State<Db>,
    Json(input): Json<CreateBirthday>,
) -> Result<(StatusCode, Json<Birthday>), (StatusCode, String)> {
    let birth_date = NaiveDate::parse_from_str(&input.birth_date, "%Y-%m-%d").map_err(|e| {
        tracing::debug!(birth_date = %input.birth_date, error = %e, "rejecting birth date");
        (StatusCode::UNPROCESSABLE_ENTITY, format!("invalid birth_date: {e}"))
    })?;

    let mut store = db.write().await;
    store.next_id += 1;
    let birthday = Birthday {
        id: store.next_id,
        username: input.username,
        birth_date,
    };
    store.rows.insert(birthday.id, birthday.clone());
    tracing::info!(id = birthday.id, username = %birthday.username, "birthday created");
    Ok((StatusCode::CREATED, Json(birthday)))
}

async fn delete_birthday(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.rows.remove(&id) {
        Some(_) => {
            tracing::info!(id, "birthday deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
