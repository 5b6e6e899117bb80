//! The admin panel controller.
//!
//! # Design
//! `BirthdayAdmin` owns a `BirthdayClient`, a [`Transport`] that performs the
//! HTTP round-trip and a [`View`] that draws rows and talks to the user. It is
//! constructed once and handed to whatever drives user interaction; there is
//! no global instance.
//!
//! The backend is the only source of truth. Every successful mutation is
//! followed by exactly one full reload, and the view is only ever given a
//! complete [`Listing`] built from the latest successful fetch.
//!
//! Failure policy:
//! - missing form input: blocking alert, nothing is sent;
//! - create or delete failing (bad status or transport): logged, then one
//!   recoverable-error alert;
//! - list failing: logged only, the previous display stays as it was.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::client::BirthdayClient;
use crate::error::{AdminError, TransportError};
use crate::format::{self, messages, normalize_username, Listing};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Birthday, BirthdayForm, NewBirthday};

/// Executes one HTTP request. Implementations must return non-2xx responses
/// as data; only failures that produced no response are errors.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Whatever renders the list and interacts with the user.
pub trait View {
    /// Replace the whole list container with `listing`.
    fn show(&mut self, listing: &Listing);

    /// Blocking message the user has to acknowledge.
    fn alert(&mut self, message: &str);

    /// Yes/no question. `false` aborts the pending action.
    fn confirm(&mut self, question: &str) -> bool;

    /// Reset the creation form inputs.
    fn clear_form(&mut self);
}

/// What a user action ended up doing when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and the list was reloaded.
    Done,
    /// Input was incomplete; no request was sent.
    Rejected,
    /// The user declined the confirmation; no request was sent.
    Cancelled,
}

pub struct BirthdayAdmin<T, V> {
    client: BirthdayClient,
    transport: T,
    view: V,
}

impl<T: Transport, V: View> BirthdayAdmin<T, V> {
    pub fn new(client: BirthdayClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view,
        }
    }

    pub fn client(&self) -> &BirthdayClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// First load. A failure here leaves the view untouched and is only logged.
    pub fn initialize(&mut self) {
        debug!(base_url = %self.client.base_url(), "initializing birthday admin");
        let _ = self.load_and_render();
    }

    /// Fetch the full collection and redraw. Returns the number of records
    /// shown. On failure the previous display stays visible.
    pub fn load_and_render(&mut self) -> Result<usize, AdminError> {
        match self.fetch() {
            Ok(records) => {
                debug!(count = records.len(), "birthdays loaded");
                self.render(&records);
                Ok(records.len())
            }
            Err(e) => {
                log_failure("load birthdays", &e);
                Err(e)
            }
        }
    }

    /// Redraw from `records` as given. Calling it twice with the same input
    /// leaves the same display.
    pub fn render(&mut self, records: &[Birthday]) {
        let listing = format::render(records);
        self.view.show(&listing);
    }

    /// Create a record from raw form input.
    pub fn submit(&mut self, form: &BirthdayForm) -> Result<Outcome, AdminError> {
        if form.username.trim().is_empty() || form.birth_date.trim().is_empty() {
            self.view.alert(messages::FILL_ALL_FIELDS);
            return Ok(Outcome::Rejected);
        }

        let input = NewBirthday {
            username: normalize_username(&form.username),
            birth_date: form.birth_date.clone(),
        };

        if let Err(e) = self.create(&input) {
            log_failure("add birthday", &e);
            self.view.alert(messages::ADD_FAILED);
            return Err(e);
        }

        info!(username = %input.username, birth_date = %input.birth_date, "birthday added");
        self.view.clear_form();
        let _ = self.load_and_render();
        Ok(Outcome::Done)
    }

    /// Delete the record with `id` after the user confirms.
    pub fn delete(&mut self, id: i64) -> Result<Outcome, AdminError> {
        if !self.view.confirm(messages::CONFIRM_DELETE) {
            debug!(id, "delete declined");
            return Ok(Outcome::Cancelled);
        }

        if let Err(e) = self.remove(id) {
            log_failure("delete birthday", &e);
            self.view.alert(messages::DELETE_FAILED);
            return Err(e);
        }

        info!(id, "birthday deleted");
        let _ = self.load_and_render();
        Ok(Outcome::Done)
    }

    /// Birthdays falling on `day`, fetched fresh from the backend.
    pub fn birthdays_on(&self, day: NaiveDate) -> Result<Vec<Birthday>, AdminError> {
        let records = self.fetch().inspect_err(|e| log_failure("load birthdays", e))?;
        Ok(format::birthdays_on(&records, day).into_iter().cloned().collect())
    }

    fn fetch(&self) -> Result<Vec<Birthday>, AdminError> {
        let response = self.transport.execute(self.client.build_list_birthdays())?;
        Ok(self.client.parse_list_birthdays(response)?)
    }

    fn create(&self, input: &NewBirthday) -> Result<(), AdminError> {
        let request = self.client.build_create_birthday(input)?;
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_create_birthday(response)?)
    }

    fn remove(&self, id: i64) -> Result<(), AdminError> {
        let response = self.transport.execute(self.client.build_delete_birthday(id))?;
        Ok(self.client.parse_delete_birthday(response)?)
    }
}

fn log_failure(action: &str, err: &AdminError) {
    match err {
        AdminError::Transport(e) => error!(action, error = %e, "request did not complete"),
        AdminError::Api(e) => warn!(action, error = %e, "backend rejected request"),
    }
}
