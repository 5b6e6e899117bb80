//! Client core for the birthday admin panel.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), projects records onto display
//! rows, and drives the list/create/delete workflow through [`BirthdayAdmin`].
//!
//! # Design
//! - `BirthdayClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `BirthdayAdmin` reaches the network through [`Transport`] and the user
//!   through [`View`], so the whole workflow is testable without a UI
//!   toolkit or a live server.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod admin;
pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod types;

pub use admin::{BirthdayAdmin, Outcome, Transport, View};
pub use client::{BirthdayClient, DEFAULT_BASE_URL};
pub use error::{AdminError, ApiError, TransportError};
pub use format::{birthdays_on, format_birth_date, normalize_username, render, Listing, Row};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Birthday, BirthdayForm, NewBirthday};
