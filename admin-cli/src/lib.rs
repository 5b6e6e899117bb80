//! Terminal front-end for the birthday admin panel.
//!
//! Wires a real HTTP transport and a line-oriented terminal view into one
//! `BirthdayAdmin` and feeds it commands read from the same input stream.

pub mod config;
pub mod session;
pub mod terminal;
pub mod transport;

pub use config::Config;
pub use session::{run, Command};
pub use terminal::Terminal;
pub use transport::UreqTransport;
