//! Application layer - Host-facing facade

pub mod app;

pub use app::{App, ConfigState};
