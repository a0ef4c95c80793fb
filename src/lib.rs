//! seekernotes - Backend for the SeekerNotes desktop note-taking app
//!
//! Keeps the user's chosen notes directory in a small JSON config under
//! the platform user-config directory, and loads and saves `.snt` note
//! files from that directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SeekerError;
