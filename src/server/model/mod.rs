//! Server-side model types: application state, creation payloads, and
//! database model aliases.

pub mod advantage;
pub mod app;
pub mod db;
