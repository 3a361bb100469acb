//! Business-rule layer.
//!
//! Services validate and normalize incoming data before touching storage
//! and translate storage results back for the controllers.

pub mod advantage;
