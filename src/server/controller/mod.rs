//! HTTP boundary.
//!
//! Controllers translate requests into service calls and service results
//! or errors into HTTP responses. Status-code mapping is decided here,
//! per route.

pub mod advantage;
