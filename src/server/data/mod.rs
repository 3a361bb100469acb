//! Persistence-access layer.
//!
//! Repositories borrow the database connection and expose the narrow set
//! of queries the service layer needs. Every call reflects current
//! persisted state; no caching and no cross-call transactions.

pub mod advantage;
pub mod enterprise;
