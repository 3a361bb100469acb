//! Client-side navigation core.
//!
//! The route table, the session state provider, and the navigation guard
//! evaluated before every route transition. The guard is a pure function
//! of the destination and a session-state snapshot; the UI layer that
//! renders routes is an external collaborator.

pub mod guard;
pub mod router;
pub mod session;
