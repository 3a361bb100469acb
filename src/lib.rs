//! Vantage is a student rewards platform: partner enterprises publish
//! coin-priced "advantage" offers which students enrolled at affiliated
//! institutions can browse and redeem.
//!
//! The crate is split into the server core (HTTP controllers, business
//! services, and repositories over SeaORM), the shared API models, and the
//! client-side navigation core (route table, session state, and the
//! navigation guard).

pub mod client;
pub mod model;
pub mod server;
