//! Server application core modules.
//!
//! This module contains all server-side functionality for the Vantage
//! application: HTTP routing, the advantage controller/service/repository
//! pipeline, configuration, and startup. The controller layer translates
//! HTTP requests into service calls, the service layer owns the business
//! rules for advantage records, and the data layer talks to the database
//! through SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
