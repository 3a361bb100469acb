//! Test support for the Vantage workspace: an in-memory database setup,
//! a declarative builder for test tables, and fixture factories for the
//! advantage domain.

pub mod builder;
pub mod error;
pub mod factory;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestError, TestSetup};
}
