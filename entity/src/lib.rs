pub mod advantage;
pub mod enterprise;
pub mod institution;
pub mod prelude;
