pub mod advantage;
pub mod api;
