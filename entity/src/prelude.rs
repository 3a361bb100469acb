pub use super::advantage::Entity as Advantage;
pub use super::enterprise::Entity as Enterprise;
pub use super::institution::Entity as Institution;
