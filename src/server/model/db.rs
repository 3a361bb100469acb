//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so the service layer
//! does not need to spell out paths into the generated `entity` crate.

/// Type alias for the advantage database model.
///
/// # Fields (from `entity::advantage::Model`)
/// - `id` - Primary key, unique advantage identifier
/// - `title` - Offer title
/// - `description` - Offer description
/// - `coins` - Cost in the platform's internal credit unit
/// - `image` - Offer image bytes
/// - `enterprise_id` - Foreign key to the publishing enterprise
/// - `created_at` - Timestamp when the offer was created
pub type AdvantageModel = entity::advantage::Model;

/// Type alias for the enterprise database model.
///
/// # Fields (from `entity::enterprise::Model`)
/// - `id` - Primary key, unique enterprise identifier
/// - `name` - Enterprise name
/// - `institution_id` - Foreign key to the affiliated institution
/// - `created_at` - Timestamp when the record was created
pub type EnterpriseModel = entity::enterprise::Model;
