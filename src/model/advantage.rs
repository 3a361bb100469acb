use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// An advantage offer as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdvantageDto {
    /// Identifier assigned by storage
    pub id: i32,
    /// Offer title
    pub title: String,
    /// Offer description
    pub description: String,
    /// Cost in coins, the platform's internal credit unit
    pub coins: f64,
    /// Offer image, base64-encoded
    pub image: String,
    /// The enterprise publishing the offer
    pub enterprise_id: i32,
    /// When the offer was created
    pub created_at: chrono::NaiveDateTime,
}

impl From<entity::advantage::Model> for AdvantageDto {
    fn from(model: entity::advantage::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            coins: model.coins,
            image: STANDARD.encode(&model.image),
            enterprise_id: model.enterprise_id,
            created_at: model.created_at,
        }
    }
}
