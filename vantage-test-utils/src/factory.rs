//! Fixture factories inserting records directly through the entity layer.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Bytes standing in for an uploaded image in fixtures (a PNG signature).
pub static TEST_IMAGE: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// Insert an institution fixture
pub async fn insert_institution(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::institution::Model, TestError> {
    let institution = entity::institution::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(institution.insert(db).await?)
}

/// Insert an enterprise fixture affiliated with the given institution
pub async fn insert_enterprise(
    db: &DatabaseConnection,
    institution_id: i32,
    name: &str,
) -> Result<entity::enterprise::Model, TestError> {
    let enterprise = entity::enterprise::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        institution_id: ActiveValue::Set(institution_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(enterprise.insert(db).await?)
}

/// Insert an advantage fixture published by the given enterprise
pub async fn insert_advantage(
    db: &DatabaseConnection,
    enterprise_id: i32,
    title: &str,
    coins: f64,
) -> Result<entity::advantage::Model, TestError> {
    let advantage = entity::advantage::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(format!("{} description", title)),
        coins: ActiveValue::Set(coins),
        image: ActiveValue::Set(TEST_IMAGE.to_vec()),
        enterprise_id: ActiveValue::Set(enterprise_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(advantage.insert(db).await?)
}
