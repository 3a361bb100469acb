use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Storage access for advantage records.
pub struct AdvantageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdvantageRepository<'a> {
    /// Creates a new instance of [`AdvantageRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new advantage published by the given enterprise
    ///
    /// The image bytes are passed by value; storage takes ownership and no
    /// reference is retained after the insert returns.
    pub async fn create(
        &self,
        title: String,
        description: String,
        coins: f64,
        image: Vec<u8>,
        enterprise_id: i32,
    ) -> Result<entity::advantage::Model, DbErr> {
        let advantage = entity::advantage::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            coins: ActiveValue::Set(coins),
            image: ActiveValue::Set(image),
            enterprise_id: ActiveValue::Set(enterprise_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        advantage.insert(self.db).await
    }

    /// Get every stored advantage
    pub async fn get_all(&self) -> Result<Vec<entity::advantage::Model>, DbErr> {
        entity::prelude::Advantage::find().all(self.db).await
    }

    /// Get all advantages published by the given enterprise
    pub async fn get_by_enterprise_id(
        &self,
        enterprise_id: i32,
    ) -> Result<Vec<entity::advantage::Model>, DbErr> {
        entity::prelude::Advantage::find()
            .filter(entity::advantage::Column::EnterpriseId.eq(enterprise_id))
            .all(self.db)
            .await
    }

    /// Get all advantages published by enterprises affiliated with the
    /// given institution
    ///
    /// Resolves the institution → enterprises → advantages join in a
    /// single query.
    pub async fn get_by_institution_id(
        &self,
        institution_id: i32,
    ) -> Result<Vec<entity::advantage::Model>, DbErr> {
        entity::prelude::Advantage::find()
            .inner_join(entity::enterprise::Entity)
            .filter(entity::enterprise::Column::InstitutionId.eq(institution_id))
            .all(self.db)
            .await
    }
}
