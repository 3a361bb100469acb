use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Storage access for enterprise records.
pub struct EnterpriseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnterpriseRepository<'a> {
    /// Creates a new instance of [`EnterpriseRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an enterprise by its identifier
    ///
    /// Used by the service layer to distinguish an unknown enterprise from
    /// one with no published advantages.
    pub async fn get_by_id(
        &self,
        enterprise_id: i32,
    ) -> Result<Option<entity::enterprise::Model>, DbErr> {
        entity::prelude::Enterprise::find_by_id(enterprise_id)
            .one(self.db)
            .await
    }
}
