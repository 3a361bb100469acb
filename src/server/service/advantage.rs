use sea_orm::DatabaseConnection;

use crate::server::{
    data::{advantage::AdvantageRepository, enterprise::EnterpriseRepository},
    error::{advantage::AdvantageError, Error},
    model::{advantage::NewAdvantage, db::AdvantageModel},
};

/// Business rules for creating and listing advantage offers.
pub struct AdvantageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdvantageService<'a> {
    /// Creates a new instance of [`AdvantageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate and store a new advantage offer.
    ///
    /// The image bytes must be non-empty, `coins` must coerce to a finite
    /// non-negative number, and the referenced enterprise must exist.
    pub async fn create(&self, data: NewAdvantage) -> Result<AdvantageModel, Error> {
        let advantage_repository = AdvantageRepository::new(self.db);
        let enterprise_repository = EnterpriseRepository::new(self.db);

        if data.image.is_empty() {
            return Err(AdvantageError::ImageRequired.into());
        }

        let coins = parse_coins(&data.coins)?;

        let enterprise_id: i32 = data
            .enterprise_id
            .trim()
            .parse()
            .map_err(|_| AdvantageError::InvalidEnterpriseId(data.enterprise_id.clone()))?;

        if enterprise_repository
            .get_by_id(enterprise_id)
            .await?
            .is_none()
        {
            return Err(AdvantageError::EnterpriseNotFound(enterprise_id).into());
        }

        let advantage = advantage_repository
            .create(data.title, data.description, coins, data.image, enterprise_id)
            .await?;

        Ok(advantage)
    }

    /// List every published advantage
    pub async fn list_all(&self) -> Result<Vec<AdvantageModel>, Error> {
        let advantage_repository = AdvantageRepository::new(self.db);

        Ok(advantage_repository.get_all().await?)
    }

    /// List the advantages published by a single enterprise.
    ///
    /// An unknown enterprise is an error rather than an empty list; that
    /// distinction belongs to this layer, not the controller.
    pub async fn list_by_enterprise(
        &self,
        enterprise_id: i32,
    ) -> Result<Vec<AdvantageModel>, Error> {
        let advantage_repository = AdvantageRepository::new(self.db);
        let enterprise_repository = EnterpriseRepository::new(self.db);

        if enterprise_repository
            .get_by_id(enterprise_id)
            .await?
            .is_none()
        {
            return Err(AdvantageError::EnterpriseNotFound(enterprise_id).into());
        }

        Ok(advantage_repository
            .get_by_enterprise_id(enterprise_id)
            .await?)
    }

    /// List every advantage visible to a student of the given institution,
    /// the union of offers across all affiliated enterprises
    pub async fn list_for_student(
        &self,
        institution_id: i32,
    ) -> Result<Vec<AdvantageModel>, Error> {
        let advantage_repository = AdvantageRepository::new(self.db);

        Ok(advantage_repository
            .get_by_institution_id(institution_id)
            .await?)
    }
}

/// Coerce the raw coins field into a finite, non-negative amount.
///
/// `f64::from_str` accepts "NaN", "inf", and negative values, none of
/// which is a valid price.
fn parse_coins(raw: &str) -> Result<f64, AdvantageError> {
    let coins: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AdvantageError::InvalidCoins(raw.to_string()))?;

    if !coins.is_finite() || coins < 0.0 {
        return Err(AdvantageError::InvalidCoins(raw.to_string()));
    }

    Ok(coins)
}
