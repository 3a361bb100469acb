use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A connected in-memory test database.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connect to a fresh in-memory SQLite database
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Convert the test database handle into any state type constructible
    /// from it. This allows conversion to the application's `AppState`
    /// without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Execute the given table-creation statements against the database
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
