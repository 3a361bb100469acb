//! Declarative test builder.
//!
//! Configuration methods are chained and everything is executed during the
//! final `build()` call, which yields a connected [`TestSetup`].

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_advantage_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_advantage_tables: false,
        }
    }

    /// Add the institution, enterprise, and advantage tables, in
    /// foreign-key order.
    pub fn with_advantage_tables(mut self) -> Self {
        self.include_advantage_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to an in-memory database and create the configured tables.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let test = TestSetup::new().await?;

        let mut tables = Vec::new();

        if self.include_advantage_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Institution));
            tables.push(schema.create_table_from_entity(entity::prelude::Enterprise));
            tables.push(schema.create_table_from_entity(entity::prelude::Advantage));
        }

        tables.extend(self.tables);

        test.with_tables(tables).await?;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
