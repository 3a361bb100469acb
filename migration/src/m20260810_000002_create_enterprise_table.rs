use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_institution_table::Institution;

static FK_ENTERPRISE_INSTITUTION_ID: &str = "fk_enterprise_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enterprise::Table)
                    .if_not_exists()
                    .col(pk_auto(Enterprise::Id))
                    .col(string(Enterprise::Name))
                    .col(integer(Enterprise::InstitutionId))
                    .col(timestamp(Enterprise::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENTERPRISE_INSTITUTION_ID)
                    .from_tbl(Enterprise::Table)
                    .from_col(Enterprise::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENTERPRISE_INSTITUTION_ID)
                    .table(Enterprise::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enterprise::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Enterprise {
    Table,
    Id,
    Name,
    InstitutionId,
    CreatedAt,
}
