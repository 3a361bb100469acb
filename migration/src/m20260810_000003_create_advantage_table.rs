use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_create_enterprise_table::Enterprise;

static FK_ADVANTAGE_ENTERPRISE_ID: &str = "fk_advantage_enterprise_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advantage::Table)
                    .if_not_exists()
                    .col(pk_auto(Advantage::Id))
                    .col(string(Advantage::Title))
                    .col(text(Advantage::Description))
                    .col(double(Advantage::Coins))
                    .col(blob(Advantage::Image))
                    .col(integer(Advantage::EnterpriseId))
                    .col(timestamp(Advantage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADVANTAGE_ENTERPRISE_ID)
                    .from_tbl(Advantage::Table)
                    .from_col(Advantage::EnterpriseId)
                    .to_tbl(Enterprise::Table)
                    .to_col(Enterprise::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ADVANTAGE_ENTERPRISE_ID)
                    .table(Advantage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Advantage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Advantage {
    Table,
    Id,
    Title,
    Description,
    Coins,
    Image,
    EnterpriseId,
    CreatedAt,
}
