//! Migration: Create the sweets table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sweets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sweets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sweets::Name).string().not_null())
                    .col(ColumnDef::new(Sweets::Category).string().not_null())
                    .col(ColumnDef::new(Sweets::Price).double().not_null())
                    .col(
                        ColumnDef::new(Sweets::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sweets_name")
                    .table(Sweets::Table)
                    .col(Sweets::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sweets_category")
                    .table(Sweets::Table)
                    .col(Sweets::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sweets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sweets {
    Table,
    Id,
    Name,
    Category,
    Price,
    Quantity,
}
