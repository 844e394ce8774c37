use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string(Airport::Icao))
                    .col(string(Airport::Iata))
                    .col(string(Airport::Name))
                    .col(string_null(Airport::City))
                    .col(string_null(Airport::Country))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_airport_icao_iata_unique")
                            .col(Airport::Icao)
                            .col(Airport::Iata),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Icao,
    Iata,
    Name,
    City,
    Country,
}
