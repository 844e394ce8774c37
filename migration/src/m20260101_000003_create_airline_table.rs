use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // home_airport_id is a plain reference, integrity is checked by the services
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(pk_auto(Airline::Id))
                    .col(string_uniq(Airline::AirlineCode))
                    .col(string(Airline::Name))
                    .col(json_null(Airline::Ceo))
                    .col(string_null(Airline::CeoName))
                    .col(integer_null(Airline::HomeAirportId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airline {
    Table,
    Id,
    AirlineCode,
    Name,
    Ceo,
    CeoName,
    HomeAirportId,
}
