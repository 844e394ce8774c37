use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AirlineStaff::Table)
                    .if_not_exists()
                    .col(string(AirlineStaff::AirlineCode))
                    .col(string(AirlineStaff::Username))
                    .primary_key(
                        Index::create()
                            .name("pk_airline_staff")
                            .col(AirlineStaff::AirlineCode)
                            .col(AirlineStaff::Username),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AirlineStaff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AirlineStaff {
    Table,
    AirlineCode,
    Username,
}
