use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonTrip::Table)
                    .if_not_exists()
                    .col(string(PersonTrip::Username))
                    .col(integer(PersonTrip::TripId))
                    .primary_key(
                        Index::create()
                            .name("pk_person_trip")
                            .col(PersonTrip::Username)
                            .col(PersonTrip::TripId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_trip_trip_id")
                    .table(PersonTrip::Table)
                    .col(PersonTrip::TripId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonTrip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PersonTrip {
    Table,
    Username,
    TripId,
}
