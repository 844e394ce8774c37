use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanItem::Id))
                    .col(integer(PlanItem::TripId))
                    .col(integer(PlanItem::Position))
                    .col(string(PlanItem::AirlineCode))
                    .col(integer(PlanItem::OriginAirportId))
                    .col(integer(PlanItem::DestinationAirportId))
                    .col(timestamp_with_time_zone_null(PlanItem::Departure))
                    .index(
                        Index::create()
                            .name("idx_plan_item_trip_id")
                            .col(PlanItem::TripId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanItem {
    Table,
    Id,
    TripId,
    Position,
    AirlineCode,
    OriginAirportId,
    DestinationAirportId,
    Departure,
}
