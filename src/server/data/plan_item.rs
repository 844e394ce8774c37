use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::trip::{NewPlanItem, PlanItem};

pub struct PlanItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the items of a trip, numbering their positions from 0 in the
    /// given order.
    pub async fn create_many(&self, trip_id: i32, items: Vec<NewPlanItem>) -> Result<(), DbErr> {
        if items.is_empty() {
            return Ok(());
        }

        let models = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| entity::plan_item::ActiveModel {
                trip_id: ActiveValue::Set(trip_id),
                position: ActiveValue::Set(position as i32),
                airline_code: ActiveValue::Set(item.airline_code),
                origin_airport_id: ActiveValue::Set(item.origin_airport_id),
                destination_airport_id: ActiveValue::Set(item.destination_airport_id),
                departure: ActiveValue::Set(item.departure),
                ..Default::default()
            });

        entity::prelude::PlanItem::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Items of a trip in plan order.
    pub async fn find_by_trip(&self, trip_id: i32) -> Result<Vec<PlanItem>, DbErr> {
        let items = entity::prelude::PlanItem::find()
            .filter(entity::plan_item::Column::TripId.eq(trip_id))
            .order_by_asc(entity::plan_item::Column::Position)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(PlanItem::from_entity).collect())
    }

    /// Deletes every item of a trip, returning the number of deleted rows.
    pub async fn delete_by_trip(&self, trip_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanItem::delete_many()
            .filter(entity::plan_item::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Number of items departing from or arriving at the airport.
    pub async fn count_by_airport(&self, airport_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PlanItem::find()
            .filter(
                Condition::any()
                    .add(entity::plan_item::Column::OriginAirportId.eq(airport_id))
                    .add(entity::plan_item::Column::DestinationAirportId.eq(airport_id)),
            )
            .count(self.db)
            .await
    }
}
