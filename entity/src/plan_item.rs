use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "plan_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Business key of the owning trip.
    pub trip_id: i32,
    pub position: i32,
    pub airline_code: String,
    pub origin_airport_id: i32,
    pub destination_airport_id: i32,
    pub departure: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
