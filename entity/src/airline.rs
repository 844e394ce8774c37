use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "airline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub airline_code: String,
    pub name: String,
    /// Copy of the CEO's person record taken at write time.
    #[sea_orm(column_type = "Json", nullable)]
    pub ceo: Option<Json>,
    pub ceo_name: Option<String>,
    /// Store id of the airline's home airport.
    pub home_airport_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
