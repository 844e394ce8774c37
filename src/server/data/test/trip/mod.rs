use crate::server::{
    data::{plan_item::PlanItemRepository, trip::TripRepository},
    model::trip::{NewPlanItem, NewTrip, TripChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod plan_item;
