use crate::server::{
    data::airport::AirportRepository,
    model::airport::{AirportKey, CreateAirportParam, UpdateAirportParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod update;
