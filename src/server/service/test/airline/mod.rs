use crate::server::{
    error::AppError,
    model::{
        airline::{CreateAirlineParam, UpdateAirlineParam},
        airport::AirportKey,
    },
    service::{airline::AirlineService, transaction::TxContext},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn airline(code: &str) -> CreateAirlineParam {
    CreateAirlineParam {
        airline_code: code.to_string(),
        name: format!("{} Airways", code),
        ceo: None,
        ceo_name: None,
        home_airport: None,
    }
}
