use crate::{
    model::search::{FilterOperator, FilterSpec, FilterValue, SearchCriteria},
    server::{
        error::AppError,
        model::airport::{AirportKey, CreateAirportParam},
        service::{airport::AirportService, transaction::TxContext},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod read;
