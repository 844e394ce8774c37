use crate::{
    model::search::{FilterOperator, FilterSpec, FilterValue, SearchCriteria, SortSpec},
    server::data::search::SearchRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod filter;
mod paginate;
