//! Generic search engine shared by every collection.
//!
//! A [`SearchCriteria`] is compiled into a filter condition, an ordering and a
//! page window, then run against any entity. Field names are matched against
//! column names case-insensitively with underscores ignored, so the camelCase
//! wire names (`airlineCode`) resolve to snake_case columns (`airline_code`).

pub mod filter;
pub mod pagination;
pub mod sort;

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, IdenStatic, Iterable, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::search::SearchCriteria;

pub use filter::compile_filter;
pub use pagination::compile_pagination;
pub use sort::compile_sort;

/// Matching filter count together with the requested page of models.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<M> {
    pub count: u64,
    pub data: Vec<M>,
}

impl<M> SearchPage<M> {
    pub fn map<T>(self, f: impl FnMut(M) -> T) -> SearchPage<T> {
        SearchPage {
            count: self.count,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    pub fn try_map<T, E>(self, f: impl FnMut(M) -> Result<T, E>) -> Result<SearchPage<T>, E> {
        Ok(SearchPage {
            count: self.count,
            data: self.data.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}

pub struct SearchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SearchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts the records matching the criteria's filter. Sort and pagination
    /// are ignored.
    pub async fn count<E>(&self, criteria: &SearchCriteria) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
    {
        let mut query = E::find();
        if let Some(condition) = compile_filter::<E>(&criteria.filter) {
            query = query.filter(condition);
        }

        query.count(self.db).await
    }

    /// Runs the search, returning the total match count and the page.
    pub async fn search<E>(&self, criteria: &SearchCriteria) -> Result<SearchPage<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
    {
        let count = self.count::<E>(criteria).await?;

        let mut query = E::find();
        if let Some(condition) = compile_filter::<E>(&criteria.filter) {
            query = query.filter(condition);
        }
        for (column, order) in compile_sort::<E>(&criteria.sort) {
            query = query.order_by(column, order);
        }
        if let Some(window) = compile_pagination(criteria.pagination.as_ref()) {
            query = query.limit(window.limit).offset(window.offset);
        }

        let data = query.all(self.db).await?;

        Ok(SearchPage { count, data })
    }
}

/// Resolves a wire field name to a column of `E`.
pub(crate) fn resolve_column<E: EntityTrait>(field: &str) -> Option<E::Column> {
    let wanted = normalize(field);
    E::Column::iter().find(|column| normalize(column.as_str()) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
