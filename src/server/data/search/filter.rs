//! Compiles filter specifications into a conjunctive condition.

use std::collections::BTreeMap;

use sea_orm::{sea_query::Expr, ColumnTrait, Condition, EntityTrait, IdenStatic, Value};

use crate::{
    model::search::{FilterOperator, FilterSpec, FilterValue},
    server::data::search::resolve_column,
};

/// Builds the AND of all filters, or `None` when there are none.
///
/// Filters resolving to the same column are merged and the later one wins, so
/// `name` and `Name` overwrite each other. A filter on a field that is not a
/// column of `E` matches nothing.
pub fn compile_filter<E: EntityTrait>(filters: &[FilterSpec]) -> Option<Condition> {
    if filters.is_empty() {
        return None;
    }

    let mut merged: BTreeMap<&'static str, (E::Column, &FilterSpec)> = BTreeMap::new();
    let mut unknown = false;
    for filter in filters {
        match resolve_column::<E>(&filter.field) {
            Some(column) => {
                merged.insert(column.as_str(), (column, filter));
            }
            None => {
                tracing::debug!("Filter on unknown field '{}' matches nothing", filter.field);
                unknown = true;
            }
        }
    }

    let condition = merged
        .into_values()
        .fold(Condition::all(), |condition, (column, filter)| {
            condition.add(compile_predicate(column, filter))
        });

    Some(if unknown {
        condition.add(Expr::cust("1 = 0"))
    } else {
        condition
    })
}

fn compile_predicate<C: ColumnTrait>(column: C, filter: &FilterSpec) -> Condition {
    let value = &filter.value;
    let predicate = match (filter.operator, value) {
        (_, FilterValue::Null) => column.is_null(),
        (FilterOperator::Eq, FilterValue::Int(_) | FilterValue::Float(_) | FilterValue::Bool(_)) => {
            column.eq(Value::from(value))
        }
        // SQLite's LIKE is case-insensitive for ASCII, which gives exact and
        // eq on text their case-insensitive whole-value semantics.
        (FilterOperator::Eq | FilterOperator::Exact, _) => column.like(value.to_pattern()),
        (FilterOperator::Contains, _) => column.contains(value.to_pattern()),
        (FilterOperator::StartsWith, _) => column.starts_with(value.to_pattern()),
        (FilterOperator::EndsWith, _) => column.ends_with(value.to_pattern()),
        (FilterOperator::Gt, _) => column.gt(Value::from(value)),
        (FilterOperator::Gte, _) => column.gte(Value::from(value)),
        (FilterOperator::Lt, _) => column.lt(Value::from(value)),
        (FilterOperator::Lte, _) => column.lte(Value::from(value)),
    };

    Condition::all().add(predicate)
}

impl From<&FilterValue> for Value {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::Null => Value::from(Option::<String>::None),
            FilterValue::Bool(b) => Value::from(*b),
            FilterValue::Int(n) => Value::from(*n),
            FilterValue::Float(n) => Value::from(*n),
            FilterValue::Text(s) => Value::from(s.clone()),
        }
    }
}
