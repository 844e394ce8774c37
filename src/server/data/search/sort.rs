use sea_orm::{EntityTrait, IdenStatic, Order};

use crate::{
    model::search::{SortDirection, SortSpec},
    server::data::search::resolve_column,
};

/// Compiles sort keys in order of first appearance.
///
/// Sort keys resolving to the same column are merged: the column keeps its
/// original position and takes the later direction. Fields that are not columns
/// of `E` are skipped.
pub fn compile_sort<E: EntityTrait>(sorts: &[SortSpec]) -> Vec<(E::Column, Order)> {
    let mut merged: Vec<(E::Column, SortDirection)> = Vec::new();
    for sort in sorts {
        let Some(column) = resolve_column::<E>(&sort.field) else {
            continue;
        };
        match merged
            .iter_mut()
            .find(|(known, _)| known.as_str() == column.as_str())
        {
            Some(entry) => entry.1 = sort.direction,
            None => merged.push((column, sort.direction)),
        }
    }

    merged
        .into_iter()
        .map(|(column, direction)| (column, direction.into()))
        .collect()
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}
