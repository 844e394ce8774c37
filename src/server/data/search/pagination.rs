use crate::model::search::PaginationSpec;

/// Limit and offset of one result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

/// Largest row count the store accepts for LIMIT and OFFSET (a signed 64-bit integer).
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// Computes `limit = size * page` and `offset = size * (page - 1)`.
///
/// The limit is cumulative: page 2 of size 10 may return up to 20 rows starting
/// at row 10. Page 0 yields a limit of 0. Both values are capped at [`MAX_ROWS`].
pub fn compile_pagination(pagination: Option<&PaginationSpec>) -> Option<PageWindow> {
    pagination.map(|spec| PageWindow {
        limit: spec.page_size.saturating_mul(spec.page_number).min(MAX_ROWS),
        offset: spec
            .page_size
            .saturating_mul(spec.page_number.saturating_sub(1))
            .min(MAX_ROWS),
    })
}
