use serde::{Deserialize, Serialize};

/// Declarative search request accepted by every `/search` endpoint.
///
/// All parts are optional on the wire: a missing `filter` matches everything, a
/// missing `sort` leaves the order unspecified and a missing `pagination` returns
/// every match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub sort: Vec<SortSpec>,
    #[serde(default)]
    pub filter: Vec<FilterSpec>,
    #[serde(default)]
    pub pagination: Option<PaginationSpec>,
}

#[cfg(test)]
impl SearchCriteria {
    /// Criteria carrying only the given filters.
    pub fn filtered(filter: Vec<FilterSpec>) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn with_pagination(mut self, page_size: u64, page_number: u64) -> Self {
        self.pagination = Some(PaginationSpec {
            page_size,
            page_number,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

#[cfg(test)]
impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: String,
    #[serde(default)]
    pub operator: FilterOperator,
    pub value: FilterValue,
}

#[cfg(test)]
impl FilterSpec {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// Comparison applied by a [`FilterSpec`].
///
/// A missing or unrecognised operator deserializes to [`FilterOperator::Exact`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Eq,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    #[default]
    #[serde(other)]
    Exact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FilterValue {
    /// Text used when the value is matched as a pattern.
    pub fn to_pattern(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSpec {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_page_number")]
    pub page_number: u64,
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_number: default_page_number(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_page_number() -> u64 {
    1
}

/// Result of a search: `totalCount` is the number of filter matches, `data` the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto<T> {
    pub total_count: u64,
    pub data: Vec<T>,
}
