use serde::{Deserialize, Serialize};

/// Envelope for write results and errors: `{ status, message }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: u16,
    pub message: String,
}

impl StatusDto {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Envelope for reads that wrap their payload: `{ status, data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDto<T> {
    pub status: u16,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountDto {
    pub count: u64,
}

/// Deserializes a PATCH field so that an absent key stays `None`, an explicit
/// `null` becomes `Some(None)` and a value becomes `Some(Some(value))`.
///
/// Must be paired with `#[serde(default)]`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
