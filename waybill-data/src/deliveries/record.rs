//! Raw CSV row and its conversion into a validated [`Delivery`].

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use waybill_core::{Delivery, DeliveryError, DeliveryId, lat_lon};

/// Columns every delivery file must declare.
pub(super) const COLUMNS: [&str; 6] = ["id", "lat", "lon", "name", "weight", "deadline"];

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// A required column was empty or absent.
    #[error("missing value for `{field}`")]
    MissingField {
        /// Column name.
        field: &'static str,
    },
    /// A numeric column did not parse.
    #[error("`{field}` is not a valid number: {value:?}")]
    InvalidNumber {
        /// Column name.
        field: &'static str,
        /// Raw cell text.
        value: String,
    },
    /// The row could not be decoded at all.
    #[error("malformed row: {message}")]
    Malformed {
        /// Decoder message.
        message: String,
    },
    /// The id was already used by an earlier row.
    #[error("delivery id {id} already appeared")]
    DuplicateId {
        /// Repeated id.
        id: DeliveryId,
    },
    /// The values parsed but describe an invalid delivery.
    #[error(transparent)]
    Invalid(#[from] DeliveryError),
}

#[derive(Debug, Deserialize)]
pub(super) struct RawRow {
    id: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
    name: Option<String>,
    weight: Option<String>,
    deadline: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RowError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or(RowError::MissingField { field })
}

fn number<T: FromStr>(value: Option<String>, field: &'static str) -> Result<T, RowError> {
    let text = required(value, field)?;
    text.trim()
        .parse()
        .map_err(|_| RowError::InvalidNumber { field, value: text })
}

impl RawRow {
    pub(super) fn into_delivery(self) -> Result<Delivery, RowError> {
        let id: DeliveryId = number(self.id, "id")?;
        let lat: f64 = number(self.lat, "lat")?;
        let lon: f64 = number(self.lon, "lon")?;
        let name = required(self.name, "name")?;
        let weight: f64 = number(self.weight, "weight")?;
        let deadline: u32 = number(self.deadline, "deadline")?;
        Ok(Delivery::new(
            id,
            lat_lon(lat, lon),
            name.trim(),
            weight,
            deadline,
        )?)
    }
}
