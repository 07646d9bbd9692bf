//! Collection point data model and the eligibility filter.
//!
//! Stored records may lack coordinates or carry non-finite values; the tour
//! builder must never see those. `PointRecord` is the raw stored form and
//! `Point` the routable form, so "coordinates are present and finite" is a
//! fact of the type rather than a precondition callers can forget.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::Waypoint;

/// A collection point as stored by the surrounding application.
///
/// Coordinates are optional because the store accepts points before they have
/// been geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub id: String,
    /// Free-text label, e.g. a street address.
    pub location: String,
    /// Free-text tag, e.g. "glass" or "general".
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Collection group used for pre-filtering; not read by the planner core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A collection point eligible for routing: coordinates present and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: String,
    pub location: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub group_id: Option<String>,
}

impl Point {
    /// Validates a stored record into a routable point.
    ///
    /// Returns `None` when either coordinate is missing or non-finite. A NaN
    /// or infinite coordinate is never coerced to zero; the record is simply
    /// not routable.
    pub fn from_record(record: &PointRecord) -> Option<Self> {
        let latitude = record.latitude.filter(|value| value.is_finite())?;
        let longitude = record.longitude.filter(|value| value.is_finite())?;

        Some(Self {
            id: record.id.clone(),
            location: record.location.clone(),
            category: record.category.clone(),
            latitude,
            longitude,
            group_id: record.group_id.clone(),
        })
    }
}

impl Waypoint for Point {
    fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Keeps the records with present, finite coordinates, preserving order.
///
/// Every caller of the tour builder must run this (or an equivalent) first;
/// dropped records are logged at debug level with their id.
pub fn filter_eligible(records: &[PointRecord]) -> Vec<Point> {
    records
        .iter()
        .filter_map(|record| match Point::from_record(record) {
            Some(point) => Some(point),
            None => {
                debug!(id = %record.id, "skipping point without finite coordinates");
                None
            }
        })
        .collect()
}
