//! Result shaping at the application boundary.
//!
//! Turns a computed tour into the response shape the surrounding HTTP layer
//! returns: numbered stops, a stop count, and an echo of the group filter
//! that was applied. The planner core stays pure; this module is where the
//! collaborator contract (eligibility filtering, empty short-circuit) lives.

use serde::Serialize;
use tracing::info;

use crate::point::{Point, PointRecord, filter_eligible};
use crate::tour::build_tour;

/// A point annotated with its 1-based position in the computed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub order: usize,
    pub id: String,
    pub location: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// The complete response for one optimize request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub stops: Vec<Stop>,
    pub stop_count: usize,
    /// The group filter that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Set when there was nothing to route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Numbers a tour 1-based, carrying every point attribute through unchanged.
pub fn format_stops(tour: &[&Point]) -> Vec<Stop> {
    tour.iter()
        .enumerate()
        .map(|(index, point)| Stop {
            order: index + 1,
            id: point.id.clone(),
            location: point.location.clone(),
            category: point.category.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
            group_id: point.group_id.clone(),
        })
        .collect()
}

/// Keeps the records belonging to `group`, preserving order.
///
/// `None` means no filter: all records pass. For callers whose store cannot
/// filter server-side.
pub fn filter_by_group(records: &[PointRecord], group: Option<&str>) -> Vec<PointRecord> {
    match group {
        None => records.to_vec(),
        Some(group) => records
            .iter()
            .filter(|record| record.group_id.as_deref() == Some(group))
            .cloned()
            .collect(),
    }
}

/// Plans a route over already-fetched records.
///
/// Runs the eligibility filter, short-circuits with an explanatory message
/// when nothing is routable (the tour builder is never invoked for an empty
/// set), and otherwise builds and numbers the tour. `group` is only echoed
/// into the response; records are expected to be pre-filtered, e.g. via
/// [`filter_by_group`].
pub fn plan_route(records: &[PointRecord], group: Option<&str>) -> RoutePlan {
    let eligible = filter_eligible(records);

    if eligible.is_empty() {
        info!(group = group.unwrap_or("all"), "no routable points");
        return RoutePlan {
            stops: Vec::new(),
            stop_count: 0,
            group: group.map(str::to_string),
            message: Some("no points available to route".to_string()),
        };
    }

    let tour = build_tour(&eligible);
    let stops = format_stops(&tour);
    info!(
        group = group.unwrap_or("all"),
        points = eligible.len(),
        stops = stops.len(),
        "route planned"
    );

    RoutePlan {
        stop_count: stops.len(),
        stops,
        group: group.map(str::to_string),
        message: None,
    }
}
