//! Core trait seams for the route planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models; the planner only needs to read
//! coordinates and ask for costs.

/// Anything with a routable position.
pub trait Waypoint {
    /// Coordinates as (latitude, longitude).
    fn coordinates(&self) -> (f64, f64);
}

impl Waypoint for (f64, f64) {
    fn coordinates(&self) -> (f64, f64) {
        *self
    }
}

/// Converts two positions into a scalar cost for nearest-neighbor comparison.
///
/// Implementations must be total over finite coordinates, symmetric, and
/// return zero exactly when both positions are identical.
pub trait DistanceMetric {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

/// Picks the next stop among the unvisited remainder.
///
/// `candidates` is listed in original input order. Implementations must be
/// deterministic: the same current position and candidate list always yields
/// the same index. Returning `None` on a non-empty candidate list ends tour
/// construction early.
pub trait NextStopSelector {
    fn select_next<M: DistanceMetric>(
        &self,
        metric: &M,
        current: (f64, f64),
        candidates: &[(f64, f64)],
    ) -> Option<usize>;
}
