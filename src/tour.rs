//! Nearest-neighbor tour construction.
//!
//! Greedy baseline: start at the first point in input order, then repeatedly
//! extend the path to the closest remaining point. Solution quality is the
//! usual nearest-neighbor trade-off (no optimality guarantee), which the
//! surrounding system accepts; stronger heuristics can be slotted in through
//! [`NextStopSelector`] without touching callers.
//!
//! Complexity is O(n²) distance evaluations. Acceptable up to roughly a
//! thousand points; there is deliberately no spatial index.

use crate::distance::Euclidean;
use crate::traits::{DistanceMetric, NextStopSelector, Waypoint};

/// Always picks the unvisited point closest to the current one.
///
/// Ties go to the candidate earliest in input order: the scan keeps the first
/// minimum and only replaces it on a strictly smaller distance. Callers
/// downstream depend on that order being stable, so keep the comparison
/// strict.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl NextStopSelector for NearestNeighbor {
    fn select_next<M: DistanceMetric>(
        &self,
        metric: &M,
        current: (f64, f64),
        candidates: &[(f64, f64)],
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, &candidate) in candidates.iter().enumerate() {
            let d = metric.distance(current, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((index, d)),
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Builds a visiting order with the compatibility default: Euclidean metric
/// and nearest-neighbor selection.
///
/// Returns a permutation of the input as borrows; the input is not reordered.
/// Empty input yields an empty tour. Points must already be eligible (finite
/// coordinates); run the eligibility filter first for raw records.
pub fn build_tour<P: Waypoint>(points: &[P]) -> Vec<&P> {
    build_tour_with(points, &Euclidean, &NearestNeighbor)
}

/// Builds a visiting order with an explicit metric and selection strategy.
///
/// The first point in input order is always the starting stop. Output is
/// deterministic for a fixed input order and coordinate set.
pub fn build_tour_with<'a, P, M, S>(points: &'a [P], metric: &M, selector: &S) -> Vec<&'a P>
where
    P: Waypoint,
    M: DistanceMetric,
    S: NextStopSelector,
{
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut tour = Vec::with_capacity(points.len());
    tour.push(first);
    let mut current = first.coordinates();

    // Remaining points, kept in original input order so selector ties
    // resolve to the earliest candidate.
    let mut unvisited: Vec<&P> = points.iter().skip(1).collect();

    while !unvisited.is_empty() {
        let candidates: Vec<(f64, f64)> = unvisited
            .iter()
            .map(|point| point.coordinates())
            .collect();

        let Some(next) = selector.select_next(metric, current, &candidates) else {
            break;
        };

        let point = unvisited.remove(next);
        current = point.coordinates();
        tour.push(point);
    }

    tour
}
