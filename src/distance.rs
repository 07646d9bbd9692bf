//! Flat-plane Euclidean distance over raw coordinates.
//!
//! Treats latitude/longitude as a 2-D plane with no geodesic correction.
//! Known limitation: degrees of longitude shrink toward the poles, so this is
//! not metrically accurate over large spans. It is monotonic enough for
//! relative nearest-point comparisons at city scale, and the surrounding
//! system depends on exactly this metric, so do not swap in haversine here:
//! that changes the computed order for some inputs.

use crate::traits::DistanceMetric;

/// Euclidean distance on raw (latitude, longitude) pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;
        ((lat1 - lat2).powi(2) + (lng1 - lng2).powi(2)).sqrt()
    }
}
