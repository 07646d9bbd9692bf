//! Test fixtures for collection-planner.
//!
//! Provides realistic test data including:
//! - Real Utrecht city-centre container locations (from OpenStreetMap)
//! - Builders for point records with and without coordinates

pub mod utrecht_points;

pub use utrecht_points::*;
