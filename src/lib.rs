//! collection-planner core
//!
//! Builds a visiting order over geographically tagged collection points so a
//! field crew covers them in a reasonably short path. Storage, auth, and HTTP
//! handling live in the surrounding application; this crate is the pure
//! route-construction engine plus the result shaping at that boundary.

pub mod traits;
pub mod distance;
pub mod point;
pub mod tour;
pub mod route;
