//! `fleet-route` — route polylines and progress interpolation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`waypoint`] | `Waypoint` — a named, ordered stop                  |
//! | [`geometry`] | `RouteGeometry` — validated polyline + interpolation|
//! | [`error`]    | `RouteError`, `RouteResult<T>`                      |
//!
//! # Geometry model
//!
//! A route is an ordered polyline of waypoints.  `RouteGeometry::new` is the
//! single validation point: it sorts waypoints by their `order` field,
//! rejects anything shorter than two waypoints, and precomputes segment
//! lengths.  Once built, a geometry is immutable — a route edit builds a new
//! `RouteGeometry` and swaps it in whole, so readers never see a
//! half-updated polyline.
//!
//! Positions are addressed by **progress**: a scalar in [0, 1] meaning the
//! fraction of the route's total length already travelled.
//! `RouteGeometry::interpolate` converts progress back into a coordinate by
//! walking the segments.

pub mod error;
pub mod geometry;
pub mod waypoint;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use geometry::RouteGeometry;
pub use waypoint::Waypoint;
