//! Geometry model and GeoJSON reading for georaster.
//!
//! The geometry model is a closed tagged enum over the four geometry kinds
//! this tool consumes, so every consumption site is forced through an
//! explicit `match` and adding a kind is a compile-time event.

mod geo;
mod geojson;

pub use geo::*;
pub use geojson::*;
