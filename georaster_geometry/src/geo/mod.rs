mod collection;
mod feature;
mod geometry;
mod types;

pub use collection::GeoCollection;
pub use feature::GeoFeature;
pub use geometry::Geometry;
pub use types::*;
