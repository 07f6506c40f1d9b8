mod extent;

pub use extent::GeoExtent;
