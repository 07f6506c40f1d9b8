mod read;

pub use read::{parse_geojson, read_geojson, read_geojson_file};
