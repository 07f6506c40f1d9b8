mod coordinates;
mod polygon;
mod ring;

pub use coordinates::Coordinates;
pub use polygon::Polygon;
pub use ring::Ring;
