//! Rasterization of polygon features and the grayscale image codecs.

mod format;
mod raster;

pub use format::*;
pub use raster::{FOREGROUND, RasterParams, rasterize};
