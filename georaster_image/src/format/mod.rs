pub mod pgm;
pub mod png;
