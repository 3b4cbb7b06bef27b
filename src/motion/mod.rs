//! Frame synthesis: turn a pose timeline (or a whole-image motion) into raster frames.

pub mod simple;
pub mod synthesizer;
