//! Image stylization applied to the source photo before animation.

pub mod blur;
pub mod comic;

pub use comic::{ComicFilter, StylizeMode, stylize};
