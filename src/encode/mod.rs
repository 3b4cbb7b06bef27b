//! Output encoders.

pub mod gif;

pub use gif::{GifSettings, encode_gif, ensure_parent_dir};
