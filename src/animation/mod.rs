pub mod ease;
pub mod eyes;
mod handdrawn;
mod realistic;
pub mod timeline;
