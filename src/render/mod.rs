//! CPU rasterization: vector overlays through `vello_cpu`, plus the pixel helpers the
//! frame compositor needs.

pub mod canvas;
pub mod composite;
pub mod cpu;
pub mod overlays;
pub mod paint;
pub mod shapes;
pub mod smear;
