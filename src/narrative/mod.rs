//! Text-driven animation: keyword parsing, frame budgeting and prop overlays.

pub mod composer;
pub mod keywords;
pub mod parser;
pub mod props;
