//! Equipment-list import and per-equipment CSV export.

pub mod export;
pub mod import;
