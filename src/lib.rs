//! Electrical load calculation for industrial workshops.
//!
//! Derives per-equipment power and current, then aggregates a group of
//! equipment and the whole workshop into design loads using the reference
//! coefficient tables.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod equipment;
pub mod error;
pub mod io;
pub mod load;
pub mod logging;
