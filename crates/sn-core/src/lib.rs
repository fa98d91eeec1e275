//! `sn-core` — foundational types for the synchro-net generator.
//!
//! This crate is a dependency of every other `sn-*` crate.  It has no `sn-*`
//! dependencies and only `thiserror` and `serde` externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `IntersectionIdx`                           |
//! | [`direction`]   | `Direction` (NB/SB/EB/WB) and its rotation tables     |
//! | [`geo`]         | `GeoPoint`, `LocalPoint`                              |
//! | [`projection`]  | `LocalProjector` (lat/lon → local feet)               |
//! | [`config`]      | `GeneratorConfig`                                     |
//! | [`error`]       | `SnError`, `SnResult`                                 |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod projection;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GeneratorConfig;
pub use direction::Direction;
pub use error::{SnError, SnResult};
pub use geo::{GeoPoint, LocalPoint};
pub use ids::{IntersectionIdx, NodeId};
pub use projection::LocalProjector;
