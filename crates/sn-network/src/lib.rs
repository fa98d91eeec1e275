//! `sn-network` — building the node/link graph for a batch of intersections.
//!
//! # Generation pipeline
//!
//! ```text
//! generate(specs, connections):
//!   ① Geocode    — resolve each spec name; misses are dropped silently.
//!   ② Project    — lat/lon → local feet, origin at the first hit.
//!   ③ Build      — one center + four approach nodes, eight links each.
//!   ④ Merge      — fuse facing approaches for every recorded connection.
//! ```
//!
//! Turning movements ([`movement`]) are derived on demand from the finished
//! graph by the serializer.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`spec`]        | `IntersectionSpec`, `ApproachSpec`                   |
//! | [`loader`]      | CSV loading of specs                                 |
//! | [`naming`]      | `StreetNames`, `parse_intersection_name`             |
//! | [`node`]        | `Node`, `NodeKind`, `NodeArena`                      |
//! | [`link`]        | `Link`                                               |
//! | [`intersection`]| `Intersection`, `Connections`                        |
//! | [`network`]     | `Network` (arena + links + intersections)            |
//! | [`builder`]     | `NetworkBuilder`                                     |
//! | [`merge`]       | corridor merge                                       |
//! | [`movement`]    | left/through/right destinations                      |
//! | [`generator`]   | `NetworkGenerator`, `Generation`, `GenerationReport` |

pub mod builder;
pub mod error;
pub mod generator;
pub mod intersection;
pub mod link;
pub mod loader;
pub mod merge;
pub mod movement;
pub mod naming;
pub mod network;
pub mod node;
pub mod spec;

#[cfg(test)]
mod tests;

pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use generator::{Generation, GenerationReport, NetworkGenerator};
pub use intersection::{Connections, Intersection};
pub use link::Link;
pub use loader::{load_specs_csv, load_specs_reader};
pub use merge::{merge_corridors, MergeOutcome, MergeReport};
pub use movement::{movements, Movement, MovementTable, Turn};
pub use naming::{parse_intersection_name, StreetNames};
pub use network::Network;
pub use node::{CenterInfo, Node, NodeArena, NodeKind};
pub use spec::{ApproachSpec, IntersectionSpec};
