//! Orchestration layer around `pool-block-core`.
//!
//! Loads named pool definitions from a TOML or JSON pools file, renders each
//! pool's subnet block, and handles the concerns the core deliberately leaves
//! out: fragment naming, ordering across pools, and assembly into one
//! `dhcpd.conf`-style artifact.

pub mod config;
pub mod fragments;

pub use config::{load_pools, PoolEntry, PoolsLoadError};
pub use fragments::{assemble, fragment_name, render_entries, PoolRenderError, RenderedPool};
