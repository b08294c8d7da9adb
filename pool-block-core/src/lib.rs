//! Rendering primitives for ISC dhcpd subnet/pool configuration blocks.
//!
//! One [`PoolSpec`] describes a network pool (address range, failover peer,
//! lease options, static routes, free-form passthrough statements);
//! [`render_pool`] turns it into the ordered line list of exactly one
//! `subnet { ... }` block, suitable for inclusion in a `dhcpd.conf`-style
//! file. Assembling many blocks into one server configuration, fragment
//! naming, and file I/O are the caller's concern.
//!
//! Rendering is pure and fail-fast: all validation happens before the first
//! line is produced, and a malformed pool never yields partial output. The
//! output format is byte-exact by contract, since downstream consumers
//! compare rendered text verbatim.
//!
//! The only algorithmic piece is the RFC 3442 / Microsoft
//! classless-static-route codec in [`routes`], which packs each
//! (prefix, network, gateway) route into its minimal decimal octet group.

pub mod pool;
pub mod render;
pub mod routes;

pub use pool::{PoolSpec, StaticRoute, StringList};
pub use render::{render_pool, render_pool_text, RenderError};
pub use routes::{encode_route, payload_lines, significant_octets};
