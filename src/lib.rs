//! leafkit: small standalone utilities.
//!
//! Each module stands on its own:
//!
//! - [`config`]: flat `key=value` configuration files with env fallback.
//! - [`ds`]: a reader-writer-locked [`ConcurrentMap`](ds::ConcurrentMap) and
//!   a slab-backed doubly linked [`List`](ds::List).
//! - [`hash`]: Murmur3 (32-bit and 128-bit) and 12-byte object ids.
//! - [`net`]: IPv4 string/integer conversions.
//! - [`slice`]: generic map/filter/find/join helpers.

pub mod config;
pub mod ds;
pub mod error;
pub mod hash;
pub mod net;
pub mod prelude;
pub mod slice;
