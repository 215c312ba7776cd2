#[cfg(feature = "concurrency")]
pub mod concurrent_map;
pub mod list;

#[cfg(feature = "concurrency")]
pub use concurrent_map::{ConcurrentMap, MapMetrics};
pub use list::{List, NodeId, is_empty_list, is_not_empty_list};
