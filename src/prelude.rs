pub use crate::config::Config;
#[cfg(feature = "concurrency")]
pub use crate::ds::{ConcurrentMap, MapMetrics};
pub use crate::ds::{List, NodeId, is_empty_list, is_not_empty_list};
pub use crate::error::{BadIpv4Error, ConfigError, ParseObjectIdError};
pub use crate::hash::{
    Murmur3BuildHasher, Murmur3Hasher, ObjectId, ObjectIdGenerator, murmur3_32, murmur3_128,
};
pub use crate::net::{int_to_ipv4, ipv4_to_int, is_ipv4, is_ipv4_in};
