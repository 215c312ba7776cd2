//! Non-cryptographic hashing and unique id generation.

pub mod murmur3;
pub mod object_id;

pub use murmur3::{Murmur3BuildHasher, Murmur3Hasher, murmur3_32, murmur3_128};
pub use object_id::{ObjectId, ObjectIdGenerator};
