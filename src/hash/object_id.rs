//! 12-byte unique identifiers built from time, host, process and a counter.
//!
//! ## Layout
//!
//! ```text
//!   0       4           7       9          12
//!   ┌───────┬───────────┬───────┬──────────┐
//!   │ secs  │ machine   │ pid   │ counter  │
//!   │ u32BE │ 3 bytes   │ u16BE │ u24BE    │
//!   └───────┴───────────┴───────┴──────────┘
//! ```
//!
//! - `secs`: Unix timestamp in seconds, truncated to 32 bits.
//! - `machine`: first 3 bytes of the Murmur3 hash of the host name; random
//!   bytes if the host name cannot be read.
//! - `pid`: process id truncated to 16 bits.
//! - `counter`: per-generator atomic counter, wrapping after 2^24 ids.
//!
//! Ids are very likely unique, not guaranteed unique: two hosts can share a
//! fingerprint and a wrapped counter can repeat within one second.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::hash::ObjectIdGenerator;
//!
//! let ids = ObjectIdGenerator::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//!
//! assert_ne!(a, b);
//! assert_eq!(a.machine(), b.machine());
//! assert_eq!(b.counter(), (a.counter() + 1) & 0x00ff_ffff);
//! assert_eq!(a.to_string().len(), 24);
//! ```
//!
//! ## Thread Safety
//!
//! `ObjectIdGenerator` is `Send + Sync`; share one instance per process by
//! reference or `Arc`. Each id costs one atomic increment.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ParseObjectIdError;
use crate::hash::murmur3::murmur3_128;

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// A 12-byte identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub const LEN: usize = 12;

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Seconds since the Unix epoch at generation time.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn machine(&self) -> [u8; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    pub fn pid(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    /// Parses 24 hexadecimal digits (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 * Self::LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseObjectIdError::new(s));
        }
        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16)
                .map_err(|_| ParseObjectIdError::new(s))?;
        }
        Ok(Self(bytes))
    }
}

impl From<ObjectId> for [u8; 12] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

/// Produces [`ObjectId`]s for one host and process.
#[derive(Debug)]
pub struct ObjectIdGenerator {
    machine: [u8; 3],
    pid: u16,
    counter: AtomicU32,
}

impl ObjectIdGenerator {
    /// Creates a generator fingerprinted from the host name.
    ///
    /// Never fails: when no host name can be read the fingerprint is random.
    pub fn new() -> Self {
        let machine = match read_hostname() {
            Some(host) => machine_fingerprint(&host),
            None => {
                tracing::warn!("host name unavailable, using a random machine fingerprint");
                rand::random()
            },
        };
        // Truncation to the low 16 bits is part of the layout.
        let pid = std::process::id() as u16;
        tracing::debug!(?machine, pid, "object id generator ready");
        Self::with_parts(machine, pid, 0)
    }

    /// Creates a generator from explicit parts.
    ///
    /// The first id carries `counter + 1`.
    pub fn with_parts(machine: [u8; 3], pid: u16, counter: u32) -> Self {
        Self {
            machine,
            pid,
            counter: AtomicU32::new(counter),
        }
    }

    pub fn machine(&self) -> [u8; 3] {
        self.machine
    }

    pub fn pid(&self) -> u16 {
        self.pid
    }

    /// Generates an id stamped with the current time.
    pub fn next_id(&self) -> ObjectId {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0);
        self.next_id_at(secs)
    }

    /// Generates an id stamped with `secs`.
    pub fn next_id_at(&self, secs: u32) -> ObjectId {
        let count = self
            .counter
            .fetch_add(1, Ordering::Relaxed)
            .wrapping_add(1)
            & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..7].copy_from_slice(&self.machine);
        bytes[7..9].copy_from_slice(&self.pid.to_be_bytes());
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..]);
        ObjectId(bytes)
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn machine_fingerprint(host: &str) -> [u8; 3] {
    let (h1, _) = murmur3_128(host.as_bytes(), 0);
    let digest = h1.to_be_bytes();
    [digest[0], digest[1], digest[2]]
}

fn read_hostname() -> Option<String> {
    gethostname::gethostname()
        .into_string()
        .ok()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
}
