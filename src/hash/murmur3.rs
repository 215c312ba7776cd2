//! MurmurHash3, 32-bit x86 and 128-bit x64 variants.
//!
//! Both functions read blocks little-endian and produce the same values as the
//! reference `MurmurHash3_x86_32` and `MurmurHash3_x64_128` routines, so
//! hashes stored by other implementations can be recomputed bit for bit.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::hash::{murmur3_128, murmur3_32};
//!
//! assert_eq!(murmur3_32(b"", 0), 0);
//! assert_eq!(murmur3_32(b"Murmur3_32,Murmur3_32,Murmur3_32", 0), 2714439771);
//! assert_eq!(murmur3_128(b"", 0), (0, 0));
//! ```
//!
//! [`Murmur3BuildHasher`] plugs the 128-bit variant into `HashMap` and
//! friends:
//!
//! ```
//! use std::collections::HashMap;
//! use leafkit::hash::Murmur3BuildHasher;
//!
//! let mut map = HashMap::with_hasher(Murmur3BuildHasher::with_seed(42));
//! map.insert("key", 1);
//! assert_eq!(map.get("key"), Some(&1));
//! ```

use std::hash::{BuildHasher, Hasher};

const C1_32: u32 = 0xcc9e_2d51;
const C2_32: u32 = 0x1b87_3593;

const C1_64: u64 = 0x87c3_7b91_1142_53d5;
const C2_64: u64 = 0x4cf5_ad43_2745_937f;

#[inline]
fn mix_k1_32(k: u32) -> u32 {
    k.wrapping_mul(C1_32).rotate_left(15).wrapping_mul(C2_32)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Hashes `key` with 32-bit MurmurHash3.
pub fn murmur3_32(key: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = key.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= mix_k1_32(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        h ^= mix_k1_32(k);
    }

    // Length is folded in modulo 2^32, as the reference does.
    h ^= key.len() as u32;
    fmix32(h)
}

#[inline]
fn mix_k1_64(k: u64) -> u64 {
    k.wrapping_mul(C1_64).rotate_left(31).wrapping_mul(C2_64)
}

#[inline]
fn mix_k2_64(k: u64) -> u64 {
    k.wrapping_mul(C2_64).rotate_left(33).wrapping_mul(C1_64)
}

#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

#[inline]
fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}

// Little-endian fold of up to 8 tail bytes: byte i lands at bits 8*i.
#[inline]
fn fold_tail_u64(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Hashes `key` with 128-bit (x64) MurmurHash3, returning `(h1, h2)`.
pub fn murmur3_128(key: &[u8], seed: u32) -> (u64, u64) {
    let mut h1 = u64::from(seed);
    let mut h2 = u64::from(seed);

    let mut blocks = key.chunks_exact(16);
    for block in &mut blocks {
        let k1 = read_u64_le(&block[..8]);
        let k2 = read_u64_le(&block[8..]);

        h1 ^= mix_k1_64(k1);
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        h2 ^= mix_k2_64(k2);
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    // Tail bytes 9..=15 feed k2, then every tail (of any length) feeds k1
    // from its first 8 bytes.
    let tail = blocks.remainder();
    if tail.len() > 8 {
        h2 ^= mix_k2_64(fold_tail_u64(&tail[8..]));
    }
    if !tail.is_empty() {
        h1 ^= mix_k1_64(fold_tail_u64(&tail[..tail.len().min(8)]));
    }

    let len = key.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// [`Hasher`] that buffers written bytes and hashes them with
/// [`murmur3_128`] on `finish`, returning the first lane.
#[derive(Debug, Clone, Default)]
pub struct Murmur3Hasher {
    seed: u32,
    buf: Vec<u8>,
}

impl Murmur3Hasher {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            buf: Vec::new(),
        }
    }
}

impl Hasher for Murmur3Hasher {
    fn finish(&self) -> u64 {
        murmur3_128(&self.buf, self.seed).0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

/// [`BuildHasher`] producing seeded [`Murmur3Hasher`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur3BuildHasher {
    seed: u32,
}

impl Murmur3BuildHasher {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl BuildHasher for Murmur3BuildHasher {
    type Hasher = Murmur3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Murmur3Hasher::with_seed(self.seed)
    }
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    // Direct transcription of the reference tail switch with fall-through.
    fn reference_tail_128(tail: &[u8]) -> (u64, u64) {
        let mut k1 = 0u64;
        let mut k2 = 0u64;
        for (i, &byte) in tail.iter().enumerate() {
            if i >= 8 {
                k2 ^= u64::from(byte) << (8 * (i - 8));
            } else {
                k1 ^= u64::from(byte) << (8 * i);
            }
        }
        (k1, k2)
    }

    proptest! {
        /// Property: the folded tail lanes equal the byte-by-byte switch
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_tail_fold_matches_reference(tail in prop::collection::vec(any::<u8>(), 0..16)) {
            let (k1, k2) = reference_tail_128(&tail);
            prop_assert_eq!(fold_tail_u64(&tail[..tail.len().min(8)]), k1);
            let upper = if tail.len() > 8 { &tail[8..] } else { &[][..] };
            prop_assert_eq!(fold_tail_u64(upper), k2);
        }

        /// Property: split writes hash the same as one contiguous key
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_split_writes_match_whole_key(
            data in prop::collection::vec(any::<u8>(), 0..128),
            split in any::<prop::sample::Index>(),
            seed in any::<u32>(),
        ) {
            let at = split.index(data.len() + 1);
            let mut hasher = Murmur3BuildHasher::with_seed(seed).build_hasher();
            hasher.write(&data[..at]);
            hasher.write(&data[at..]);
            prop_assert_eq!(hasher.finish(), murmur3_128(&data, seed).0);
        }
    }
}
