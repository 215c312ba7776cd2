//! Conversions between dotted-quad IPv4 strings and 32-bit integers.
//!
//! An address is valid when it splits on `.` into exactly four decimal
//! octets, each in `0..=255`. The integer form packs octets
//! most-significant-first, at shifts 24, 16, 8 and 0.
//!
//! Every failure is reported as the single [`BadIpv4Error`] kind.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::net::ipv4::{int_to_ipv4, ipv4_to_int, is_ipv4, is_ipv4_in};
//!
//! assert!(is_ipv4("192.168.1.1"));
//! assert!(!is_ipv4("192.168..1"));
//!
//! let value = ipv4_to_int("163.87.54.33").unwrap();
//! assert_eq!(int_to_ipv4(value).unwrap(), "163.87.54.33");
//! assert!(int_to_ipv4(1i64 << 32).is_err());
//!
//! assert!(is_ipv4_in("163.87.54.33", "163.87.54.32", "163.87.54.34").unwrap());
//! ```

use crate::error::BadIpv4Error;

const SEPARATOR: char = '.';
const OCTETS: usize = 4;
const SHIFTS: [u32; OCTETS] = [24, 16, 8, 0];

fn parse_octets(s: &str) -> Result<[u8; OCTETS], BadIpv4Error> {
    let mut octets = [0u8; OCTETS];
    let mut parts = s.split(SEPARATOR);
    for octet in &mut octets {
        let part = parts.next().ok_or(BadIpv4Error)?;
        *octet = part.parse().map_err(|_| BadIpv4Error)?;
    }
    if parts.next().is_some() {
        return Err(BadIpv4Error);
    }
    Ok(octets)
}

/// Returns `true` if `s` is a correct dotted-quad IPv4 address.
pub fn is_ipv4(s: &str) -> bool {
    parse_octets(s).is_ok()
}

/// Converts a dotted-quad string to its integer value.
pub fn ipv4_to_int(s: &str) -> Result<u32, BadIpv4Error> {
    let octets = parse_octets(s)?;
    Ok(octets
        .iter()
        .zip(SHIFTS)
        .fold(0u32, |acc, (&octet, shift)| acc | (u32::from(octet) << shift)))
}

/// Converts an integer to its dotted-quad string.
///
/// Accepts any integer type; values outside `0..=u32::MAX` are rejected.
pub fn int_to_ipv4<T: TryInto<u32>>(value: T) -> Result<String, BadIpv4Error> {
    let value: u32 = value.try_into().map_err(|_| BadIpv4Error)?;
    let [a, b, c, d] = SHIFTS.map(|shift| (value >> shift) as u8);
    Ok(format!("{a}.{b}.{c}.{d}"))
}

/// Returns `true` if `ip` lies in `[left, right]`, both ends included.
///
/// An empty range (`left > right`) contains nothing.
pub fn is_ipv4_in(ip: &str, left: &str, right: &str) -> Result<bool, BadIpv4Error> {
    let ip = ipv4_to_int(ip)?;
    let left = ipv4_to_int(left)?;
    let right = ipv4_to_int(right)?;
    Ok((left..=right).contains(&ip))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD: [&str; 9] = [
        "192.168.1",
        "192.168.1.1.1",
        "192.168..1",
        "192.168,1.1",
        "256.168.1.1",
        "-1.168,1.1",
        "-1.168.1.1",
        "2E.168,1.1",
        "",
    ];

    #[test]
    fn is_ipv4_accepts_dotted_quads() {
        assert!(is_ipv4("2.168.1.1"));
        assert!(is_ipv4("192.168.1.1"));
        assert!(is_ipv4("0.0.0.0"));
        assert!(is_ipv4("255.255.255.255"));
    }

    #[test]
    fn is_ipv4_rejects_malformed() {
        for s in BAD {
            assert!(!is_ipv4(s), "{s:?} should be rejected");
        }
        assert!(!is_ipv4("1.2.3.4."));
        assert!(!is_ipv4(" 1.2.3.4"));
    }

    #[test]
    fn ipv4_to_int_rejects_malformed() {
        for s in BAD {
            assert_eq!(ipv4_to_int(s), Err(BadIpv4Error), "{s:?}");
        }
    }

    #[test]
    fn ipv4_to_int_bounds() {
        assert_eq!(ipv4_to_int("0.0.0.0"), Ok(0));
        assert_eq!(
            ipv4_to_int("255.255.255.255"),
            Ok(((1u32 << 24) + (1 << 16) + (1 << 8) + 1) * 255)
        );
        assert_eq!(ipv4_to_int("1.2.3.4"), Ok(0x0102_0304));
    }

    #[test]
    fn int_to_ipv4_formats_octets() {
        assert_eq!(int_to_ipv4(0u32).unwrap(), "0.0.0.0");
        assert_eq!(int_to_ipv4(u32::MAX).unwrap(), "255.255.255.255");
        let value = ipv4_to_int("163.87.54.33").unwrap();
        assert_eq!(int_to_ipv4(value).unwrap(), "163.87.54.33");
    }

    #[test]
    fn int_to_ipv4_rejects_out_of_range() {
        assert_eq!(int_to_ipv4(-1i64), Err(BadIpv4Error));
        assert_eq!(int_to_ipv4(u64::from(u32::MAX) + 1), Err(BadIpv4Error));
        assert_eq!(int_to_ipv4(4_294_967_295i64).unwrap(), "255.255.255.255");
    }

    fn ip_in(ip: &str, left: &str, right: &str) -> bool {
        is_ipv4_in(ip, left, right).unwrap()
    }

    #[test]
    fn range_check_is_inclusive() {
        assert!(ip_in("163.87.54.33", "0.0.0.0", "255.255.255.255"));
        assert!(ip_in("0.0.0.0", "0.0.0.0", "255.255.255.255"));
        assert!(ip_in("255.255.255.255", "0.0.0.0", "255.255.255.255"));
        assert!(ip_in("163.87.54.33", "163.87.54.33", "163.87.54.33"));
        assert!(ip_in("163.87.54.33", "163.87.54.32", "163.87.54.33"));
        assert!(ip_in("163.87.54.33", "163.87.54.32", "163.87.54.34"));
        assert!(!ip_in("163.87.54.33", "163.87.54.34", "163.87.54.33"));
        assert!(!ip_in("163.87.54.33", "163.87.54.33", "163.87.54.32"));
    }

    #[test]
    fn range_check_rejects_bad_bounds() {
        assert_eq!(
            is_ipv4_in("1.1.1.1", "0.0.0", "2.2.2.2"),
            Err(BadIpv4Error)
        );
        assert_eq!(
            is_ipv4_in("1.1.1.256", "0.0.0.0", "2.2.2.2"),
            Err(BadIpv4Error)
        );
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Property: int -> string -> int is the identity
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_int_round_trip(value in any::<u32>()) {
            let text = int_to_ipv4(value).unwrap();
            prop_assert!(is_ipv4(&text));
            prop_assert_eq!(ipv4_to_int(&text), Ok(value));
        }

        /// Property: any out-of-range octet is rejected
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_out_of_range_octet_rejected(
            octets in prop::array::uniform4(0u32..=255),
            slot in 0usize..4,
            big in 256u32..100_000,
        ) {
            let mut parts = octets.map(|o| o.to_string());
            parts[slot] = big.to_string();
            prop_assert_eq!(ipv4_to_int(&parts.join(".")), Err(BadIpv4Error));
        }

        /// Property: anything but four segments is rejected
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_wrong_segment_count_rejected(
            octets in prop::collection::vec(0u8..=255, 0..10)
                .prop_filter("four segments are valid", |v| v.len() != 4),
        ) {
            let text = octets.iter().map(u8::to_string).collect::<Vec<_>>().join(".");
            prop_assert!(!is_ipv4(&text));
        }
    }
}
