//! Network address helpers.

pub mod ipv4;

pub use ipv4::{int_to_ipv4, ipv4_to_int, is_ipv4, is_ipv4_in};
