//! Single-address helpers: classification, copying and ordering.

use crate::models::Ip;

/// Returns true if `ip` is an IPv4 address.
///
/// Both the 4-byte form and the 16-byte `::ffff:a.b.c.d` mapped form count.
pub fn is_ipv4(ip: &Ip) -> bool {
    ip.is_ipv4()
}

/// Make an independent copy of `ip`. A missing address copies as `0.0.0.0`.
pub fn copy_ip(ip: Option<&Ip>) -> Ip {
    match ip {
        Some(ip) => *ip,
        None => Ip::V4_ZERO,
    }
}

/// Returns true if `a` is numerically smaller than `b`.
///
/// Both sides are compared in 16-byte form, so `10.0.0.1` and
/// `::ffff:10.0.0.1` are equal here and neither is less than the other.
pub fn ip_less_than(a: &Ip, b: &Ip) -> bool {
    let a = a.to_16();
    let b = b.to_16();
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return x < y;
        }
    }
    false
}
