//! IP address value type.
//!
//! Provides [`Ip`], a fixed-width big-endian address that is either 4 bytes
//! (IPv4) or 16 bytes (IPv6, including the `::ffff:a.b.c.d` mapped form).

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Length of an IPv4 address in bytes.
pub const IPV4_LEN: usize = 4;
/// Length of an IPv6 address in bytes.
pub const IPV6_LEN: usize = 16;

/// Prefix of an IPv4 address embedded in the 16-byte form.
pub(crate) const V4_IN_V6_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// An IPv4 or IPv6 address held as big-endian bytes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Ip {
    /// 4-byte IPv4 address.
    V4([u8; IPV4_LEN]),
    /// 16-byte IPv6 address, possibly an IPv4-mapped one.
    V6([u8; IPV6_LEN]),
}

impl Ip {
    /// The IPv4 zero address `0.0.0.0`.
    pub const V4_ZERO: Ip = Ip::V4([0; IPV4_LEN]);

    /// Parse an address from text, e.g. "10.0.0.1" or "2002::1".
    ///
    /// Dotted-quad text gives [`Ip::V4`], colon-hex text gives [`Ip::V6`].
    pub fn new(addr: &str) -> Result<Ip, Box<dyn Error>> {
        let addr = addr.trim();
        let parsed: IpAddr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        Ok(Ip::from(parsed))
    }

    /// Build an address from a raw buffer of 4 or 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Ip, Box<dyn Error>> {
        match bytes.len() {
            IPV4_LEN => {
                let mut buf = [0; IPV4_LEN];
                buf.copy_from_slice(bytes);
                Ok(Ip::V4(buf))
            }
            IPV6_LEN => {
                let mut buf = [0; IPV6_LEN];
                buf.copy_from_slice(bytes);
                Ok(Ip::V6(buf))
            }
            len => Err(format!("Malformed address: length {len}, expected 4 or 16").into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Ip::V4(b) => &b[..],
            Ip::V6(b) => &b[..],
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Ip::V4(b) => &mut b[..],
            Ip::V6(b) => &mut b[..],
        }
    }

    /// Number of bytes in this address (4 or 16).
    pub fn byte_len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True if this is an IPv4 address, either 4-byte or `::ffff:` mapped.
    pub fn is_ipv4(&self) -> bool {
        match self {
            Ip::V4(_) => true,
            Ip::V6(b) => b[..12] == V4_IN_V6_PREFIX,
        }
    }

    /// The 16-byte form. IPv4 addresses are embedded with the mapped prefix.
    pub fn to_16(&self) -> [u8; IPV6_LEN] {
        match self {
            Ip::V4(b) => {
                let mut out = [0; IPV6_LEN];
                out[..12].copy_from_slice(&V4_IN_V6_PREFIX);
                out[12..].copy_from_slice(b);
                out
            }
            Ip::V6(b) => *b,
        }
    }

    /// The 4-byte form, if this address is IPv4.
    pub fn to_4(&self) -> Option<[u8; IPV4_LEN]> {
        match self {
            Ip::V4(b) => Some(*b),
            Ip::V6(b) if self.is_ipv4() => {
                let mut out = [0; IPV4_LEN];
                out.copy_from_slice(&b[12..]);
                Some(out)
            }
            Ip::V6(_) => None,
        }
    }

    /// Big-endian signed 32-bit view of an IPv4 address.
    pub fn to_i32(&self) -> Result<i32, Box<dyn Error>> {
        let b = self
            .to_4()
            .ok_or_else(|| format!("Address {self} is not IPv4"))?;
        Ok(i32::from_be_bytes(b))
    }

    /// Build a 4-byte IPv4 address from its signed 32-bit value.
    pub fn from_i32(a: i32) -> Ip {
        Ip::V4(a.to_be_bytes())
    }

    /// The 16-byte form split into (high, low) big-endian 64-bit words.
    pub fn halves(&self) -> (u64, u64) {
        let b = self.to_16();
        let mut hi = [0; 8];
        let mut lo = [0; 8];
        hi.copy_from_slice(&b[..8]);
        lo.copy_from_slice(&b[8..]);
        (u64::from_be_bytes(hi), u64::from_be_bytes(lo))
    }

    /// Build a 16-byte address from (high, low) 64-bit words.
    pub fn from_halves(hi: u64, lo: u64) -> Ip {
        let mut out = [0; IPV6_LEN];
        out[..8].copy_from_slice(&hi.to_be_bytes());
        out[8..].copy_from_slice(&lo.to_be_bytes());
        Ip::V6(out)
    }
}

impl From<Ipv4Addr> for Ip {
    fn from(addr: Ipv4Addr) -> Self {
        Ip::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Ip {
    fn from(addr: Ipv6Addr) -> Self {
        Ip::V6(addr.octets())
    }
}

impl From<IpAddr> for Ip {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(a) => a.into(),
            IpAddr::V6(a) => a.into(),
        }
    }
}

impl From<Ip> for IpAddr {
    fn from(ip: Ip) -> Self {
        match ip {
            Ip::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Ip::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

/// Dotted-quad for 4-byte addresses, colon-hex for 16-byte ones. A mapped
/// address prints as `::ffff:a.b.c.d` so the text parses back to the same
/// width.
impl std::fmt::Display for Ip {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl std::str::FromStr for Ip {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ip::new(s)
    }
}

impl Ord for Ip {
    fn cmp(&self, other: &Ip) -> Ordering {
        // 4-byte sorts before its mapped twin so Ord agrees with Eq
        self.to_16()
            .cmp(&other.to_16())
            .then_with(|| self.byte_len().cmp(&other.byte_len()))
    }
}

impl PartialOrd for Ip {
    fn partial_cmp(&self, other: &Ip) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Ip {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D>(deserializer: D) -> Result<Ip, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ip::new(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}
