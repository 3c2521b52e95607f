//! CIDR network value type.
//!
//! A [`Network`] pairs a base address with a mask. The base address may still
//! carry host bits; everything derived from it applies the mask first.

use super::ip::{Ip, IPV4_LEN, IPV6_LEN};
use super::mask::{Mask, IPV4_BITS, IPV6_BITS};
use crate::processing::{net_addresses, AddrIter};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;

/// A CIDR block: base address plus mask.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ip,
    mask: Mask,
}

impl Network {
    /// Pair an address with a mask, rejecting widths that do not fit.
    ///
    /// Accepted pairs: equal widths, an IPv4-mapped 16-byte address with a
    /// 4-byte mask, and a 4-byte address with a 16-byte mask whose first
    /// 12 bytes are all set.
    pub fn new(addr: Ip, mask: Mask) -> Result<Network, Box<dyn Error>> {
        let fits = match (addr, mask) {
            (Ip::V4(_), Mask::V4(_)) | (Ip::V6(_), Mask::V6(_)) => true,
            (Ip::V6(_), Mask::V4(_)) => addr.is_ipv4(),
            (Ip::V4(_), Mask::V6(_)) => mask.has_v4_prefix(),
        };
        if !fits {
            return Err(format!(
                "Malformed network: {}-byte mask does not fit address {addr}",
                mask.as_bytes().len()
            )
            .into());
        }
        Ok(Network { addr, mask })
    }

    /// Parse a network from CIDR text (e.g., "10.0.0.20/24"), keeping any
    /// host bits of the address.
    ///
    /// The part after `/` is a prefix length of the address width, or a
    /// full mask in hex ("10.0.0.0/ff00ff00") as written by `Display` for
    /// masks a prefix length cannot express.
    pub fn parse(addr_cidr: &str) -> Result<Network, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask {addr_cidr}"))?;
        let addr = Ip::new(addr)?;
        if len.len() == 2 * IPV4_LEN || len.len() == 2 * IPV6_LEN {
            return Network::new(addr, Mask::from_hex(len)?);
        }
        let len: u8 = len
            .parse()
            .map_err(|_| format!("Invalid subnet mask {len}"))?;
        let bits = match addr {
            Ip::V4(_) => IPV4_BITS,
            Ip::V6(_) => IPV6_BITS,
        };
        Network::new(addr, Mask::cidr(len, bits)?)
    }

    /// Base address as given, host bits included.
    pub fn addr(&self) -> Ip {
        self.addr
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Same mask with a new base address of a width that fits the mask.
    pub(crate) fn with_addr(&self, addr: Ip) -> Network {
        debug_assert!(
            Network::new(addr, self.mask).is_ok(),
            "{addr} does not fit mask {}",
            self.mask
        );
        Network {
            addr,
            mask: self.mask,
        }
    }

    /// Iterate over every address from the first to the last of this network.
    pub fn addresses(&self) -> AddrIter {
        net_addresses(self)
    }

    /// True if `ip` lies inside this network.
    ///
    /// An IPv4 network only contains IPv4 addresses (4-byte or mapped), an
    /// IPv6 network only contains non-IPv4 addresses.
    pub fn contains(&self, ip: &Ip) -> bool {
        if self.addr.is_ipv4() != ip.is_ipv4() {
            return false;
        }
        let base = self.addr.to_16();
        let other = ip.to_16();
        let mask = self.mask.to_16();
        (0..base.len()).all(|i| base[i] & mask[i] == other[i] & mask[i])
    }
}

/// `addr/len` when the mask is a prefix of the address width, otherwise
/// `addr/hexmask`, so that [`Network::parse`] gives back the same value.
impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.mask.size() {
            Some((ones, _)) if self.mask.as_bytes().len() == self.addr.byte_len() => {
                write!(f, "{}/{}", self.addr, ones)
            }
            _ => write!(f, "{}/{}", self.addr, self.mask),
        }
    }
}

impl std::str::FromStr for Network {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::parse(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
