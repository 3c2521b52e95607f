//! Network mask value type.

use super::ip::{IPV4_LEN, IPV6_LEN};
use std::error::Error;

/// Bit width of an IPv4 mask.
pub const IPV4_BITS: u8 = 32;
/// Bit width of an IPv6 mask.
pub const IPV6_BITS: u8 = 128;

/// A network mask of the same width as the address it applies to.
///
/// Arithmetic does not require the set bits to be contiguous, but only
/// canonical (prefix) masks have a [`Mask::size`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Mask {
    V4([u8; IPV4_LEN]),
    V6([u8; IPV6_LEN]),
}

impl Mask {
    /// Build a prefix mask with `ones` leading set bits out of `bits`.
    ///
    /// # Examples
    /// ```
    /// use ip_nets::models::Mask;
    /// assert_eq!(Mask::cidr(24, 32).unwrap(), Mask::V4([255, 255, 255, 0]));
    /// ```
    pub fn cidr(ones: u8, bits: u8) -> Result<Mask, Box<dyn Error>> {
        if bits != IPV4_BITS && bits != IPV6_BITS {
            return Err(format!("Invalid mask width {bits}, expected 32 or 128").into());
        }
        if ones > bits {
            return Err("Network length is too long".into());
        }
        let right_len = (bits - ones) as u32;
        if bits == IPV4_BITS {
            let mask = u32::MAX.checked_shl(right_len).unwrap_or(0);
            Ok(Mask::V4(mask.to_be_bytes()))
        } else {
            let mask = u128::MAX.checked_shl(right_len).unwrap_or(0);
            Ok(Mask::V6(mask.to_be_bytes()))
        }
    }

    /// Build a mask from a raw buffer of 4 or 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Mask, Box<dyn Error>> {
        match bytes.len() {
            IPV4_LEN => {
                let mut buf = [0; IPV4_LEN];
                buf.copy_from_slice(bytes);
                Ok(Mask::V4(buf))
            }
            IPV6_LEN => {
                let mut buf = [0; IPV6_LEN];
                buf.copy_from_slice(bytes);
                Ok(Mask::V6(buf))
            }
            len => Err(format!("Malformed mask: length {len}, expected 4 or 16").into()),
        }
    }

    /// Parse the hex form written by `Display`, 8 digits for IPv4 or 32 for
    /// IPv6 (e.g. "ff00ff00").
    pub fn from_hex(hex: &str) -> Result<Mask, Box<dyn Error>> {
        if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex mask {hex}").into());
        }
        let bytes = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| format!("Invalid hex mask {hex}: {e}"))?;
        Mask::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Mask::V4(b) => &b[..],
            Mask::V6(b) => &b[..],
        }
    }

    /// Total number of bits in the mask (32 or 128).
    pub fn bits(&self) -> u8 {
        match self {
            Mask::V4(_) => IPV4_BITS,
            Mask::V6(_) => IPV6_BITS,
        }
    }

    /// Leading ones and total bits, or `None` if the mask is not canonical.
    pub fn size(&self) -> Option<(u8, u8)> {
        let value = self.to_u128();
        let bits = self.bits() as u32;
        // left-align so both widths share the same contiguity check
        let aligned = value << (128 - bits);
        let ones = aligned.leading_ones();
        if aligned.checked_shl(ones).unwrap_or(0) != 0 {
            return None;
        }
        Some((ones as u8, bits as u8))
    }

    /// The 16-byte form. An IPv4 mask is widened with twelve `0xff` bytes
    /// so it leaves the mapped prefix untouched.
    pub fn to_16(&self) -> [u8; IPV6_LEN] {
        match self {
            Mask::V4(b) => {
                let mut out = [0xff; IPV6_LEN];
                out[12..].copy_from_slice(b);
                out
            }
            Mask::V6(b) => *b,
        }
    }

    /// True if the first 12 bytes are all set, i.e. the mask only varies in
    /// the IPv4 part of the 16-byte form.
    pub(crate) fn has_v4_prefix(&self) -> bool {
        match self {
            Mask::V4(_) => true,
            Mask::V6(b) => b[..12].iter().all(|&x| x == 0xff),
        }
    }

    fn to_u128(&self) -> u128 {
        match self {
            Mask::V4(b) => u32::from_be_bytes(*b) as u128,
            Mask::V6(b) => u128::from_be_bytes(*b),
        }
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
