//! Address arithmetic: increment, offset addition, modulo and block size.

use crate::models::Ip;
use crate::models::Mask;
use std::error::Error;

/// Increment `ip` by one in place, treating its bytes as a big-endian integer.
///
/// Use this when every address in a range is needed. To only get the value
/// after n steps, use [`ip_add`] instead as it does not ripple n times.
///
/// The carry runs over the whole buffer and wraps silently, so the maximum
/// address becomes all zeros. On a mapped IPv4 address (`::ffff:a.b.c.d`)
/// the carry out of `255.255.255.255` runs into the `::ffff:` prefix and the
/// result is no longer IPv4. Use the 4-byte form to wrap to `0.0.0.0`.
pub fn ip_inc(ip: &mut Ip) {
    for b in ip.as_bytes_mut().iter_mut().rev() {
        *b = b.wrapping_add(1);
        if *b > 0 {
            return;
        }
    }
    log::trace!("ip_inc wrapped around to {ip}");
}

/// Return `ip` moved by `offset` addresses. The input is not modified.
///
/// IPv4 addresses wrap modulo 2^32 and come back in 4-byte form. IPv6
/// addresses are added as two 64-bit words with carry (and borrow, for
/// negative offsets) between them, wrapping modulo 2^128.
pub fn ip_add(ip: &Ip, offset: i64) -> Ip {
    if add_wraps(ip, offset) {
        log::trace!("ip_add({ip}, {offset}) wrapped around");
    }
    if let Some(b) = ip.to_4() {
        let a = i32::from_be_bytes(b) as i64;
        // truncating back to 32 bits wraps like signed 32-bit overflow
        return Ip::from_i32(a.wrapping_add(offset) as i32);
    }

    let (mut hi, mut lo) = ip.halves();
    let o = offset as u64;
    if u64::MAX - lo < o {
        hi = hi.wrapping_add(1);
    }
    lo = lo.wrapping_add(o);
    if offset < 0 {
        // sign extension of the offset into the high word
        hi = hi.wrapping_add(u64::MAX);
    }
    Ip::from_halves(hi, lo)
}

/// True if moving `ip` by `offset` leaves the 32-bit (IPv4) or 128-bit
/// address space and wraps.
fn add_wraps(ip: &Ip, offset: i64) -> bool {
    match ip.to_4() {
        Some(b) => {
            let sum = u32::from_be_bytes(b) as i128 + offset as i128;
            !(0..=u32::MAX as i128).contains(&sum)
        }
        None => {
            let value = u128::from_be_bytes(ip.to_16());
            let step = offset.unsigned_abs() as u128;
            if offset < 0 {
                value.checked_sub(step).is_none()
            } else {
                value.checked_add(step).is_none()
            }
        }
    }
}

/// Calculate `ip % d`.
///
/// The IPv4 path takes the signed 32-bit view of the address and sign-extends
/// it before the unsigned modulo, so addresses from `128.0.0.0` up reduce as
/// `2^64 + value - 2^32`. The IPv6 path reduces `hi * 2^64 + lo` using
/// `2^64 mod d == (0 - d) mod d` in wrapping 64-bit arithmetic; the product
/// of the two residues may itself wrap for divisors above 2^32.
pub fn ip_mod(ip: &Ip, d: u64) -> Result<u64, Box<dyn Error>> {
    if d == 0 {
        return Err(format!("Modulo by zero for address {ip}").into());
    }
    if let Some(b) = ip.to_4() {
        return Ok((i32::from_be_bytes(b) as i64 as u64) % d);
    }
    let (hi, lo) = ip.halves();
    let two_64 = 0u64.wrapping_sub(d) % d;
    Ok((hi % d).wrapping_mul(two_64).wrapping_add(lo % d) % d)
}

/// Number of addresses in a block with mask `m`, i.e. `2^(bits - ones)`.
///
/// Fails for non-canonical masks and for an IPv6 `/0`, whose 2^128
/// addresses do not fit in a `u128`.
pub fn ip_mask_count(m: &Mask) -> Result<u128, Box<dyn Error>> {
    let (ones, bits) = m
        .size()
        .ok_or_else(|| format!("Mask {m} is not a prefix mask"))?;
    let host_bits = (bits - ones) as u32;
    1u128
        .checked_shl(host_bits)
        .ok_or_else(|| format!("Address count 2^{host_bits} does not fit in u128").into())
}
