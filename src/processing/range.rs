//! Network range derivation.
//!
//! Derives the first (network) and last (broadcast) address of a
//! [`Network`], and normalizes a network to its base address.

use crate::models::{Ip, Network};

/// Return the first and last address of `net`.
///
/// `first` has all host bits cleared, `last` has them all set. If the
/// network address is IPv4 both results come back in 4-byte form; if either
/// result cannot be written in 4 bytes (the mask reaches into the mapped
/// prefix) both stay in 16-byte form.
///
/// # Examples
/// ```
/// use ip_nets::models::{Ip, Network};
/// use ip_nets::net_range;
///
/// let net = Network::parse("10.0.0.20/24").unwrap();
/// let (first, last) = net_range(&net);
/// assert_eq!(first, Ip::new("10.0.0.0").unwrap());
/// assert_eq!(last, Ip::new("10.0.0.255").unwrap());
/// ```
pub fn net_range(net: &Network) -> (Ip, Ip) {
    let addr = net.addr().to_16();
    let mask = net.mask().to_16();

    let first: [u8; 16] = std::array::from_fn(|i| addr[i] & mask[i]);
    let last: [u8; 16] = std::array::from_fn(|i| first[i] | !mask[i]);
    let (first, last) = (Ip::V6(first), Ip::V6(last));
    log::debug!("net_range({net}) = {first} - {last}");

    if net.addr().is_ipv4() {
        match (first.to_4(), last.to_4()) {
            (Some(f), Some(l)) => return (Ip::V4(f), Ip::V4(l)),
            _ => log::warn!("Range of {net} leaves the IPv4 space, keeping 16-byte form"),
        }
    }
    (first, last)
}

/// Return `net` with its base address replaced by the first address of the
/// range, e.g. `10.0.0.20/24` becomes `10.0.0.0/24`. The mask is unchanged.
pub fn ip_net_net(net: &Network) -> Network {
    let (first, _) = net_range(net);
    net.with_addr(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mask;

    fn ip(s: &str) -> Ip {
        Ip::new(s).unwrap()
    }

    fn net(s: &str) -> Network {
        Network::parse(s).unwrap()
    }

    #[test]
    fn test_net_range_ipv6() {
        let (first, last) = net_range(&net("2002:0000:0000:1234:abcd:ffff:c0a8:0100/124"));
        assert_eq!(first, ip("2002:0:0:1234:abcd:ffff:c0a8:100"));
        assert_eq!(last, ip("2002:0:0:1234:abcd:ffff:c0a8:10f"));
    }

    #[test]
    fn test_net_range_ipv4() {
        let (first, last) = net_range(&net("192.168.1.42/24"));
        assert_eq!(first, Ip::V4([192, 168, 1, 0]));
        assert_eq!(last, Ip::V4([192, 168, 1, 255]));

        let (first, last) = net_range(&net("10.2.3.4/32"));
        assert_eq!((first, last), (ip("10.2.3.4"), ip("10.2.3.4")));

        let (first, last) = net_range(&net("10.2.3.4/0"));
        assert_eq!((first, last), (ip("0.0.0.0"), ip("255.255.255.255")));
    }

    #[test]
    fn test_net_range_mapped_narrows() {
        let mapped = Network::new(ip("::ffff:10.1.1.9"), Mask::cidr(24, 32).unwrap()).unwrap();
        let (first, last) = net_range(&mapped);
        assert_eq!(first, Ip::V4([10, 1, 1, 0]));
        assert_eq!(last, Ip::V4([10, 1, 1, 255]));

        let wide_mask = Network::new(ip("::ffff:10.1.1.9"), Mask::cidr(112, 128).unwrap()).unwrap();
        assert_eq!(
            net_range(&wide_mask),
            (Ip::V4([10, 1, 0, 0]), Ip::V4([10, 1, 255, 255]))
        );
    }

    #[test]
    fn test_net_range_mapped_outside_ipv4() {
        let short = Network::new(ip("::ffff:10.1.1.9"), Mask::cidr(64, 128).unwrap()).unwrap();
        let (first, last) = net_range(&short);
        assert_eq!(first, ip("::"));
        assert_eq!(last, ip("::ffff:ffff:ffff:ffff"));
        assert_eq!(first.byte_len(), 16);
        assert_eq!(last.byte_len(), 16);
    }

    #[test]
    fn test_net_range_non_canonical_mask() {
        let odd = Network::new(ip("10.20.30.40"), Mask::V4([255, 0, 255, 0])).unwrap();
        assert_eq!(
            net_range(&odd),
            (ip("10.0.30.0"), ip("10.255.30.255"))
        );
    }

    #[test]
    fn test_ip_net_net() {
        let base = ip_net_net(&net("10.0.0.20/24"));
        assert_eq!(base, net("10.0.0.0/24"));
        assert_eq!(base.mask(), Mask::cidr(24, 32).unwrap());

        let base6 = ip_net_net(&net("2002::1234/112"));
        assert_eq!(base6, net("2002::/112"));

        // already normalized
        assert_eq!(ip_net_net(&base), base);
    }

    #[test]
    fn test_ip_net_net_mixed_widths() {
        let wide = Mask::V6(Mask::cidr(24, 32).unwrap().to_16());
        let base = ip_net_net(&Network::new(ip("10.0.0.20"), wide).unwrap());
        assert_eq!(base.addr(), Ip::V4([10, 0, 0, 0]));
        assert!(Network::new(base.addr(), base.mask()).is_ok());

        let mapped = Network::new(ip("::ffff:10.1.1.9"), Mask::cidr(24, 32).unwrap()).unwrap();
        let base = ip_net_net(&mapped);
        assert_eq!(base.addr(), Ip::V4([10, 1, 1, 0]));
        assert!(Network::new(base.addr(), base.mask()).is_ok());

        let short = Network::new(ip("::ffff:10.1.1.9"), Mask::cidr(64, 128).unwrap()).unwrap();
        assert_eq!(ip_net_net(&short).addr(), ip("::"));
    }

    #[test]
    fn test_ip_net_net_mapped_odd_mask() {
        let mut m = [0u8; 16];
        m[10..].copy_from_slice(&[0xff; 6]);
        let odd = Network::new(ip("::ffff:10.0.0.1"), Mask::V6(m)).unwrap();
        let base = ip_net_net(&odd);
        assert_eq!(base.addr(), ip("::ffff:10.0.0.1"));
        assert_eq!(base.mask(), Mask::V6(m));
    }
}
