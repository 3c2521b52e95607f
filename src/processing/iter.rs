//! Sequential address enumeration.

use super::arith::ip_inc;
use super::range::net_range;
use crate::models::{Ip, Network};

/// Iterator over consecutive addresses, both ends inclusive.
///
/// Steps with [`ip_inc`], so each address costs a byte ripple instead of a
/// full add. It stops after the last address and never wraps around.
#[derive(Debug, Clone)]
pub struct AddrIter {
    next: Option<Ip>,
    last: Ip,
}

impl AddrIter {
    /// Walk from `first` up to `last`. Both must have the same width and
    /// `first` must not be above `last`, otherwise nothing is yielded.
    pub fn new(first: Ip, last: Ip) -> AddrIter {
        let next = if first.byte_len() == last.byte_len() && first <= last {
            Some(first)
        } else {
            log::debug!("Empty address walk {first} - {last}");
            None
        };
        AddrIter { next, last }
    }
}

impl Iterator for AddrIter {
    type Item = Ip;

    fn next(&mut self) -> Option<Ip> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            let mut following = current;
            ip_inc(&mut following);
            Some(following)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(next) = self.next else {
            return (0, Some(0));
        };
        let span = u128::from_be_bytes(self.last.to_16()) - u128::from_be_bytes(next.to_16());
        match span.checked_add(1).and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Every address of `net`, from its first to its last address.
pub fn net_addresses(net: &Network) -> AddrIter {
    let (first, last) = net_range(net);
    AddrIter::new(first, last)
}
