//! Overlapping network detection.

use super::range::net_range;
use crate::models::Network;

/// Returns true if the two networks share at least one address.
///
/// Each base address is masked with its own mask first, then checked for
/// containment in the other network. Two CIDR blocks overlap exactly when
/// one of them contains the other's first address.
pub fn nets_overlap(net_a: &Network, net_b: &Network) -> bool {
    let (first_a, _) = net_range(net_a);
    let (first_b, _) = net_range(net_b);
    let overlap = net_a.contains(&first_b) || net_b.contains(&first_a);
    if overlap {
        log::debug!("Networks {net_a} and {net_b} overlap");
    }
    overlap
}
