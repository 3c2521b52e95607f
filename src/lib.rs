//! IP address arithmetic for IPv4 and IPv6.
//!
//! Increment and offset addresses, reduce them modulo a divisor, compare
//! them, and derive the first/last address of a CIDR network. All
//! operations are pure except [`ip_inc`], which updates its argument.
//!
//! ```
//! use ip_nets::models::Network;
//! use ip_nets::{ip_add, ip_mask_count, net_range};
//!
//! let net = Network::parse("2002::1234/124").unwrap();
//! let (first, last) = net_range(&net);
//! assert_eq!(ip_add(&first, 15), last);
//! assert_eq!(ip_mask_count(&net.mask()).unwrap(), 16);
//! ```

pub mod logging;
pub mod models;
pub mod processing;

pub use processing::{
    copy_ip, ip_add, ip_inc, ip_less_than, ip_mask_count, ip_mod, ip_net_net, is_ipv4,
    net_addresses, net_range, nets_overlap, AddrIter,
};
