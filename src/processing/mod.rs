//! Address and network operations.
//!
//! This module contains the stateless operations on the [`crate::models`] types:
//! - [`addr`] - Classification, copying and ordering of single addresses
//! - [`arith`] - Increment, offset addition, modulo and block size
//! - [`range`] - First/last address of a network and normalization
//! - [`overlap`] - Overlap detection between two networks
//! - [`iter`] - Sequential enumeration of a network's addresses

mod addr;
mod arith;
mod iter;
mod overlap;
mod range;

// Re-export public functions
pub use addr::{copy_ip, ip_less_than, is_ipv4};
pub use arith::{ip_add, ip_inc, ip_mask_count, ip_mod};
pub use iter::{net_addresses, AddrIter};
pub use overlap::nets_overlap;
pub use range::{ip_net_net, net_range};
