//! Address value types.
//!
//! This module contains the fixed-width values every operation works on:
//! - [`Ip`] - IPv4 or IPv6 address bytes
//! - [`Mask`] - network mask bytes
//! - [`Network`] - address plus mask (a CIDR block)

mod ip;
mod mask;
mod network;

// Re-export public types
pub use ip::{Ip, IPV4_LEN, IPV6_LEN};
pub use mask::{Mask, IPV4_BITS, IPV6_BITS};
pub use network::Network;
