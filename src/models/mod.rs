//! Domain models for IPv4 subnet attributes.
//!
//! This module contains the core data structures:
//! - [`Ipv4`] - IPv4 address with CIDR prefix length, plus the dotted-decimal codec
//! - [`Subnet`] - every attribute derived from one query
//! - [`ReservedRange`] - a reserved/special-use catalog record

mod ipv4;
mod reserved;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, format_address, group_size, ip_after_subnet, ip_before_subnet,
    mask_to_prefix, num_usable_hosts, parse_address, prefix_to_mask, Ipv4, MAX_LENGTH,
};
pub use reserved::{RangeSpec, ReservedRange};
pub use subnet::Subnet;
