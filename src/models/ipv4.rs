//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an address paired with a prefix length, the dotted-decimal
//! codec used by input validation and the catalog, and the subnet arithmetic helpers
//! the [`Subnet`](super::Subnet) report is built from.

use crate::error::{InputError, Result};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse one canonical decimal octet: digits only, no leading zero except "0", at most 255.
fn parse_octet(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 3 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)?;
    }
    Some(octets)
}

/// Parse dotted-decimal text into an address.
///
/// # Examples
/// ```
/// use ip_attributes::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_address("10.0.0.01").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    parse_octets(text)
        .map(Ipv4Addr::from)
        .ok_or(InputError::InvalidAddressFormat)
}

/// Canonical dotted-decimal form of an address.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_attributes::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(InputError::InvalidMaskFormat);
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    Ok(((all_bits >> right_len) << right_len) as u32)
}

/// Convert a dotted subnet mask (e.g. "255.255.224.0") to its prefix length.
///
/// The mask must be contiguous ones followed by zeros.
pub fn mask_to_prefix(text: &str) -> Result<u8> {
    let bits = parse_octets(text.trim())
        .map(u32::from_be_bytes)
        .ok_or(InputError::InvalidMaskFormat)?;
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() != MAX_LENGTH as u32 {
        log::debug!("mask {text} is not contiguous: {bits:032b}");
        return Err(InputError::InvalidMaskFormat);
    }
    Ok(ones as u8)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(ipv4: Ipv4) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(ipv4.addr) & ipv4.bits)
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(ipv4: Ipv4) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(ipv4.addr) & ipv4.bits) | !ipv4.bits)
}

/// Number of addresses in a block of the given prefix length, 2^(32 - len).
pub fn group_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Number of assignable host addresses for a prefix length.
///
/// /31 is a point-to-point link with both addresses usable, /32 a single host route.
pub fn num_usable_hosts(len: u8) -> u64 {
    match len {
        32.. => 0,
        31 => 2,
        _ => group_size(len) - 2,
    }
}

/// Network address of the block following this one, `None` past 255.255.255.255.
pub fn ip_after_subnet(ipv4: Ipv4) -> Option<Ipv4Addr> {
    let network = u32::from(cut_addr(ipv4)) as u64;
    let next_bits = network + group_size(ipv4.mask);
    u32::try_from(next_bits).ok().map(Ipv4Addr::from)
}

/// Network address of the block preceding this one, `None` below 0.0.0.0.
pub fn ip_before_subnet(ipv4: Ipv4) -> Option<Ipv4Addr> {
    let network = u32::from(cut_addr(ipv4)) as u64;
    network
        .checked_sub(group_size(ipv4.mask))
        .and_then(|bits| u32::try_from(bits).ok())
        .map(Ipv4Addr::from)
}

/// IPv4 address with CIDR prefix length.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
    // prefix_to_mask(mask)
    bits: u32,
}

impl Ipv4 {
    /// Pair an address with a prefix length (0-32).
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        let bits = prefix_to_mask(mask)?;
        Ok(Ipv4 { addr, mask, bits })
    }

    /// The address as supplied, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The subnet mask in dotted form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
