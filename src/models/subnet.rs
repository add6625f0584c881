//! Subnet attribute report.

use super::ipv4::{
    broadcast_addr, cut_addr, group_size, ip_after_subnet, ip_before_subnet, num_usable_hosts,
    Ipv4,
};
use std::net::Ipv4Addr;

/// Every attribute derived from one address/prefix query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subnet {
    /// The queried address and prefix length.
    pub ipv4: Ipv4,
    /// Lowest address in the block (host bits zero).
    pub network: Ipv4Addr,
    /// Highest address in the block (host bits one).
    pub broadcast: Ipv4Addr,
    /// Dotted subnet mask.
    pub netmask: Ipv4Addr,
    /// First assignable host.
    pub first_usable: Ipv4Addr,
    /// Last assignable host.
    pub last_usable: Ipv4Addr,
    /// Number of assignable hosts.
    pub usable_hosts: u64,
    /// Addresses in the block, 2^(32 - prefix).
    pub group_size: u64,
    /// Next block of the same size, if it exists.
    pub next_network: Option<Ipv4Addr>,
    /// Previous block of the same size, if it exists.
    pub previous_network: Option<Ipv4Addr>,
}

impl Subnet {
    /// Compute the report for an address and prefix length.
    pub fn new(ipv4: Ipv4) -> Subnet {
        let network = cut_addr(ipv4);
        let broadcast = broadcast_addr(ipv4);
        let (first_usable, last_usable) = match ipv4.mask() {
            32 => (network, network),
            31 => (network, broadcast),
            _ => (
                Ipv4Addr::from(u32::from(network) + 1),
                Ipv4Addr::from(u32::from(broadcast) - 1),
            ),
        };

        let subnet = Subnet {
            ipv4,
            network,
            broadcast,
            netmask: ipv4.netmask(),
            first_usable,
            last_usable,
            usable_hosts: num_usable_hosts(ipv4.mask()),
            group_size: group_size(ipv4.mask()),
            next_network: ip_after_subnet(ipv4),
            previous_network: ip_before_subnet(ipv4),
        };
        log::debug!("Subnet::new({ipv4}) network={network} broadcast={broadcast}");
        subnet
    }

    /// The prefix length.
    pub fn cidr(&self) -> u8 {
        self.ipv4.mask()
    }
}
