//! Reserved-range annotations.
//!
//! Matches a query against the catalog and keeps the most relevant address-range
//! categories, followed by any prefix-length ("Special CIDR") entries.

use crate::models::ReservedRange;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Rank given to categories missing from the priority table.
pub const DEFAULT_PRIORITY: u32 = 999;

lazy_static! {
    /// Display priority per category, 1 is most relevant.
    static ref CATEGORY_PRIORITY: HashMap<&'static str, u32> = HashMap::from([
        ("Loopback IP address", 1),
        ("Link-local IP address", 2),
        ("Special CIDR", 3),
        ("Private IP address", 4),
        ("Reserved IP address", 5),
        ("Multicast IP address", 6),
        ("Public DNS (Google) IP address", 7),
        ("Public DNS (Cloudflare) IP address", 8),
        ("Public DNS (Quad9) IP address", 9),
    ]);
}

/// Priority rank of a category.
pub fn category_priority(category: &str) -> u32 {
    CATEGORY_PRIORITY
        .get(category)
        .copied()
        .unwrap_or(DEFAULT_PRIORITY)
}

/// Find the catalog entries to show for a query.
///
/// # Arguments
/// * `ip_text` - Address as typed, compared literally against single-address entries
/// * `addr` - Parsed address, compared against interval entries
/// * `catalog` - Reserved-range records in catalog order
/// * `cidr` - Query prefix length, enables prefix-length entries when given
///
/// # Returns
/// Best-ranked address matches, then every prefix-length match, each in catalog order.
pub fn match_reserved<'a>(
    ip_text: &str,
    addr: Ipv4Addr,
    catalog: &'a [ReservedRange],
    cidr: Option<u8>,
) -> Vec<&'a ReservedRange> {
    let ip = u32::from(addr);
    let mut ip_matches = Vec::new();
    let mut cidr_matches = Vec::new();

    for entry in catalog {
        if cidr.is_some_and(|prefix| entry.matches_cidr(prefix)) {
            cidr_matches.push(entry);
            continue;
        }
        let spec = match entry.range_spec() {
            Ok(spec) => spec,
            Err(e) => {
                log::debug!("skipping catalog entry {:?}: {e}", entry.range);
                continue;
            }
        };
        if spec.contains(ip_text, ip) {
            ip_matches.push(entry);
        }
    }

    let top = ip_matches
        .iter()
        .map(|entry| category_priority(&entry.category))
        .min();
    let mut result: Vec<&ReservedRange> = ip_matches
        .into_iter()
        .filter(|entry| Some(category_priority(&entry.category)) == top)
        .collect();
    log::debug!(
        "match_reserved({ip_text}) address matches={} cidr matches={}",
        result.len(),
        cidr_matches.len()
    );
    result.extend(cidr_matches);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, range: &str, cidr: &str) -> ReservedRange {
        ReservedRange {
            category: category.to_string(),
            range: range.to_string(),
            cidr: Some(cidr.to_string()),
            usage: format!("{category} usage"),
        }
    }

    fn catalog() -> Vec<ReservedRange> {
        vec![
            entry("Private IP address", "10.0.0.0 - 10.255.255.255", "N/A"),
            entry("Private IP address", "192.168.0.0 - 192.168.255.255", "N/A"),
            entry("Loopback IP address", "127.0.0.0 - 127.255.255.255", "N/A"),
            entry("Reserved IP address", "0.0.0.0 - 0.255.255.255", "N/A"),
            entry("Special CIDR", "any", "/31"),
            entry("Special CIDR", "any", "/32"),
            entry("Public DNS (Google) IP address", "8.8.8.8", "N/A"),
            entry("Unranked", "127.0.0.0 - 127.0.0.255", "N/A"),
            entry("Broken", "10.0.0.0 - 10.0.0.999", "N/A"),
            entry("Private IP address", "10.0.0.0 - 10.0.255.255", "N/A"),
        ]
    }

    fn categories(
        ip: &str,
        cidr: Option<u8>,
        catalog: &[ReservedRange],
    ) -> Vec<(String, String)> {
        let addr: Ipv4Addr = ip.parse().unwrap();
        match_reserved(ip, addr, catalog, cidr)
            .into_iter()
            .map(|e| (e.category.clone(), e.range.clone()))
            .collect()
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(category_priority("Loopback IP address"), 1);
        assert_eq!(category_priority("Public DNS (Quad9) IP address"), 9);
        assert_eq!(category_priority("Something else"), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_loopback() {
        let catalog = catalog();
        let found = categories("127.0.0.1", Some(8), &catalog);
        assert_eq!(
            found,
            vec![(
                "Loopback IP address".to_string(),
                "127.0.0.0 - 127.255.255.255".to_string()
            )]
        );
    }

    #[test]
    fn test_private_and_special_cidr() {
        let catalog = catalog();
        let found = categories("192.168.1.0", Some(31), &catalog);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, "Private IP address");
        assert_eq!(found[1], ("Special CIDR".to_string(), "any".to_string()));
    }

    #[test]
    fn test_special_cidr_only() {
        let catalog = catalog();
        let found = categories("203.0.113.5", Some(32), &catalog);
        assert_eq!(found, vec![("Special CIDR".to_string(), "any".to_string())]);
    }

    #[test]
    fn test_no_prefix_skips_cidr_entries() {
        let catalog = catalog();
        assert!(categories("203.0.113.5", None, &catalog).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = catalog();
        let found = categories("10.0.0.1", Some(24), &catalog);
        assert_eq!(
            found,
            vec![
                (
                    "Private IP address".to_string(),
                    "10.0.0.0 - 10.255.255.255".to_string()
                ),
                (
                    "Private IP address".to_string(),
                    "10.0.0.0 - 10.0.255.255".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_single_address_is_literal() {
        let catalog = catalog();
        let found = categories("8.8.8.8", Some(32), &catalog);
        assert_eq!(found[0].0, "Public DNS (Google) IP address");
        assert_eq!(found[1].0, "Special CIDR");
        assert!(categories("8.8.8.9", Some(24), &catalog).is_empty());
    }

    #[test]
    fn test_unranked_category_loses() {
        let catalog = vec![
            entry("Unranked", "127.0.0.0 - 127.0.0.255", "N/A"),
            entry("Also unranked", "127.0.0.0 - 127.0.0.255", "N/A"),
        ];
        let found = categories("127.0.0.1", None, &catalog);
        assert_eq!(found.len(), 2, "equal default ranks are all kept");
    }

    #[test]
    fn test_cidr_entries_match_verbatim() {
        let catalog = vec![
            entry("X", "any", "/031"),
            entry("Y", "any", " /24"),
            entry("Z", " any", "/24"),
            entry("Special CIDR", "any", "/24"),
        ];
        assert!(categories("203.0.113.5", Some(31), &catalog).is_empty());
        assert_eq!(
            categories("203.0.113.5", Some(24), &catalog),
            vec![("Special CIDR".to_string(), "any".to_string())]
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert!(categories("10.0.0.1", Some(8), &[]).is_empty());
    }
}
