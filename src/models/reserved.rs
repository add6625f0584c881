//! Reserved and special-use range catalog record.

use super::ipv4::parse_address;
use crate::error::{InputError, Result};
use serde::Deserialize;

/// One catalog record describing a well-known address range or prefix length.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReservedRange {
    /// Display category, also the key into the priority table.
    pub category: String,
    /// `"any"`, `"<start> - <end>"` or a single dotted address.
    pub range: String,
    /// `"/<n>"` for prefix-length entries, `"N/A"` or absent otherwise.
    #[serde(default)]
    pub cidr: Option<String>,
    /// Free-text description shown under the category.
    pub usage: String,
}

/// How a record's `range` field matches an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// Matches no address; only usable together with a `cidr` prefix.
    Any,
    /// Inclusive interval of addresses.
    Interval(u32, u32),
    /// A literal address compared as text.
    Single(String),
}

impl RangeSpec {
    /// Whether the address (as text and as integer) falls in this range.
    pub fn contains(&self, ip_text: &str, ip: u32) -> bool {
        match self {
            RangeSpec::Any => false,
            RangeSpec::Interval(start, end) => (*start..=*end).contains(&ip),
            RangeSpec::Single(literal) => ip_text.trim() == literal.as_str(),
        }
    }
}

impl ReservedRange {
    /// Interpret the `range` field.
    pub fn range_spec(&self) -> Result<RangeSpec> {
        if self.range == "any" {
            return Ok(RangeSpec::Any);
        }
        let range = self.range.trim();
        if range.contains(" - ") {
            let mut parts = range.split(" - ");
            match (parts.next(), parts.next(), parts.next()) {
                (Some(start), Some(end), None) => {
                    let start = u32::from(parse_address(start.trim())?);
                    let end = u32::from(parse_address(end.trim())?);
                    Ok(RangeSpec::Interval(start, end))
                }
                _ => Err(InputError::InvalidAddressFormat),
            }
        } else {
            Ok(RangeSpec::Single(range.to_string()))
        }
    }

    /// Whether this is the prefix-length record for `/<prefix>`.
    ///
    /// Both fields are compared verbatim: `range` must be exactly `"any"` and `cidr`
    /// exactly `"/<prefix>"`, so `"/031"`, `" /24"` or `"N/A"` never match.
    pub fn matches_cidr(&self, prefix: u8) -> bool {
        self.range == "any" && self.cidr.as_deref() == Some(format!("/{prefix}").as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(range: &str, cidr: Option<&str>) -> ReservedRange {
        ReservedRange {
            category: "Test".to_string(),
            range: range.to_string(),
            cidr: cidr.map(str::to_string),
            usage: "test".to_string(),
        }
    }

    #[test]
    fn test_range_spec() {
        assert_eq!(
            entry("10.0.0.0 - 10.255.255.255", None).range_spec().unwrap(),
            RangeSpec::Interval(0x0A000000, 0x0AFFFFFF)
        );
        assert_eq!(entry("any", Some("/31")).range_spec().unwrap(), RangeSpec::Any);
        assert_eq!(
            entry(" any", Some("/31")).range_spec().unwrap(),
            RangeSpec::Single("any".to_string())
        );
        assert_eq!(
            entry(" 8.8.8.8 ", None).range_spec().unwrap(),
            RangeSpec::Single("8.8.8.8".to_string())
        );
        assert!(entry("10.0.0.0 - 10.300.0.0", None).range_spec().is_err());
        assert!(entry("1.1.1.1 - 2.2.2.2 - 3.3.3.3", None).range_spec().is_err());
    }

    #[test]
    fn test_range_contains() {
        let interval = RangeSpec::Interval(0x7F000000, 0x7FFFFFFF);
        assert!(interval.contains("127.0.0.1", 0x7F000001));
        assert!(interval.contains("127.255.255.255", 0x7FFFFFFF));
        assert!(!interval.contains("128.0.0.0", 0x80000000));

        let single = RangeSpec::Single("8.8.8.8".to_string());
        assert!(single.contains(" 8.8.8.8", 0x08080808));
        assert!(!single.contains("8.8.4.4", 0x08080404));

        assert!(!RangeSpec::Any.contains("any", 0));
    }

    #[test]
    fn test_matches_cidr() {
        assert!(entry("any", Some("/31")).matches_cidr(31));
        assert!(entry("any", Some("/0")).matches_cidr(0));
        assert!(!entry("any", Some("/31")).matches_cidr(32));
        assert!(!entry("any", Some("N/A")).matches_cidr(31));
        assert!(!entry("any", None).matches_cidr(31));
    }

    #[test]
    fn test_matches_cidr_is_verbatim() {
        assert!(!entry("any", Some("/031")).matches_cidr(31));
        assert!(!entry("any", Some(" /24")).matches_cidr(24));
        assert!(!entry("any", Some("/24 ")).matches_cidr(24));
        assert!(!entry("any", Some("/+3")).matches_cidr(3));
        assert!(!entry(" any", Some("/24")).matches_cidr(24));
        assert!(!entry("ANY", Some("/24")).matches_cidr(24));
    }

    #[test]
    fn test_deserialize_without_cidr() {
        let json = r#"{"category": "Loopback IP address", "range": "127.0.0.0 - 127.255.255.255", "usage": "Loopback"}"#;
        let parsed: ReservedRange = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.cidr, None);
        assert_eq!(parsed.category, "Loopback IP address");
    }
}
