//! IPv4 subnet attributes with reserved-range annotations.
//!
//! Validates `<ip>/<cidr>`, `<ip> <cidr>` or `<ip> <mask>` input, computes the subnet
//! attributes and annotates the result from a catalog of well-known ranges.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use error::InputError;
use models::{ReservedRange, Subnet};
use processing::{match_reserved, parse_args};

/// Run one query end to end and return the rendered report.
///
/// # Arguments
/// * `args` - Command-line arguments without the program name
/// * `catalog` - Reserved-range records used for the FYI block
///
/// # Examples
/// ```
/// let report = ip_attributes::ip_attributes(&["192.168.1.0/30"], &[]).unwrap();
/// assert!(report.contains("Broadcast address: 192.168.1.3"));
/// ```
pub fn ip_attributes<S: AsRef<str>>(
    args: &[S],
    catalog: &[ReservedRange],
) -> Result<String, InputError> {
    let query = parse_args(args)?;
    log::info!("query {} -> {}", query.ip_text, query.ipv4);

    let subnet = Subnet::new(query.ipv4);
    let fyi = match_reserved(
        &query.ip_text,
        query.ipv4.addr(),
        catalog,
        Some(query.ipv4.mask()),
    );
    Ok(output::format_report(&subnet, &fyi))
}
