//! Command-line argument validation.
//!
//! Accepts `<ip>/<cidr>`, `<ip> <cidr>` (with or without the slash) or `<ip> <mask>`
//! and normalises them into a [`Query`].

use crate::error::{InputError, Result};
use crate::models::{mask_to_prefix, parse_address, Ipv4, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_IP_CIDR: Regex =
        Regex::new(r"^([0-9]{1,3}(?:\.[0-9]{1,3}){3})/([0-9]{1,2})$").expect("Invalid Regex?");
    static ref RE_CIDR: Regex = Regex::new(r"^/?([0-9]{1,2})$").expect("Invalid Regex?");
}

/// A validated query: the address text as typed plus the parsed address/prefix pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Trimmed address text, used for literal catalog matches.
    pub ip_text: String,
    /// Parsed address and prefix length.
    pub ipv4: Ipv4,
}

/// Validate the arguments following the program name.
///
/// # Examples
/// ```
/// use ip_attributes::processing::parse_args;
/// let query = parse_args(&["10.0.0.1", "255.255.0.0"]).unwrap();
/// assert_eq!(query.ipv4.mask(), 16);
/// ```
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Query> {
    log::debug!("parse_args() count={}", args.len());
    match args {
        [arg] => parse_ip_cidr(arg.as_ref().trim()),
        [ip, second] => parse_ip_and_mask(ip.as_ref().trim(), second.as_ref().trim()),
        _ => Err(InputError::InvalidUsage),
    }
}

fn parse_ip_cidr(arg: &str) -> Result<Query> {
    let caps = RE_IP_CIDR
        .captures(arg)
        .ok_or(InputError::InvalidInputFormat)?;
    let ip_text = &caps[1];
    let addr = parse_address(ip_text)?;
    let mask = parse_prefix(&caps[2])?;
    build_query(ip_text, addr, mask)
}

fn parse_ip_and_mask(ip_text: &str, second: &str) -> Result<Query> {
    // Address errors take precedence over mask errors.
    let addr = parse_address(ip_text)?;
    let mask = match RE_CIDR.captures(second) {
        Some(caps) => parse_prefix(&caps[1])?,
        None => mask_to_prefix(second)?,
    };
    build_query(ip_text, addr, mask)
}

fn parse_prefix(digits: &str) -> Result<u8> {
    match digits.parse::<u8>() {
        Ok(mask) if mask <= MAX_LENGTH => Ok(mask),
        _ => Err(InputError::InvalidMaskFormat),
    }
}

fn build_query(ip_text: &str, addr: std::net::Ipv4Addr, mask: u8) -> Result<Query> {
    Ok(Query {
        ip_text: ip_text.to_string(),
        ipv4: Ipv4::new(addr, mask)?,
    })
}
