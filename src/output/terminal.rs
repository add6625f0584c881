//! Terminal report rendering.

use crate::models::{format_address, ReservedRange, Subnet};
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Column the FYI usage text is wrapped at.
pub const WRAP_WIDTH: usize = 70;
const USAGE_INDENT: &str = "Usage  : ";
const USAGE_CONTINUATION: &str = "         ";

fn format_adjacent(network: Option<Ipv4Addr>, missing: &str) -> String {
    network
        .map(format_address)
        .unwrap_or_else(|| missing.to_string())
}

/// Render the attribute report followed by the FYI block.
///
/// # Arguments
/// * `subnet` - The computed subnet attributes
/// * `fyi` - Catalog entries matched for this query
pub fn format_report(subnet: &Subnet, fyi: &[&ReservedRange]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, subnet, fyi);
    out
}

fn write_report(out: &mut String, subnet: &Subnet, fyi: &[&ReservedRange]) -> std::fmt::Result {
    writeln!(out, "\n----- IP Attributes -----\n")?;
    writeln!(out, "Network address: {}", format_address(subnet.network))?;
    writeln!(out, "Broadcast address: {}", format_address(subnet.broadcast))?;
    writeln!(out, "Subnet mask: {}", format_address(subnet.netmask))?;
    writeln!(out, "CIDR: /{}", subnet.cidr())?;
    writeln!(out, "Number of usable hosts: {}", subnet.usable_hosts)?;
    writeln!(out, "First usable IP: {}", format_address(subnet.first_usable))?;
    writeln!(out, "Last usable IP: {}", format_address(subnet.last_usable))?;
    writeln!(out, "Subnet group size: {}", subnet.group_size)?;
    writeln!(
        out,
        "Next network address: {}",
        format_adjacent(subnet.next_network, "No next network")
    )?;
    writeln!(
        out,
        "Previous network address: {}",
        format_adjacent(subnet.previous_network, "No previous network")
    )?;

    if fyi.is_empty() {
        writeln!(out, "\n-------------------------\n")?;
        return Ok(());
    }

    writeln!(out, "\n---------- FYI ----------")?;
    for entry in fyi {
        writeln!(out, "Category: {}", entry.category)?;
        writeln!(
            out,
            "{}",
            wrap_text(&entry.usage, WRAP_WIDTH, USAGE_INDENT, USAGE_CONTINUATION)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Greedy word wrap.
///
/// Lines are at most `width` characters including the indent. Text is cut into
/// whitespace runs and words, and hyphenated words may break after a hyphen. Chunks
/// longer than a line are split, at a hyphen when one fits. Whitespace ending a line,
/// or starting a continuation line, is dropped.
pub fn wrap_text(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> String {
    let mut chunks = split_chunks(text);
    chunks.reverse();
    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        let indent = if lines.is_empty() { initial_indent } else { subsequent_indent };
        let room = width.saturating_sub(indent.chars().count());
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;
        while let Some(chunk) = chunks.pop() {
            let len = chunk.chars().count();
            if line_len + len > room {
                chunks.push(chunk);
                break;
            }
            line_len += len;
            line.push(chunk);
        }

        if let Some(chunk) = chunks.pop() {
            if chunk.chars().count() > room {
                let (head, tail) = split_long_chunk(&chunk, room.saturating_sub(line_len).max(1));
                line.push(head);
                if !tail.is_empty() {
                    chunks.push(tail);
                }
            } else {
                chunks.push(chunk);
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(format!("{indent}{}", line.concat()));
        }
    }
    lines.join("\n")
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

/// Cut text into whitespace runs and words, breaking words after inner hyphens.
fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    for (i, &c) in chars.iter().enumerate() {
        let is_space = c == ' ';
        if !current.is_empty() && is_space != in_space {
            chunks.push(std::mem::take(&mut current));
        }
        in_space = is_space;
        current.push(c);
        if c == '-' && breaks_after_hyphen(&chars, i) {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

// Two letters before the hyphen, a letter after it, then a letter or "-<letter>".
fn breaks_after_hyphen(chars: &[char], i: usize) -> bool {
    let letter = |j: usize| chars.get(j).is_some_and(|c| c.is_alphabetic());
    i >= 2
        && letter(i - 1)
        && letter(i - 2)
        && letter(i + 1)
        && (letter(i + 2) || (chars.get(i + 2) == Some(&'-') && letter(i + 3)))
}

/// Split a chunk that cannot fit on any line, keeping at most `room` characters.
fn split_long_chunk(chunk: &str, room: usize) -> (String, String) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut end = room.min(chars.len());
    if chars.len() > room {
        if let Some(hyphen) = chars[..end].iter().rposition(|&c| c == '-') {
            if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
                end = hyphen + 1;
            }
        }
    }
    (chars[..end].iter().collect(), chars[end..].iter().collect())
}
