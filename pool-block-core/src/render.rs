use std::net::Ipv4Addr;

use thiserror::Error;

use crate::pool::{PoolSpec, StringList};
use crate::routes::payload_lines;

/// Errors that can occur while rendering a pool block.
///
/// All of these are detected before the first output line is produced, so a
/// failed render never yields a partial block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// `network` or `mask` was absent or empty.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// An address field does not parse as an IPv4 dotted quad.
    #[error("invalid IPv4 address in `{field}`: `{value}`")]
    InvalidAddress { field: &'static str, value: String },
    /// A range entry does not parse as `<start> - <end>`.
    #[error("malformed range `{0}`, expected `<start> - <end>`")]
    MalformedRange(String),
    /// A static route carries an out-of-range prefix or a bad address.
    #[error("malformed static route: {detail}")]
    MalformedRoute { detail: String },
    /// `mtu` was zero.
    #[error("interface-mtu must be a positive integer")]
    MalformedMtu,
}

/// Render one pool into its `subnet { ... }` block as an ordered line list.
///
/// The emission order and whitespace are a wire contract: downstream
/// consumers compare the rendered text byte for byte. Top-level option lines
/// sit at two spaces, the pool sub-block body at four.
pub fn render_pool(spec: &PoolSpec) -> Result<Vec<String>, RenderError> {
    // Validate everything up front; no partial output on failure.
    require(&spec.network, "network")?;
    require(&spec.mask, "mask")?;
    parse_addr("network", &spec.network)?;
    parse_addr("mask", &spec.mask)?;
    let ranges = checked_ranges(&spec.range)?;
    if let Some(gateway) = &spec.gateway {
        parse_addr("gateway", gateway)?;
    }
    if let Some(pxeserver) = &spec.pxeserver {
        parse_addr("pxeserver", pxeserver)?;
    }
    for nameserver in &spec.nameservers {
        parse_addr("nameservers", nameserver)?;
    }
    if spec.mtu == Some(0) {
        return Err(RenderError::MalformedMtu);
    }
    let route_payload = payload_lines(&spec.static_routes)?;

    let mut lines = Vec::new();
    lines.push(format!("subnet {} netmask {} {{", spec.network, spec.mask));
    emit_pool_block(&mut lines, spec, &ranges);
    if let Some(domain) = &spec.domain_name {
        lines.push(format!("  option domain-name \"{domain}\";"));
    }
    lines.push(format!("  option subnet-mask {};", spec.mask));
    if let Some(gateway) = &spec.gateway {
        lines.push(format!("  option routers {gateway};"));
    }
    emit_static_routes(&mut lines, &route_payload);
    for option in &spec.options {
        lines.push(format!("  {}", terminated(&format!("option {option}"))));
    }
    for parameter in &spec.parameters {
        lines.push(format!("  {}", terminated(parameter)));
    }
    if !spec.nameservers.is_empty() {
        let joined = spec
            .nameservers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  option domain-name-servers {joined};"));
    }
    let search = search_domains(&spec.search_domains);
    if !search.is_empty() {
        let quoted = search
            .iter()
            .map(|domain| format!("\"{domain}\""))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  option domain-search {quoted};"));
    }
    if let Some(mtu) = spec.mtu {
        lines.push(format!("  option interface-mtu {mtu};"));
    }
    if let Some(pxeserver) = &spec.pxeserver {
        lines.push(format!("  next-server {pxeserver};"));
    }
    lines.push("}".to_string());
    Ok(lines)
}

/// Render one pool as a single newline-joined block, no trailing newline.
pub fn render_pool_text(spec: &PoolSpec) -> Result<String, RenderError> {
    Ok(render_pool(spec)?.join("\n"))
}

/// The `pool { ... }` sub-block exists iff at least one of ranges, failover,
/// or pool_parameters is present.
fn emit_pool_block(lines: &mut Vec<String>, spec: &PoolSpec, ranges: &[(Ipv4Addr, Ipv4Addr)]) {
    if ranges.is_empty() && spec.failover.is_none() && spec.pool_parameters.is_empty() {
        return;
    }
    lines.push("  pool".to_string());
    lines.push("  {".to_string());
    for parameter in &spec.pool_parameters {
        lines.push(format!("    {}", terminated(parameter)));
    }
    if let Some(peer) = &spec.failover {
        lines.push(format!("    failover peer \"{peer}\";"));
    }
    for (start, end) in ranges {
        lines.push(format!("    range {start} - {end};"));
    }
    lines.push("  }".to_string());
}

/// The RFC 3442 option and its Microsoft twin always appear together with
/// identical payloads.
fn emit_static_routes(lines: &mut Vec<String>, payload: &[String]) {
    if payload.is_empty() {
        return;
    }
    for option in ["rfc3442-classless-static-routes", "ms-classless-static-routes"] {
        lines.push(format!("  option {option}"));
        for group in payload {
            lines.push(format!("    {group}"));
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), RenderError> {
    if value.is_empty() {
        return Err(RenderError::MissingField(field));
    }
    Ok(())
}

fn parse_addr(field: &'static str, value: &str) -> Result<Ipv4Addr, RenderError> {
    value.parse().map_err(|_| RenderError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

/// Parse every range entry as `<start> - <end>`; an entirely empty field is
/// "no range", but an empty or unparseable entry inside a list is an error.
fn checked_ranges(ranges: &StringList) -> Result<Vec<(Ipv4Addr, Ipv4Addr)>, RenderError> {
    let mut parsed = Vec::with_capacity(ranges.len());
    for entry in ranges {
        let malformed = || RenderError::MalformedRange(entry.clone());
        let (start, end) = entry.split_once('-').ok_or_else(malformed)?;
        let start: Ipv4Addr = start.trim().parse().map_err(|_| malformed())?;
        let end: Ipv4Addr = end.trim().parse().map_err(|_| malformed())?;
        parsed.push((start, end));
    }
    Ok(parsed)
}

/// Split comma-separated search-domain entries and trim the pieces, so the
/// string form and the list form render identically.
fn search_domains(domains: &StringList) -> Vec<String> {
    domains
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append a trailing `;` unless the statement already carries one.
fn terminated(text: &str) -> String {
    if text.trim_end().ends_with(';') {
        text.to_string()
    } else {
        format!("{text};")
    }
}
