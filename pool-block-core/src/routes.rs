use std::net::Ipv4Addr;

use crate::pool::StaticRoute;
use crate::render::RenderError;

/// Number of leading network octets needed to represent a prefix length.
///
/// Equal to `ceil(prefix / 8)`; prefix 0 (the default route) needs no network
/// octets at all.
pub fn significant_octets(prefix: u8) -> usize {
    (usize::from(prefix) + 7) / 8
}

/// Encode one route into its RFC 3442 octet group.
///
/// The group is `[prefix, network octets..., gateway octets...]`, where only
/// the first `ceil(prefix / 8)` octets of the network appear, most
/// significant first. The Microsoft `ms-classless-static-routes` option uses
/// the same encoding.
pub fn encode_route(route: &StaticRoute) -> Result<Vec<u8>, RenderError> {
    if route.mask > 32 {
        return Err(RenderError::MalformedRoute {
            detail: format!("prefix length {} is outside 0-32", route.mask),
        });
    }
    let network = parse_route_addr("network", &route.network)?;
    let gateway = parse_route_addr("gateway", &route.gateway)?;

    let mut group = Vec::with_capacity(1 + significant_octets(route.mask) + 4);
    group.push(route.mask);
    group.extend_from_slice(&network.octets()[..significant_octets(route.mask)]);
    group.extend_from_slice(&gateway.octets());
    Ok(group)
}

/// Render a route list as the payload lines of a classless-static-routes
/// option.
///
/// One line per route, each a comma-separated decimal octet group, with a
/// trailing comma after every route except the last, which ends the option
/// with `;`. The caller indents the lines.
pub fn payload_lines(routes: &[StaticRoute]) -> Result<Vec<String>, RenderError> {
    let mut lines = Vec::with_capacity(routes.len());
    for (idx, route) in routes.iter().enumerate() {
        let group = encode_route(route)?;
        let octets = group
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let terminator = if idx + 1 == routes.len() { ';' } else { ',' };
        lines.push(format!("{octets}{terminator}"));
    }
    Ok(lines)
}

fn parse_route_addr(field: &'static str, value: &str) -> Result<Ipv4Addr, RenderError> {
    value
        .parse()
        .map_err(|_| RenderError::InvalidAddress {
            field,
            value: value.to_string(),
        })
}
