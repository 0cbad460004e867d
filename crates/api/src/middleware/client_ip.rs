use axum::http::HeaderMap;
use ip_gate_domain::ClientAddress;
use std::net::SocketAddr;

/// Client address for a request.
///
/// The first comma-separated entry of `trusted_header` wins when present and
/// non-empty, otherwise the transport peer. Header text is kept as sent;
/// the parsed address is canonical either way.
pub fn extract_client_address(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trusted_header: Option<&str>,
) -> ClientAddress {
    let forwarded = trusted_header
        .and_then(|name| headers.get(name))
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match forwarded {
        Some(raw) => ClientAddress::parse(raw),
        None => match peer {
            Some(addr) => ClientAddress::from(addr.ip()),
            None => ClientAddress::parse(""),
        },
    }
}
