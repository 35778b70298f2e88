use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::types::EndpointError;

/// Peer address as carried on the wire: four octets, IPv4 only.
pub type Address = Ipv4Addr;

/// Address + port pair identifying a reachable peer.
pub type Endpoint = SocketAddrV4;

/// Convert a transport socket address into the wire endpoint form.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`), as handed out by dual-stack
/// sockets, unwrap to their IPv4 address. Any other IPv6 address is rejected.
pub fn endpoint_from_socket_addr(addr: SocketAddr) -> Result<Endpoint, EndpointError> {
    match addr {
        SocketAddr::V4(v4) => Ok(v4),
        SocketAddr::V6(v6) => v6
            .ip()
            .to_ipv4_mapped()
            .map(|ip| SocketAddrV4::new(ip, v6.port()))
            .ok_or(EndpointError::UnsupportedFamily { addr: *v6.ip() }),
    }
}
