//! src/endpoint/encode.rs
//!
//! Endpoint encoding.
//!
//! Design notes:
//! - Every multi-byte field is big-endian (network order).
//! - Writes check stream usability, then argument presence, then capacity,
//!   and only then hand octets to the sink. A failed write leaves a
//!   capacity-aware sink untouched.
//! - A field goes to the sink as one contiguous slice.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{ADDRESS_LEN, ADDRESS_OFFSET, ENDPOINT_LEN, PORT_LEN, PORT_OFFSET};
use crate::endpoint::types::endpoint_from_socket_addr;
use crate::io::OctetSink;
use crate::types::{EndpointError, Field, Port};

/// Address octets in dotted-form order.
#[inline]
pub fn encode_address(address: &Ipv4Addr) -> [u8; ADDRESS_LEN] {
    address.octets()
}

#[inline]
pub fn encode_port(port: Port) -> [u8; PORT_LEN] {
    let mut out = [0u8; PORT_LEN];
    BigEndian::write_u16(&mut out, port);
    out
}

/// Serialize an endpoint into its 6-byte record.
///
/// ```text
/// [ address (4) ][ port (2) ]
/// ```
#[inline]
pub fn encode_endpoint(endpoint: &SocketAddrV4) -> [u8; ENDPOINT_LEN] {
    let mut out = [0u8; ENDPOINT_LEN];
    out[ADDRESS_OFFSET..PORT_OFFSET].copy_from_slice(&encode_address(endpoint.ip()));
    out[PORT_OFFSET..ENDPOINT_LEN].copy_from_slice(&encode_port(endpoint.port()));
    out
}

#[inline]
fn ensure_usable<S: OctetSink + ?Sized>(stream: &S) -> Result<(), EndpointError> {
    if !stream.is_usable() {
        return Err(EndpointError::InvalidStream);
    }
    Ok(())
}

#[inline]
fn ensure_capacity<S: OctetSink + ?Sized>(stream: &S, field: Field) -> Result<(), EndpointError> {
    match stream.remaining_capacity() {
        Some(have) if have < field.width() => Err(EndpointError::InsufficientCapacity {
            field,
            need: field.width(),
            have,
        }),
        _ => Ok(()),
    }
}

/// Write a 4-octet address.
///
/// `None` is an absent address and fails with `InvalidArgument`;
/// `0.0.0.0` is a valid address.
pub fn write_address<S>(stream: &mut S, address: impl Into<Option<Ipv4Addr>>) -> Result<(), EndpointError>
where
    S: OctetSink + ?Sized,
{
    ensure_usable(stream)?;
    let address = address
        .into()
        .ok_or(EndpointError::InvalidArgument { field: Field::Address })?;
    ensure_capacity(stream, Field::Address)?;

    stream.write_octets(Field::Address, &encode_address(&address))
}

/// Write a 2-octet port, most significant octet first.
pub fn write_port<S>(stream: &mut S, port: Port) -> Result<(), EndpointError>
where
    S: OctetSink + ?Sized,
{
    ensure_usable(stream)?;
    ensure_capacity(stream, Field::Port)?;

    stream.write_octets(Field::Port, &encode_port(port))
}

/// Write a 6-octet endpoint record: address, then port.
///
/// Capacity for the whole record is checked up front, so a sink with room
/// for the address but not the port receives nothing.
pub fn write_endpoint<S>(stream: &mut S, endpoint: impl Into<Option<SocketAddrV4>>) -> Result<(), EndpointError>
where
    S: OctetSink + ?Sized,
{
    ensure_usable(stream)?;
    let endpoint = endpoint
        .into()
        .ok_or(EndpointError::InvalidArgument { field: Field::Endpoint })?;
    ensure_capacity(stream, Field::Endpoint)?;

    stream.write_octets(Field::Endpoint, &encode_endpoint(&endpoint))
}

/// Normalize a transport address and write it as an endpoint record.
pub fn write_socket_addr<S>(stream: &mut S, addr: SocketAddr) -> Result<(), EndpointError>
where
    S: OctetSink + ?Sized,
{
    ensure_usable(stream)?;
    let endpoint = endpoint_from_socket_addr(addr)?;
    write_endpoint(stream, endpoint)
}
