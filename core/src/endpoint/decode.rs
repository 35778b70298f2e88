//! src/endpoint/decode.rs
//!
//! Endpoint decoding.
//!
//! Design notes:
//! - Field order and widths must match `encode.rs` exactly.
//! - Slice decoders read from the start of the slice and ignore trailing bytes.
//! - Stream readers consume exactly the field width on success.

use std::net::{Ipv4Addr, SocketAddrV4};

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{ADDRESS_LEN, ADDRESS_OFFSET, ENDPOINT_LEN, PORT_LEN, PORT_OFFSET};
use crate::io::OctetSource;
use crate::types::{EndpointError, Field, Port};

#[inline]
fn leading<const N: usize>(buf: &[u8], field: Field) -> Result<[u8; N], EndpointError> {
    buf.get(..N)
        .and_then(|head| <[u8; N]>::try_from(head).ok())
        .ok_or(EndpointError::UnexpectedEndOfStream { field, need: N, have: buf.len() })
}

#[inline]
pub fn decode_address(buf: &[u8]) -> Result<Ipv4Addr, EndpointError> {
    let octets = leading::<ADDRESS_LEN>(buf, Field::Address)?;
    Ok(Ipv4Addr::from(octets))
}

#[inline]
pub fn decode_port(buf: &[u8]) -> Result<Port, EndpointError> {
    let octets = leading::<PORT_LEN>(buf, Field::Port)?;
    Ok(BigEndian::read_u16(&octets))
}

/// Decode a 6-byte endpoint record from the start of `buf`.
pub fn decode_endpoint(buf: &[u8]) -> Result<SocketAddrV4, EndpointError> {
    let record = leading::<ENDPOINT_LEN>(buf, Field::Endpoint)?;
    let address = decode_address(&record[ADDRESS_OFFSET..PORT_OFFSET])?;
    let port = decode_port(&record[PORT_OFFSET..])?;
    Ok(SocketAddrV4::new(address, port))
}

#[inline]
fn ensure_usable<S: OctetSource + ?Sized>(stream: &S) -> Result<(), EndpointError> {
    if !stream.is_usable() {
        return Err(EndpointError::InvalidStream);
    }
    Ok(())
}

/// Read a 4-octet address; octet 0 is the most significant.
pub fn read_address<S>(stream: &mut S) -> Result<Ipv4Addr, EndpointError>
where
    S: OctetSource + ?Sized,
{
    ensure_usable(stream)?;
    let mut octets = [0u8; ADDRESS_LEN];
    stream.read_octets(Field::Address, &mut octets)?;
    Ok(Ipv4Addr::from(octets))
}

/// Read a 2-octet big-endian port.
pub fn read_port<S>(stream: &mut S) -> Result<Port, EndpointError>
where
    S: OctetSource + ?Sized,
{
    ensure_usable(stream)?;
    let mut octets = [0u8; PORT_LEN];
    stream.read_octets(Field::Port, &mut octets)?;
    Ok(BigEndian::read_u16(&octets))
}

/// Read an address followed by a port.
///
/// When the source knows its length, a short record is rejected before
/// anything is consumed. Otherwise the address may already be consumed when
/// the port comes up short; the error is still `UnexpectedEndOfStream`.
pub fn read_endpoint<S>(stream: &mut S) -> Result<SocketAddrV4, EndpointError>
where
    S: OctetSource + ?Sized,
{
    ensure_usable(stream)?;
    if let Some(have) = stream.available() {
        if have < ENDPOINT_LEN {
            return Err(EndpointError::UnexpectedEndOfStream {
                field: Field::Endpoint,
                need: ENDPOINT_LEN,
                have,
            });
        }
    }

    let address = read_address(stream)?;
    let port = read_port(stream)?;
    Ok(SocketAddrV4::new(address, port))
}
