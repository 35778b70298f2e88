use std::fmt;
use std::io;
use std::net::Ipv6Addr;

use crate::constants::{ADDRESS_LEN, ENDPOINT_LEN, PORT_LEN};

/// 16-bit port, encoded as two octets most significant first.
pub type Port = u16;

/// Wire field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Port,
    Endpoint,
}

impl Field {
    /// Encoded width of the field in octets.
    pub const fn width(self) -> usize {
        match self {
            Field::Address => ADDRESS_LEN,
            Field::Port => PORT_LEN,
            Field::Endpoint => ENDPOINT_LEN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Port => "port",
            Field::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified codec error.
/// - Every operation returns it to the immediate caller; nothing is retried.
/// - `have`/`need` are octet counts, `need` is always the field width.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// Stream is absent or no longer usable for I/O.
    #[error("invalid stream: absent or not usable")]
    InvalidStream,

    /// A value required by a write was not supplied.
    #[error("invalid argument: {field} is absent")]
    InvalidArgument { field: Field },

    /// The stream ran dry before the field was complete.
    #[error("unexpected end of stream reading {field}: {have} < {need}")]
    UnexpectedEndOfStream { field: Field, need: usize, have: usize },

    /// The sink cannot hold the whole field; nothing was written.
    #[error("insufficient capacity writing {field}: {have} < {need}")]
    InsufficientCapacity { field: Field, need: usize, have: usize },

    /// IPv6 address that has no IPv4-mapped form.
    #[error("unsupported address family: {addr} is not IPv4 or IPv4-mapped")]
    UnsupportedFamily { addr: Ipv6Addr },

    /// Underlying stream failed for a reason other than end of data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl EndpointError {
    /// True when the input was cut short. The embedding protocol decides
    /// whether that means a malformed datagram or a need for more data.
    pub fn is_truncation(&self) -> bool {
        matches!(self, EndpointError::UnexpectedEndOfStream { .. })
    }

    /// Field the error refers to, when there is one.
    pub fn field(&self) -> Option<Field> {
        match self {
            EndpointError::InvalidArgument { field }
            | EndpointError::UnexpectedEndOfStream { field, .. }
            | EndpointError::InsufficientCapacity { field, .. } => Some(*field),
            _ => None,
        }
    }
}
