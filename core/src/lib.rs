//! endpoint-core
//!
//! Fixed-width wire codec for peer endpoints (IPv4 address + port).
//! Pure Rust, no I/O beyond the octets each field needs.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Stream capabilities
pub mod io;

// Codec
pub mod endpoint;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::{ADDRESS_LEN, ENDPOINT_LEN, PORT_LEN};
    pub use crate::endpoint::{
        read_address, read_endpoint, read_port,
        write_address, write_endpoint, write_port, write_socket_addr,
        encode_address, encode_endpoint, encode_port,
        decode_address, decode_endpoint, decode_port,
        endpoint_from_socket_addr, Address, Endpoint,
    };
    pub use crate::io::{IoStream, OctetSink, OctetSource};
    pub use crate::types::{EndpointError, Field, Port};
}
