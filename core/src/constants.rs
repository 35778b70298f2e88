//! Wire widths for the endpoint record.
//!
//! Layout (network byte order, no padding, no length prefix):
//!
//! ```text
//! [ address (4) ]  offset 0
//! [ port    (2) ]  offset 4
//! ```

/// IPv4 address field width in octets.
pub const ADDRESS_LEN: usize = 4;

/// Port field width in octets.
pub const PORT_LEN: usize = 2;

/// Full endpoint record width.
pub const ENDPOINT_LEN: usize = ADDRESS_LEN + PORT_LEN;

/// Offset of the address field inside an endpoint record.
pub const ADDRESS_OFFSET: usize = 0;

/// Offset of the port field inside an endpoint record.
pub const PORT_OFFSET: usize = ADDRESS_OFFSET + ADDRESS_LEN;
