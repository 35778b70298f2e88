//! Endpoint wire codec.
//!
//! Responsibilities:
//! - Encode IPv4 addresses, ports and address+port records into fixed-width fields
//! - Decode those fields from slices and from octet sources
//! - Normalize transport socket addresses into the IPv4 endpoint form
//!
//! Non-responsibilities:
//! - Message framing around the fields
//! - Resolution or reachability checks
//! - Buffering, retries, logging

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
