// Locks error classification, diagnostics and socket-address normalization.

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4};

    use endpoint_core::constants::{ADDRESS_LEN, ENDPOINT_LEN, PORT_LEN, PORT_OFFSET};
    use endpoint_core::endpoint::endpoint_from_socket_addr;
    use endpoint_core::io::{IoStream, OctetSink, OctetSource};
    use endpoint_core::types::{EndpointError, Field};

// ## 1️⃣ Layout constants

    #[test]
    fn field_widths_match_wire_layout() {
        assert_eq!(Field::Address.width(), ADDRESS_LEN);
        assert_eq!(Field::Port.width(), PORT_LEN);
        assert_eq!(Field::Endpoint.width(), ENDPOINT_LEN);
        assert_eq!(ENDPOINT_LEN, 6);
        assert_eq!(PORT_OFFSET, 4);
    }

// ## 2️⃣ Error classification & messages

    #[test]
    fn truncation_is_classified() {
        let err = EndpointError::UnexpectedEndOfStream { field: Field::Port, need: 2, have: 1 };
        assert!(err.is_truncation());
        assert_eq!(err.field(), Some(Field::Port));

        let err = EndpointError::InsufficientCapacity { field: Field::Address, need: 4, have: 3 };
        assert!(!err.is_truncation());
        assert_eq!(err.field(), Some(Field::Address));

        assert!(!EndpointError::InvalidStream.is_truncation());
        assert_eq!(EndpointError::InvalidStream.field(), None);
    }

    #[test]
    fn error_messages_are_stable() {
        let err = EndpointError::UnexpectedEndOfStream { field: Field::Port, need: 2, have: 1 };
        assert_eq!(err.to_string(), "unexpected end of stream reading port: 1 < 2");

        let err = EndpointError::InsufficientCapacity { field: Field::Endpoint, need: 6, have: 5 };
        assert_eq!(err.to_string(), "insufficient capacity writing endpoint: 5 < 6");

        let err = EndpointError::InvalidArgument { field: Field::Address };
        assert_eq!(err.to_string(), "invalid argument: address is absent");

        assert_eq!(EndpointError::InvalidStream.to_string(), "invalid stream: absent or not usable");
    }

// ## 3️⃣ Socket-address normalization

    #[test]
    fn v4_socket_addr_passes_through() {
        let addr: SocketAddr = "10.1.2.3:4000".parse().unwrap();
        assert_eq!(
            endpoint_from_socket_addr(addr).unwrap(),
            SocketAddrV4::new(Ipv4Addr::new(10, 1, 2, 3), 4000)
        );
    }

    #[test]
    fn ipv4_mapped_v6_is_unwrapped() {
        let addr: SocketAddr = "[::ffff:192.168.0.1]:65535".parse().unwrap();
        assert_eq!(
            endpoint_from_socket_addr(addr).unwrap(),
            SocketAddrV4::new(Ipv4Addr::new(192, 168, 0, 1), 65535)
        );
    }

    #[test]
    fn native_v6_is_unsupported() {
        let addr: SocketAddr = "[::1]:7946".parse().unwrap();
        match endpoint_from_socket_addr(addr) {
            Err(EndpointError::UnsupportedFamily { addr }) => assert_eq!(addr, Ipv6Addr::LOCALHOST),
            other => panic!("expected UnsupportedFamily, got {:?}", other),
        }
    }

// ## 4️⃣ Stream capability reporting

    #[test]
    fn absent_streams_are_not_usable() {
        let source: Option<&[u8]> = None;
        let sink: Option<Vec<u8>> = None;

        assert!(!OctetSource::is_usable(&source));
        assert!(!OctetSink::is_usable(&sink));
        assert_eq!(source.available(), None);
    }

    #[test]
    fn buffer_streams_report_what_is_left() {
        let source: &[u8] = &[1, 2, 3];
        assert_eq!(source.available(), Some(3));

        let mut buf = [0u8; 5];
        let sink: &mut [u8] = &mut buf;
        assert_eq!(sink.remaining_capacity(), Some(5));

        let growable: Vec<u8> = Vec::new();
        assert_eq!(growable.remaining_capacity(), None);
    }

    #[test]
    fn io_stream_open_close() {
        let mut stream = IoStream::new(Vec::<u8>::new());
        assert!(stream.is_open());
        assert!(OctetSink::is_usable(&stream));

        let inner = stream.close();
        assert_eq!(inner, Some(Vec::new()));
        assert!(!stream.is_open());
        assert!(!OctetSink::is_usable(&stream));
        assert!(stream.get_ref().is_none());
    }
}
