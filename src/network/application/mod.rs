//! # Application Layer Network Protocols
//!
//! Application layer (OSI Layer 7) protocols built on the transport traits in
//! [`crate::network`].
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 URI parser, message codec and one-shot client
//!
//! ## Usage Pattern
//!
//! 1. Pick a connector for your transport layer
//! 2. Wrap it with the protocol client
//! 3. Use protocol-specific methods for communication
//!
//! ```rust,no_run
//! use wget_lite::network::application::http::Client;
//! # use wget_lite::network::{Close, Connect, Connection, Read, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = wget_lite::network::error::Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = wget_lite::network::error::Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = wget_lite::network::error::Error;
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = wget_lite::network::error::Error;
//! #     fn connect(&mut self, _remote: &str) -> Result<MockConnection, Self::Error> { Ok(MockConnection) }
//! # }
//!
//! // 1. Pick a connector (implementation-specific)
//! let network = MockNetwork;
//!
//! // 2. Wrap with protocol client
//! let mut client = Client::new(network);
//!
//! // 3. Use protocol methods
//! let body = client.get("http://example.com/api/status");
//! ```

/// HTTP/1.1 client implementation.
///
/// Provides a URI parser, a byte-exact HTTP/1.1 message codec and a
/// single-request-per-connection GET client.
pub mod http;
