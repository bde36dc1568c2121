//! HTTP/1.1 protocol implementation.
//!
//! A deliberately small subset of HTTP/1.1, split into three parts:
//!
//! - [`uri`]: lenient URI splitting (scheme, authority, path, query,
//!   fragment). Never fails.
//! - [`message`]: byte-exact request/response formatting and parsing. Header
//!   text is ISO-8859-1; the body is whatever bytes follow the blank line.
//! - [`client`]: one GET per connection, response buffered in memory.
//!
//! # Wire format
//!
//! ```text
//! GET /over/there?name=ferret HTTP/1.1\r\n
//! Host: example.com\r\n
//! \r\n
//! <body bytes, unframed, until the peer closes>
//! ```
//!
//! There is no `Content-Length` framing, no chunked encoding, no keep-alive
//! and no TLS.
//!
//! # Usage
//!
//! ```rust
//! use wget_lite::network::application::http::{Header, Request, message};
//!
//! let mut header = Header::new();
//! header.insert("Host".into(), "example.com".into());
//! let request = Request {
//!     method: "GET".into(),
//!     path: "/".into(),
//!     header,
//!     body: Vec::new(),
//! };
//!
//! let bytes = message::format_request(&request).unwrap();
//! assert_eq!(bytes, b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
//! assert_eq!(message::parse_request(&bytes).unwrap(), request);
//! ```

/// One-shot HTTP client over the [`Connect`](crate::network::Connect) trait.
pub mod client;

/// Codec and client error types.
pub mod error;

/// HTTP/1.1 message formatting and parsing.
pub mod message;

/// URI component splitting.
pub mod uri;


pub use client::{Client, Options};
pub use error::{Error, MessageError};
pub use message::{Header, Request, Response};
pub use uri::Parts;
