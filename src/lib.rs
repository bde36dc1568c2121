//! # wget-lite - a minimal HTTP/1.1 client
//!
//! A small, dependency-light HTTP client built from three layers that can be
//! used on their own:
//!
//! ## Layers
//!
//! - **URI Parser**: splits a URI into scheme, authority, path, query and
//!   fragment. Lenient: it never fails, missing components come back empty.
//! - **Message Codec**: formats and parses HTTP/1.1 requests and responses
//!   to and from raw bytes. Strict: malformed messages are typed errors.
//! - **Client**: opens one connection per request, writes the request, reads
//!   until the peer closes, parses the response and returns the body of a
//!   `200` response.
//!
//! The client is transport agnostic: it drives any type implementing the
//! [`network::Connect`] trait. With the `std` feature a blocking TCP
//! transport is provided in [`network::tcp`].
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wget-lite = "0.1.0"
//! ```
//!
//! ### Parsing a URI
//!
//! ```rust
//! use wget_lite::network::application::http::uri;
//!
//! let parts = uri::parse("foo://example.com:8042/over/there?name=ferret#nose");
//! assert_eq!(parts.scheme, "foo");
//! assert_eq!(parts.authority, "example.com:8042");
//! assert_eq!(parts.path, "/over/there");
//! assert_eq!(parts.query, "name=ferret");
//! assert_eq!(parts.fragment, "nose");
//! ```
//!
//! ### Fetching a page
//!
//! ```rust,no_run
//! let body = wget_lite::get("http://example.com/")?;
//! println!("{} bytes", body.len());
//! # Ok::<(), wget_lite::network::application::http::Error>(())
//! ```
//!
//! ## Optional Features
//!
//! - `std`: TCP transport, `std::error::Error` impls and [`get`] (default: enabled)
//! - `cli`: the `wget` command-line binary (default: enabled)
//! - `defmt`: `defmt::Format` impls for the error types

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Network abstraction layer: transport traits, the TCP transport and the
/// HTTP application protocol.
pub mod network;

#[cfg(feature = "std")]
pub use network::application::http::client::get;
