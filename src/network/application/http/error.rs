//! Error types for the HTTP codec and client.
//!
//! The codec is strict: any deviation from the expected message shape is a
//! [`MessageError`]. The client wraps codec and transport failures in
//! [`Error`] and adds the one failure it produces itself, a non-`200` status.

use crate::network::error::Error as NetError;
use alloc::string::String;
use core::fmt;

/// A failure formatting or parsing an HTTP message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageError {
    /// The message ended before the blank line closing the header block.
    Incomplete,
    /// The message starts with the blank line, so it has no start line.
    MissingStartLine,
    /// A header line has no `:` separator.
    MalformedHeader,
    /// A start line is missing one of its space separators.
    MalformedStartLine,
    /// The start line names a protocol version other than `HTTP/1.1`.
    UnsupportedVersion,
    /// The status code is not a number in `0..=65535`.
    InvalidStatus,
    /// A start line or header contains a character outside ISO-8859-1.
    Unencodable(char),
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::Incomplete => f.write_str("message has no end of header"),
            MessageError::MissingStartLine => f.write_str("message has no start line"),
            MessageError::MalformedHeader => f.write_str("header line has no ':' separator"),
            MessageError::MalformedStartLine => f.write_str("malformed start line"),
            MessageError::UnsupportedVersion => f.write_str("unsupported HTTP version"),
            MessageError::InvalidStatus => f.write_str("invalid status code"),
            MessageError::Unencodable(c) => {
                write!(f, "character {:?} cannot be encoded as ISO-8859-1", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MessageError {}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MessageError::Incomplete => defmt::write!(f, "Incomplete"),
            MessageError::MissingStartLine => defmt::write!(f, "MissingStartLine"),
            MessageError::MalformedHeader => defmt::write!(f, "MalformedHeader"),
            MessageError::MalformedStartLine => defmt::write!(f, "MalformedStartLine"),
            MessageError::UnsupportedVersion => defmt::write!(f, "UnsupportedVersion"),
            MessageError::InvalidStatus => defmt::write!(f, "InvalidStatus"),
            MessageError::Unencodable(c) => defmt::write!(f, "Unencodable({})", c),
        }
    }
}

/// A failure of a client round trip.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Connecting, writing or reading failed.
    Network(NetError),
    /// The request could not be formatted or the response could not be parsed.
    Message(MessageError),
    /// The server answered with a status other than `200`.
    Status {
        /// The URI that was requested.
        uri: String,
        /// The status code of the response.
        status: u16,
        /// The reason phrase of the response.
        reason: String,
    },
}

impl From<NetError> for Error {
    fn from(e: NetError) -> Self {
        Error::Network(e)
    }
}

impl From<MessageError> for Error {
    fn from(e: MessageError) -> Self {
        Error::Message(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::Message(e) => write!(f, "malformed HTTP message: {}", e),
            Error::Status {
                uri,
                status,
                reason,
            } => write!(f, "GET of {} returned {}: {}", uri, status, reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Message(e) => Some(e),
            Error::Status { .. } => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Network(e) => defmt::write!(f, "Network({})", e),
            Error::Message(e) => defmt::write!(f, "Message({})", e),
            Error::Status { uri, status, reason } => {
                defmt::write!(f, "Status({=str}, {}, {=str})", uri.as_str(), status, reason.as_str())
            }
        }
    }
}
