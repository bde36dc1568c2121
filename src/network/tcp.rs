//! Blocking TCP transport.
//!
//! [`TcpConnector`] opens a fresh [`TcpStream`] per call to
//! [`Connect::connect`]; [`TcpConnection`] adapts that stream to the crate's
//! [`Read`], [`Write`] and [`Close`] traits. Every call blocks the calling
//! thread. Without a timeout a stalled peer blocks forever.

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};
use log::debug;
use std::io::{self, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

/// Opens TCP connections to `host:port` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector {
    /// Read and write timeout applied to every connection. `None` blocks
    /// indefinitely.
    pub timeout: Option<Duration>,
}

impl TcpConnector {
    /// Creates a connector with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a connector whose connections time out reads and writes after
    /// `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }
}

/// Maps an io error to a transport error, using `fallback` for kinds that
/// have no direct counterpart.
fn classify(e: &io::Error, fallback: Error) -> Error {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Error::Timeout,
        io::ErrorKind::NotConnected => Error::NotOpen,
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => Error::ConnectionClosed,
        io::ErrorKind::InvalidInput | io::ErrorKind::AddrNotAvailable => Error::InvalidAddress,
        _ => fallback,
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        debug!("connecting to {}", remote);
        let stream = TcpStream::connect(remote).map_err(|e| {
            debug!("connect to {} failed: {}", remote, e);
            // Name resolution failures surface as uncategorized io errors.
            classify(&e, Error::InvalidAddress)
        })?;
        stream
            .set_read_timeout(self.timeout)
            .and_then(|_| stream.set_write_timeout(self.timeout))
            .map_err(|e| classify(&e, Error::InvalidAddress))?;
        Ok(TcpConnection::new(stream))
    }
}

impl Read for TcpConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(|e| {
            debug!("tcp read failed: {}", e);
            classify(&e, Error::ReadError)
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|e| {
            debug!("tcp write failed: {}", e);
            classify(&e, Error::WriteError)
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream
            .flush()
            .map_err(|e| classify(&e, Error::WriteError))
    }
}

impl Close for TcpConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        // The peer may already have closed its side; the socket is released
        // when `self.stream` drops either way.
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(classify(&e, Error::ConnectionClosed)),
        }
    }
}

impl Connection for TcpConnection {}
