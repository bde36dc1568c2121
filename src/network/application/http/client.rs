use super::error::Error;
use super::message::{self, Header, Request, Response};
use super::uri;
use crate::network::error::Error as NetError;
use crate::network::{Close, Connect, Read, Write};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, trace, warn};
use serde::Deserialize;

/// The default port for HTTP.
pub const DEFAULT_PORT: u16 = 80;

/// Size of each read from the connection.
pub const DEFAULT_READ_SIZE: usize = 8192;

const GET: &str = "GET";
const HOST: &str = "Host";
const ROOT_PATH: &str = "/";
const STATUS_OK: u16 = 200;

/// Options for configuring the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Port every request connects to. The URI's scheme and authority never
    /// change it.
    pub port: u16,
    /// Number of bytes requested per read while collecting a response.
    pub read_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

/// A one-shot HTTP client.
///
/// Every request opens a new connection through `N`, writes the request,
/// reads until the peer closes the connection and closes it. Nothing is
/// shared between requests.
#[derive(Debug)]
pub struct Client<N: Connect> {
    network: N,
    options: Options,
}

impl<N> Client<N>
where
    N: Connect,
    N::Error: Into<NetError>,
    <N::Connection as Read>::Error: Into<NetError>,
    <N::Connection as Write>::Error: Into<NetError>,
    <N::Connection as Close>::Error: Into<NetError>,
{
    /// Creates a client with default [`Options`].
    pub fn new(network: N) -> Self {
        Self::with_options(network, Options::default())
    }

    /// Creates a client with the given options.
    pub fn with_options(network: N, options: Options) -> Self {
        Self { network, options }
    }

    /// Returns the client's options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Requests `uri` and returns the body of the response.
    ///
    /// The authority of `uri` is used as the host, unchanged: a port written
    /// in the URI becomes part of the host name and will not resolve. Any
    /// status other than `200` is returned as [`Error::Status`].
    pub fn get(&mut self, uri: &str) -> Result<Vec<u8>, Error> {
        let parts = uri::parse(uri);
        let host = parts.authority;
        let path = if parts.full_path.is_empty() {
            String::from(ROOT_PATH)
        } else {
            parts.full_path
        };

        let mut header = Header::new();
        header.insert(HOST.into(), host.clone());
        let request = Request {
            method: GET.into(),
            path,
            header,
            body: Vec::new(),
        };

        let response = self.request(&host, &request)?;
        if response.status == STATUS_OK {
            Ok(response.body)
        } else {
            warn!("GET of {} returned {}: {}", uri, response.status, response.reason);
            Err(Error::Status {
                uri: uri.into(),
                status: response.status,
                reason: response.reason,
            })
        }
    }

    /// Sends `request` to `host` on a new connection and parses the response.
    pub fn request(&mut self, host: &str, request: &Request) -> Result<Response, Error> {
        debug!("{} {} from {}", request.method, request.path, host);
        let msg = message::format_request(request)?;
        let raw = self.send(host, &msg)?;
        let response = message::parse_response(&raw)?;
        debug!(
            "{} {} from {}: {} {}",
            request.method, request.path, host, response.status, response.reason
        );
        Ok(response)
    }

    /// Sends `msg` to `host` on a new connection and returns everything the
    /// peer sends back before closing.
    ///
    /// The connection is closed on every path once it has been opened. A
    /// failure to close is only reported if the exchange itself succeeded.
    pub fn send(&mut self, host: &str, msg: &[u8]) -> Result<Vec<u8>, NetError> {
        let remote = format!("{}:{}", host, self.options.port);
        let mut connection = self.network.connect(&remote).map_err(net)?;
        let exchanged = exchange(&mut connection, msg, self.options.read_size);
        let closed = connection.close().map_err(net);
        let response = exchanged?;
        closed?;
        Ok(response)
    }
}

/// Requests `uri` over TCP with default options and returns the body of the
/// response.
///
/// ```rust,no_run
/// let body = wget_lite::get("http://example.com/")?;
/// # Ok::<(), wget_lite::network::application::http::Error>(())
/// ```
#[cfg(feature = "std")]
pub fn get(uri: &str) -> Result<Vec<u8>, Error> {
    Client::new(crate::network::tcp::TcpConnector::new()).get(uri)
}

fn net<E: Into<NetError>>(e: E) -> NetError {
    e.into()
}

/// Writes all of `msg`, then reads until the peer closes the connection.
fn exchange<C>(connection: &mut C, msg: &[u8], read_size: usize) -> Result<Vec<u8>, NetError>
where
    C: Read + Write,
    <C as Read>::Error: Into<NetError>,
    <C as Write>::Error: Into<NetError>,
{
    let mut pending = msg;
    while !pending.is_empty() {
        match connection.write(pending).map_err(net)? {
            0 => return Err(NetError::WriteError),
            n => pending = &pending[n..],
        }
    }
    connection.flush().map_err(net)?;

    let mut chunk = vec![0u8; read_size.max(1)];
    let mut response = Vec::new();
    loop {
        let n = connection.read(&mut chunk).map_err(net)?;
        if n == 0 {
            // End of data.
            return Ok(response);
        }
        trace!("read {} bytes", n);
        response.extend_from_slice(&chunk[..n]);
    }
}
