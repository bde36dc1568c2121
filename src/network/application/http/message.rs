use super::error::MessageError;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

/// The protocol version implemented here. Any other version is rejected.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// End-of-line sequence terminating the start line and every header line.
pub const EOL: &[u8] = b"\r\n";

const SPACE: char = ' ';
const COLON: char = ':';

/// Header fields, from field name to field value.
///
/// Names are case-sensitive as written; setting a name twice keeps the last
/// value. Iteration is sorted by name, so formatting is deterministic.
pub type Header = BTreeMap<String, String>;

/// An HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    /// The request method, e.g. `GET`.
    pub method: String,
    /// The requested path, including any query and fragment.
    pub path: String,
    /// Header fields.
    pub header: Header,
    /// Body data.
    pub body: Vec<u8>,
}

/// An HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// The status code.
    pub status: u16,
    /// Description of the reason for the status code.
    pub reason: String,
    /// Header fields.
    pub header: Header,
    /// Body data.
    pub body: Vec<u8>,
}

/// Formats a request into a protocol message.
pub fn format_request(request: &Request) -> Result<Vec<u8>, MessageError> {
    let start_line = format_request_line(&request.method, &request.path);
    format_message(&start_line, &request.header, &request.body)
}

/// Parses a request protocol message.
pub fn parse_request(msg: &[u8]) -> Result<Request, MessageError> {
    let (start_line, header, body) = parse_message(msg)?;
    let (method, path) = parse_request_line(&start_line)?;
    Ok(Request {
        method: method.into(),
        path: path.into(),
        header,
        body: body.to_vec(),
    })
}

/// Formats a response into a protocol message.
pub fn format_response(response: &Response) -> Result<Vec<u8>, MessageError> {
    let start_line = format_status_line(response.status, &response.reason);
    format_message(&start_line, &response.header, &response.body)
}

/// Parses a response protocol message.
pub fn parse_response(msg: &[u8]) -> Result<Response, MessageError> {
    let (start_line, header, body) = parse_message(msg)?;
    let (status, reason) = parse_status_line(&start_line)?;
    Ok(Response {
        status,
        reason: reason.into(),
        header,
        body: body.to_vec(),
    })
}

/// `METHOD PATH HTTP/1.1`
pub(crate) fn format_request_line(method: &str, path: &str) -> String {
    format!("{} {} {}", method, path, HTTP_VERSION)
}

/// Returns the method and path of a request line.
pub(crate) fn parse_request_line(line: &str) -> Result<(&str, &str), MessageError> {
    let (method, rest) = line
        .split_once(SPACE)
        .ok_or(MessageError::MalformedStartLine)?;
    let (path, version) = rest
        .split_once(SPACE)
        .ok_or(MessageError::MalformedStartLine)?;
    if version != HTTP_VERSION {
        return Err(MessageError::UnsupportedVersion);
    }
    Ok((method, path))
}

/// `HTTP/1.1 STATUS REASON`
pub(crate) fn format_status_line(status: u16, reason: &str) -> String {
    format!("{} {} {}", HTTP_VERSION, status, reason)
}

/// Returns the status code and reason phrase of a status line. The reason is
/// everything after the second space, spaces included.
pub(crate) fn parse_status_line(line: &str) -> Result<(u16, &str), MessageError> {
    let (version, rest) = line
        .split_once(SPACE)
        .ok_or(MessageError::MalformedStartLine)?;
    if version != HTTP_VERSION {
        return Err(MessageError::UnsupportedVersion);
    }
    let (status, reason) = rest
        .split_once(SPACE)
        .ok_or(MessageError::MalformedStartLine)?;
    let status = status
        .parse::<u16>()
        .map_err(|_| MessageError::InvalidStatus)?;
    Ok((status, reason))
}

/// Formats a header as `name: value` lines, without line terminators.
pub(crate) fn format_header(header: &Header) -> Vec<String> {
    header
        .iter()
        .map(|(name, value)| format!("{}{} {}", name, COLON, value))
        .collect()
}

/// Parses header lines into fields. Only the first `:` separates name from
/// value; surrounding whitespace is stripped from the value.
pub(crate) fn parse_header<S: AsRef<str>>(lines: &[S]) -> Result<Header, MessageError> {
    let mut header = Header::new();
    for line in lines {
        let line: &str = line.as_ref();
        let (name, value) = line
            .split_once(COLON)
            .ok_or(MessageError::MalformedHeader)?;
        header.insert(name.into(), value.trim().into());
    }
    Ok(header)
}

/// Assembles start line, header lines, the blank line and the body.
pub(crate) fn format_message(
    start_line: &str,
    header: &Header,
    body: &[u8],
) -> Result<Vec<u8>, MessageError> {
    let mut msg = Vec::new();
    encode_latin1(start_line, &mut msg)?;
    msg.extend_from_slice(EOL);
    for line in format_header(header) {
        encode_latin1(&line, &mut msg)?;
        msg.extend_from_slice(EOL);
    }
    msg.extend_from_slice(EOL);
    msg.extend_from_slice(body);
    Ok(msg)
}

/// Divides a message into its start line, header and body.
pub(crate) fn parse_message(msg: &[u8]) -> Result<(String, Header, &[u8]), MessageError> {
    let (mut lines, body) = split_lines(msg)?;
    if lines.is_empty() {
        return Err(MessageError::MissingStartLine);
    }
    let start_line = lines.remove(0);
    let header = parse_header(&lines)?;
    trace!(
        "parsed message: {} header fields, {} body bytes",
        header.len(),
        body.len()
    );
    Ok((start_line, header, body))
}

/// Splits `msg` into decoded lines up to the first blank line and returns
/// them with the bytes that follow it. Nothing after the blank line is
/// scanned.
pub(crate) fn split_lines(msg: &[u8]) -> Result<(Vec<String>, &[u8]), MessageError> {
    let mut lines = Vec::new();
    let mut cursor = 0;
    loop {
        let end = msg[cursor..]
            .windows(EOL.len())
            .position(|window| window == EOL)
            .map(|i| cursor + i)
            .ok_or(MessageError::Incomplete)?;
        let line = &msg[cursor..end];
        cursor = end + EOL.len();
        if line.is_empty() {
            return Ok((lines, &msg[cursor..]));
        }
        lines.push(decode_latin1(line));
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn encode_latin1(text: &str, out: &mut Vec<u8>) -> Result<(), MessageError> {
    for c in text.chars() {
        let byte = u8::try_from(c).map_err(|_| MessageError::Unencodable(c))?;
        out.push(byte);
    }
    Ok(())
}
