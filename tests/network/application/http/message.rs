use rand::Rng;
use rand::distributions::Alphanumeric;
use wget_lite::network::application::http::message::{
    format_request, format_response, parse_request, parse_response,
};
use wget_lite::network::application::http::{Header, MessageError, Request, Response};

fn random_token(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A header value with a random amount of surrounding blanks and an
/// interior colon.
fn random_value(rng: &mut impl Rng) -> (String, String) {
    let (left, right) = (rng.gen_range(1..8), rng.gen_range(0..8));
    let core = format!("{}:{}", random_token(rng, left), random_token(rng, right));
    let padded = format!(
        "{}{}{}",
        " ".repeat(rng.gen_range(0..3)),
        core,
        "\t".repeat(rng.gen_range(0..2))
    );
    (padded, core)
}

fn random_header(rng: &mut impl Rng) -> (Header, Header) {
    let mut sent = Header::new();
    let mut expected = Header::new();
    for _ in 0..rng.gen_range(0..6) {
        let name = format!("X-{}", random_token(rng, 6));
        let (value, trimmed) = random_value(rng);
        sent.insert(name.clone(), value);
        expected.insert(name, trimmed);
    }
    (sent, expected)
}

fn random_body(rng: &mut impl Rng) -> Vec<u8> {
    let len = rng.gen_range(0..256);
    let mut body: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
    if rng.gen_bool(0.5) {
        body.extend_from_slice(b"\r\n\r\n");
    }
    body
}

#[test]
fn test_request_round_trip() {
    let mut header = Header::new();
    header.insert("Host".to_string(), "www.example.com".to_string());
    header.insert("Referer".to_string(), "www.searchengine.com".to_string());
    header.insert("User-Agent".to_string(), "CodeX Special Web Client".to_string());
    let req0 = Request {
        method: "POST".to_string(),
        path: "/api/data".to_string(),
        header,
        body: b"{field: 'foo', value: 42}".to_vec(),
    };

    let msg = format_request(&req0).unwrap();
    let req1 = parse_request(&msg).unwrap();
    assert_eq!(req1, req0);
}

#[test]
fn test_response_round_trip() {
    let web_page = b"<html><body>This is my web page!</body></html>";
    let mut header = Header::new();
    header.insert("Content-Type".to_string(), "text/html".to_string());
    header.insert("Content-Length".to_string(), "46".to_string());
    let resp0 = Response {
        status: 200,
        reason: "OK".to_string(),
        header,
        body: web_page.to_vec(),
    };

    let msg = format_response(&resp0).unwrap();
    let resp1 = parse_response(&msg).unwrap();
    assert_eq!(resp1.status, 200);
    assert_eq!(resp1.reason, "OK");
    assert_eq!(resp1.header.len(), 2);
    assert_eq!(resp1.header["Content-Type"], "text/html");
    assert_eq!(resp1.header["Content-Length"], "46");
    assert_eq!(resp1.body, web_page);
}

#[test]
fn test_random_request_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let (sent, expected) = random_header(&mut rng);
        let (method_len, path_len) = (rng.gen_range(1..8), rng.gen_range(0..16));
        let request = Request {
            method: random_token(&mut rng, method_len).to_uppercase(),
            path: format!("/{}", random_token(&mut rng, path_len)),
            header: sent,
            body: random_body(&mut rng),
        };

        let parsed = parse_request(&format_request(&request).unwrap()).unwrap();
        assert_eq!(parsed.method, request.method);
        assert_eq!(parsed.path, request.path);
        assert_eq!(parsed.header, expected);
        assert_eq!(parsed.body, request.body);
    }
}

#[test]
fn test_random_response_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let (sent, expected) = random_header(&mut rng);
        let response = Response {
            status: rng.gen_range(100..600),
            reason: format!(
                "{} {}",
                random_token(&mut rng, 4),
                random_token(&mut rng, 6)
            ),
            header: sent,
            body: random_body(&mut rng),
        };

        let parsed = parse_response(&format_response(&response).unwrap()).unwrap();
        assert_eq!(parsed.status, response.status);
        assert_eq!(parsed.reason, response.reason);
        assert_eq!(parsed.header, expected);
        assert_eq!(parsed.body, response.body);
    }
}

#[test]
fn test_empty_message_round_trip() {
    let response = Response {
        status: 204,
        reason: "No Content".to_string(),
        ..Response::default()
    };
    let msg = format_response(&response).unwrap();
    assert_eq!(msg, b"HTTP/1.1 204 No Content\r\n\r\n");
    assert_eq!(parse_response(&msg).unwrap(), response);
}

#[test]
fn test_reason_keeps_spaces() {
    let response = parse_response(b"HTTP/1.1 418 I'm  a   teapot \r\n\r\n").unwrap();
    assert_eq!(response.status, 418);
    assert_eq!(response.reason, "I'm  a   teapot ");
}

#[test]
fn test_latin1_header_round_trip() {
    let mut header = Header::new();
    header.insert("A-nic\u{e9}-header".to_string(), "\u{a1}Pretty nice!".to_string());
    let response = Response {
        status: 200,
        reason: "OK".to_string(),
        header,
        body: Vec::new(),
    };
    let msg = format_response(&response).unwrap();
    assert!(msg.windows(2).any(|w| w == b"\xe9-"));
    assert_eq!(parse_response(&msg).unwrap(), response);
}

#[test]
fn test_parse_request_errors() {
    assert_eq!(
        parse_request(b"GET / HTTP/1.0\r\n\r\n"),
        Err(MessageError::UnsupportedVersion)
    );
    assert_eq!(
        parse_request(b"GET / HTTP/1.1\r\nHost example.com\r\n\r\n"),
        Err(MessageError::MalformedHeader)
    );
    assert_eq!(
        parse_request(b"GET / HTTP/1.1\r\nHost: example.com\r\n"),
        Err(MessageError::Incomplete)
    );
}

#[test]
fn test_parse_response_errors() {
    assert_eq!(
        parse_response(b"HTTP/1.1 abc Bad\r\n\r\n"),
        Err(MessageError::InvalidStatus)
    );
    assert_eq!(
        parse_response(b"ICY 200 OK\r\n\r\n"),
        Err(MessageError::UnsupportedVersion)
    );
    assert_eq!(
        parse_response(b"\r\n\r\n"),
        Err(MessageError::MissingStartLine)
    );
}
