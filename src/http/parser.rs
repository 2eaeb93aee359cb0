use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequestLine,
    Incomplete,
}

/// The parsed head of an HTTP request: request line plus headers.
///
/// Routing only looks at the target (the second request-line token); the
/// method and headers are consumed from the stream but carried along
/// uninterpreted.
#[derive(Debug, Clone)]
pub struct RequestHead {
    /// The HTTP method token as received (e.g., "GET")
    pub method: String,
    /// The request target (e.g., "/index.html" or "/app/hello?name=Ana")
    pub target: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
}

/// Parses a request head from a byte buffer.
///
/// Returns the parsed head and the number of bytes consumed, or
/// `ParseError::Incomplete` until the blank line terminating the head has
/// arrived.
pub fn parse_request_head(buf: &[u8]) -> Result<(RequestHead, usize), ParseError> {

    // Look for the end of the head
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head_bytes = &buf[..headers_end];

    let head_str = std::str::from_utf8(head_bytes)
        .map_err(|_| ParseError::InvalidRequestLine)?;

    let mut lines = head_str.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let (method, target, version) = parse_request_line(request_line)?;

    // Headers are consumed but not interpreted by the router
    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let head = RequestHead {
        method,
        target,
        version,
        headers,
    };

    Ok((head, headers_end + 4))
}

/// Parses a bare request line without requiring the terminating blank line.
///
/// Fallback used when a client closes the stream after sending the first
/// line but never sends the head terminator.
pub fn parse_partial_head(buf: &[u8]) -> Result<RequestHead, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidRequestLine)?;
    let first_line = text
        .split(['\r', '\n'])
        .next()
        .ok_or(ParseError::InvalidRequestLine)?;

    let (method, target, version) = parse_request_line(first_line)?;

    Ok(RequestHead {
        method,
        target,
        version,
        headers: HashMap::new(),
    })
}

fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().unwrap_or("HTTP/1.1");

    Ok((method.to_string(), target.to_string(), version.to_string()))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_request_head(req).unwrap();

        assert_eq!(parsed.target, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert_eq!(consumed, req.len());
    }
}
