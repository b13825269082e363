use std::io::{self, Write};
use std::net::TcpStream;

use crate::http::{Status, HTTP_VERSION};

const CRLF: &[u8] = b"\r\n";
const RESPONSE_HEAD_BUF_INIT_CAP: usize = 128;

/// Writes one complete response: status line, Content-Type, Content-Length,
/// blank line, raw body bytes. The head is assembled in one buffer so the
/// response goes out in two writes.
pub(crate) fn send(
    stream: &mut TcpStream,
    status: &Status,
    content_type: &str,
    body: &[u8],
) -> io::Result<()> {
    let mut head = Vec::with_capacity(RESPONSE_HEAD_BUF_INIT_CAP);

    // status line
    head.extend_from_slice(HTTP_VERSION.as_bytes());
    head.push(b' ');
    head.extend_from_slice(status.code.to_string().as_bytes());
    head.push(b' ');
    head.extend_from_slice(status.reason.as_bytes());
    head.extend_from_slice(CRLF);

    // headers
    head.extend_from_slice(b"Content-Type: ");
    head.extend_from_slice(content_type.as_bytes());
    head.extend_from_slice(CRLF);
    head.extend_from_slice(b"Content-Length: ");
    head.extend_from_slice(body.len().to_string().as_bytes());
    head.extend_from_slice(CRLF);
    head.extend_from_slice(CRLF);

    stream.write_all(&head)?;
    stream.write_all(body)?;
    stream.flush()
}

pub(crate) fn send_error(stream: &mut TcpStream, status: &Status, message: &str) -> io::Result<()> {
    let body = format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.code, message
    );
    send(stream, status, "text/html", body.as_bytes())
}
