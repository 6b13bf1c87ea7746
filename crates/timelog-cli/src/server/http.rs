//! Just enough HTTP/1.1 for the log page.
//!
//! One request per connection: the request head and a `Content-Length`
//! body are read, one response is written, and the connection is closed.
//! Chunked bodies are refused.

use std::collections::HashMap;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use url::{form_urlencoded, Url};

/// Largest accepted request head or body, in bytes.
const MAX_SIZE: usize = 64 * 1024;

/// An error reading a request.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed request: {0}")]
    Malformed(String),

    #[error("request larger than 64 KiB")]
    TooLarge,
}

/// A parsed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Normalized request path without the query string, still
    /// percent-encoded.
    pub path: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// Get a header by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Later duplicates of a field replace earlier ones.
    pub fn form(&self) -> HashMap<String, String> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }
}

/// Read one request from a buffered stream.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut head_size = 0;
    let request_line = read_head_line(reader, &mut head_size).await?;
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(_version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::Malformed(format!(
            "bad request line '{request_line}'"
        )));
    };
    let path = request_path(target)?;

    let mut headers = HashMap::new();
    loop {
        let line = read_head_line(reader, &mut head_size).await?;
        if line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            return Err(HttpError::Malformed(format!("bad header '{line}'")));
        };
        headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    if headers.contains_key("transfer-encoding") {
        return Err(HttpError::Malformed(
            "transfer-encoding is not supported, send a content-length".into(),
        ));
    }
    let length = match headers.get("content-length") {
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| HttpError::Malformed(format!("bad content-length '{value}'")))?,
        None => 0,
    };
    if length > MAX_SIZE {
        return Err(HttpError::TooLarge);
    }
    let mut body = vec![0; length];
    reader.read_exact(&mut body).await?;

    Ok(Request {
        method: method.to_string(),
        path,
        headers,
        body,
    })
}

/// Resolve a request target (origin or absolute form) to its path.
fn request_path(target: &str) -> Result<String, HttpError> {
    let base = Url::parse("http://localhost/")
        .map_err(|e| HttpError::Malformed(format!("bad base url: {e}")))?;
    let url = base
        .join(target)
        .map_err(|e| HttpError::Malformed(format!("bad request target '{target}': {e}")))?;
    Ok(url.path().to_string())
}

/// Read one CRLF- or LF-terminated line of the request head.
///
/// At most the remaining head allowance is read, so a line that never ends
/// is cut off at [`MAX_SIZE`].
async fn read_head_line<R>(reader: &mut R, head_size: &mut usize) -> Result<String, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let allowance = MAX_SIZE.saturating_sub(*head_size) + 1;
    let mut line = Vec::new();
    let read = (&mut *reader)
        .take(allowance as u64)
        .read_until(b'\n', &mut line)
        .await?;
    if read == 0 {
        return Err(HttpError::Malformed("connection closed in request head".into()));
    }
    *head_size += read;
    if *head_size > MAX_SIZE {
        return Err(HttpError::TooLarge);
    }
    let line = String::from_utf8(line)
        .map_err(|_| HttpError::Malformed("request head is not valid UTF-8".into()))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// An HTTP response ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    pub fn text(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body,
        }
    }

    /// Serialize status line, headers and body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason(self.status),
            self.content_type,
            self.body.len()
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "",
    }
}
