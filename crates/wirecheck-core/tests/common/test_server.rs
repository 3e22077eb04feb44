//! Minimal HTTP/1.1 server for integration tests.
//!
//! HEAD and GET are answered independently from a scripted [`Reply`], so tests
//! can simulate servers that block HEAD, ignore Range, hang, or hang up. Every
//! request line is recorded for later assertions.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How the server answers one method.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with the body (HEAD: headers only); GET honours `Range: bytes=a-b` with 206.
    Serve,
    /// 200 with the full body, Range ignored.
    ServeIgnoringRange,
    /// Fixed status and reason with a short text body.
    Status(u16, &'static str),
    /// 302 to the given absolute URL.
    Redirect(String),
    /// Read the request, then say nothing for this long and close.
    Hang(Duration),
    /// Read the request and close without a response.
    Close,
}

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub head: Reply,
    pub get: Reply,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            head: Reply::Serve,
            get: Reply::Serve,
            body: b"hello, preflight".to_vec(),
            content_type: "application/octet-stream",
        }
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub method: String,
    pub range: Option<(u64, u64)>,
}

pub struct TestServer {
    pub url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl TestServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.seen().into_iter().map(|s| s.method).collect()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: ServerOptions) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let opts = Arc::new(opts);
    {
        let seen = Arc::clone(&seen);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let opts = Arc::clone(&opts);
                let seen = Arc::clone(&seen);
                thread::spawn(move || handle(stream, &opts, &seen));
            }
        });
    }
    TestServer {
        url: format!("http://127.0.0.1:{}/", port),
        seen,
    }
}

/// Serves JSON `body` to GET (HEAD also allowed).
pub fn start_json(body: &str) -> TestServer {
    start(ServerOptions {
        body: body.as_bytes().to_vec(),
        content_type: "application/json",
        ..ServerOptions::default()
    })
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, opts: &ServerOptions, seen: &Mutex<Vec<Seen>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, range) = parse_request(request);
    seen.lock().unwrap().push(Seen {
        method: method.to_string(),
        range,
    });

    let is_head = method.eq_ignore_ascii_case("HEAD");
    let not_allowed = Reply::Status(405, "Method Not Allowed");
    let reply = if is_head {
        &opts.head
    } else if method.eq_ignore_ascii_case("GET") {
        &opts.get
    } else {
        &not_allowed
    };

    let body = &opts.body[..];
    let total = body.len() as u64;
    let (status, extra_headers, payload): (String, String, &[u8]) = match reply {
        Reply::Hang(d) => {
            thread::sleep(*d);
            return;
        }
        Reply::Close => return,
        Reply::Status(code, reason) => (
            format!("{} {}", code, reason),
            "Content-Type: text/plain\r\n".to_string(),
            reason.as_bytes(),
        ),
        Reply::Redirect(location) => (
            "302 Found".to_string(),
            format!("Location: {}\r\n", location),
            &b""[..],
        ),
        Reply::ServeIgnoringRange => (
            "200 OK".to_string(),
            format!("Content-Type: {}\r\n", opts.content_type),
            body,
        ),
        Reply::Serve => match range {
            Some((start, end_incl)) if !is_head && total > 0 => {
                let start = start.min(total - 1);
                let end_incl = end_incl.min(total - 1).max(start);
                (
                    "206 Partial Content".to_string(),
                    format!(
                        "Content-Type: {}\r\nContent-Range: bytes {}-{}/{}\r\nAccept-Ranges: bytes\r\n",
                        opts.content_type, start, end_incl, total
                    ),
                    &body[start as usize..=end_incl as usize],
                )
            }
            _ => (
                "200 OK".to_string(),
                format!(
                    "Content-Type: {}\r\nAccept-Ranges: bytes\r\n",
                    opts.content_type
                ),
                body,
            ),
        },
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        payload.len(),
        extra_headers
    );
    let _ = stream.write_all(head.as_bytes());
    if !is_head {
        let _ = stream.write_all(payload);
    }
}

/// Returns (method, optional (start, end_inclusive) for Range: bytes=X-Y).
fn parse_request(request: &str) -> (&str, Option<(u64, u64)>) {
    let mut method = "";
    let mut range = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if method.is_empty() {
            method = line.split_whitespace().next().unwrap_or("");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if !name.trim().eq_ignore_ascii_case("range") {
                continue;
            }
            let value = value.trim();
            if let Some(spec) = value.strip_prefix("bytes=") {
                if let Some((a, b)) = spec.split_once('-') {
                    let start = a.trim().parse::<u64>().unwrap_or(0);
                    let end_incl = b.trim().parse::<u64>().unwrap_or(u64::MAX);
                    range = Some((start, end_incl));
                }
            }
        }
    }
    (method, range)
}
