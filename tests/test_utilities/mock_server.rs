use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// One-shot HTTP server standing in for the NVD API
///
/// Accepts a single connection on localhost, answers it with a canned
/// response and remembers the request line it received.
pub struct MockNvdServer {
    base_url: String,
    handle: Option<JoinHandle<String>>,
}

impl MockNvdServer {
    /// Starts a server answering `200 OK` with `body`
    pub fn start(body: &str) -> Self {
        Self::start_with_status("200 OK", body)
    }

    pub fn start_with_status(status_line: &str, body: &str) -> Self {
        Self::start_raw(status_line, "application/json", body.as_bytes())
    }

    /// Starts a server answering with `body` exactly as given, whatever its encoding
    pub fn start_raw(status_line: &str, content_type: &str, body: &[u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            content_type,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");

            let mut header = String::new();
            while reader.read_line(&mut header).expect("read header") > 0 && header != "\r\n" {
                header.clear();
            }

            stream.write_all(&response).expect("write response");
            request_line.trim_end().to_string()
        });

        Self {
            base_url: format!("http://{}/rest/json/cve/1.0/", addr),
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Waits for the request and returns its line, e.g. `GET /rest/json/cve/1.0/CVE-2021-34527 HTTP/1.1`
    pub fn request_line(mut self) -> String {
        self.handle
            .take()
            .expect("request line already taken")
            .join()
            .expect("mock server thread panicked")
    }
}

/// A localhost URL on which nothing is listening
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("free port address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/rest/json/cve/1.0/", port)
}
