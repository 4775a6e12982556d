#![allow(dead_code)]

use carbon_headlines::Headline;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, Once};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const POLITICO_FIXTURE: &str = include_str!("../fixtures/politico_energy.xml");
pub const EUOBSERVER_FIXTURE: &str = include_str!("../fixtures/euobserver.atom");
pub const EMPTY_FIXTURE: &str = include_str!("../fixtures/empty_channel.xml");
pub const LINKED_ENTRIES_FIXTURE: &str = include_str!("../fixtures/linked_entries.atom");

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Cloneable in-memory writer for capturing formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn headline(source: &str, url: &str, title: &str) -> Headline {
    Headline {
        source: source.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        published_at: "2025-10-14T09:30:00Z".to_string(),
        excerpt: String::new(),
        is_headline: true,
    }
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the URL to request and a receiver that yields the raw request
/// head the client sent.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&request).into_owned());

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{}/feed", addr), rx)
}
