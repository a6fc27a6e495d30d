use crate::errors::{HarvestError, Result};
use crate::scraper::{page_url, PageFetcher, ScraperError};
use crate::storage::ObjectStore;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::JoinHandle;

/// Serves canned pages keyed by page number and records every URL asked for.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, std::result::Result<String, u16>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_pages(pages: Vec<String>) -> Self {
        let mut fetcher = Self::default();
        for (i, html) in pages.into_iter().enumerate() {
            fetcher.pages.insert(page_url(i as u32 + 1), Ok(html));
        }
        fetcher
    }

    pub fn failing_on(mut self, page: u32, status: u16) -> Self {
        self.pages.insert(page_url(page), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<String, ScraperError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(status)) => Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(ScraperError::Network(format!("no route to {url}"))),
        }
    }
}

pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryStore {
    pub objects: Mutex<Vec<StoredObject>>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

impl ObjectStore for MemoryStore {
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        if self.fail {
            return Err(HarvestError::Storage("bucket unavailable".into()));
        }
        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

/// A listing with only a title and a price anchor.
pub fn minimal_listing(title: &str, price: &str) -> String {
    format!(
        r#"<li role="article">
            <h2 class="_36dfb99f">{title}</h2>
            <span class="dc381b54">{price}</span>
        </li>"#
    )
}

pub fn full_listing() -> String {
    r#"<li role="article" class="ef447dde">
        <article>
            <a class="d870ae17 _7ac32433" href="/Property/dha_phase_6_house-123-1.html" title="house">link</a>
            <h2 class="_36dfb99f">
                10 Marla House in DHA
            </h2>
            <div><span class="c2cc9762">PKR</span><span class="dc381b54"> 3.1 Crore </span></div>
            <div class="db1aca2f">DHA Phase 6, DHA Defence</div>
            <span class="_6d9b9b83" aria-label="Beds">5</span>
            <span class="_6d9b9b83" aria-label="Baths">6</span>
            <span class="_6d9b9b83" aria-label="Area"><span>10 Marla</span></span>
            <span aria-label="Listing creation date">Added: 2 days ago</span>
            <span aria-label="Listing updated date">Updated: 1 hour ago</span>
            <img aria-label="Agency photo" src="" data-src="https://images.zameen.com/agency.jpg" alt="agency">
        </article>
    </li>"#
        .to_string()
}

pub fn results_page(listings: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Homes</title></head><body><ul>{}</ul></body></html>",
        listings.join("\n")
    )
}

/// Accepts a single connection, answers it with `status` and `body`, and
/// hands back the raw request it received.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
