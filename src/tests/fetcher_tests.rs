use crate::scraper::{HttpFetcher, PageFetcher, ScraperError};
use crate::tests::utils::{minimal_listing, results_page, serve_once};

#[test]
fn returns_body_on_success_with_browser_headers() {
    let page = results_page(&[minimal_listing("DHA Phase 6", "PKR 2.5 Crore")]);
    let (base, server) = serve_once("200 OK", &page);

    let fetcher = HttpFetcher::new().unwrap();
    let body = fetcher.fetch(&format!("{base}/Homes/Lahore-1-1.html")).unwrap();
    assert_eq!(body, page);

    let request = server.join().unwrap().to_ascii_lowercase();
    assert!(request.starts_with("get /homes/lahore-1-1.html"));
    assert!(request.contains("user-agent: mozilla/5.0"));
    assert!(request.contains("accept: text/html"));
}

#[test]
fn non_success_status_is_an_error() {
    let (base, server) = serve_once("404 Not Found", "gone");

    let err = HttpFetcher::new().unwrap().fetch(&base).unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, ScraperError::HttpStatus { status: 404, .. }));
}

#[test]
fn connection_refused_is_a_network_error() {
    // bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = HttpFetcher::new()
        .unwrap()
        .fetch(&format!("http://127.0.0.1:{port}/"))
        .unwrap_err();
    assert!(matches!(err, ScraperError::Network(_)));
}
