//! HTTP response building module
//!
//! Provides builders for the response shapes the server emits, decoupled
//! from specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, POST, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, POST, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build generic HTML response
pub fn build_html_response(
    content: String,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_html_with_content_type(content, "text/html; charset=utf-8", http_config, is_head)
}

/// Build an HTML response carrying the legacy `text/html;charset=utf8`
/// content type.
///
/// The value is emitted byte-for-byte (no space, no dash in the charset
/// token); the echo page's clients match it exactly.
pub fn build_cgi_html_response(
    content: String,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_html_with_content_type(content, "text/html;charset=utf8", http_config, is_head)
}

fn build_html_with_content_type(
    content: String,
    content_type: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-type", content_type)
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("HTML", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            server_name: "TextareaServer/0.1".to_string(),
            enable_cors: false,
            max_body_size: 1024,
        }
    }

    #[test]
    fn test_cgi_html_response_content_type() {
        let resp = build_cgi_html_response("<html></html>".to_string(), &test_http_config(), false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-type").unwrap(),
            "text/html;charset=utf8"
        );
    }

    #[test]
    fn test_html_response_headers() {
        let resp = build_html_response("<html></html>".to_string(), &test_http_config(), false);
        assert_eq!(
            resp.headers().get("Content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            resp.headers().get("Server").unwrap(),
            "TextareaServer/0.1"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "13");
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_head_keeps_content_length() {
        let resp = build_html_response("<html></html>".to_string(), &test_http_config(), true);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "13");
    }

    #[test]
    fn test_cors_header_when_enabled() {
        let mut cfg = test_http_config();
        cfg.enable_cors = true;
        let resp = build_html_response(String::new(), &cfg, false);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[test]
    fn test_405_allow_header() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(
            resp.headers().get("Allow").unwrap(),
            "GET, HEAD, POST, OPTIONS"
        );
    }
}
