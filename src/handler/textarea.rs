//! Text area echo handler
//!
//! The echo endpoint: reads the `textcontent` form field and renders it
//! back inside a fixed HTML page, falling back to a placeholder when the
//! field is absent or empty.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::HttpConfig;
use crate::http::{self, form::FormData};
use crate::logger;

/// Form field read from the request
pub const TEXT_FIELD: &str = "textcontent";

/// Placeholder rendered when the field is absent or empty
pub const NOT_ENTERED: &str = "Not entered";

/// Select the display value for a parsed form.
///
/// A field that is present but empty falls back to the placeholder, the
/// same as a missing field.
pub fn display_value(form: &FormData) -> &str {
    match form.get(TEXT_FIELD) {
        Some(value) if !value.is_empty() => value,
        _ => NOT_ENTERED,
    }
}

/// Render the echo page around the display value.
///
/// The markup is fixed: the value is interpolated without HTML escaping
/// and the `<div>` stays unclosed. Clients of this endpoint match the
/// body byte-for-byte.
pub fn render_page(text: &str) -> String {
    format!(
        "<html>\n\
         <head>\n\
         <title>Text Area - Fifth CGI Program</title>\n\
         </head>\n\
         <body>\n\
         <h2> Entered Text Content is {text}</h2>\n\
         <div><a href='/'>Go Back to Root</a>\n\
         </body>\n"
    )
}

/// Handle a request to the echo endpoint.
///
/// GET and HEAD read fields from the query string; POST additionally
/// reads the urlencoded body, whose fields win over query fields. The
/// endpoint always answers with the echo page, whatever the input.
pub async fn serve(
    req: Request<hyper::body::Incoming>,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let is_head = req.method() == Method::HEAD;
    let is_post = req.method() == Method::POST;

    let mut form = FormData::from_query(req.uri().query());

    if is_post {
        match req.into_body().collect().await {
            Ok(collected) => form.extend_from(&collected.to_bytes()),
            // Degrade to the fields seen so far; the page is still served
            Err(e) => logger::log_warning(&format!("Failed to read form body: {e}")),
        }
    }

    let page = render_page(display_value(&form));
    http::build_cgi_html_response(page, http_config, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_present() {
        let form = FormData::parse(b"textcontent=Hello+World");
        assert_eq!(display_value(&form), "Hello World");
    }

    #[test]
    fn test_display_value_absent() {
        let form = FormData::parse(b"");
        assert_eq!(display_value(&form), NOT_ENTERED);
    }

    #[test]
    fn test_display_value_empty() {
        let form = FormData::parse(b"textcontent=");
        assert_eq!(display_value(&form), NOT_ENTERED);
    }

    #[test]
    fn test_render_entered_text() {
        let form = FormData::parse(b"textcontent=Hello+World");
        let page = render_page(display_value(&form));
        assert!(page.contains("<h2> Entered Text Content is Hello World</h2>"));
    }

    #[test]
    fn test_render_not_entered_exact_body() {
        let page = render_page(NOT_ENTERED);
        let expected = "<html>\n\
                        <head>\n\
                        <title>Text Area - Fifth CGI Program</title>\n\
                        </head>\n\
                        <body>\n\
                        <h2> Entered Text Content is Not entered</h2>\n\
                        <div><a href='/'>Go Back to Root</a>\n\
                        </body>\n";
        assert_eq!(page, expected);
    }

    #[test]
    fn test_html_emitted_unescaped() {
        let form = FormData::parse(b"textcontent=%3Cb%3Ehi%3C%2Fb%3E");
        let page = render_page(display_value(&form));
        assert!(page.contains("<h2> Entered Text Content is <b>hi</b></h2>"));
    }

    #[test]
    fn test_link_back_to_root() {
        let page = render_page(NOT_ENTERED);
        assert!(page.contains("<a href='/'>Go Back to Root</a>"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let form = FormData::parse(b"textcontent=same+input");
        let first = render_page(display_value(&form));
        let second = render_page(display_value(&form));
        assert_eq!(first, second);
    }

    #[test]
    fn test_body_field_wins_over_query() {
        let mut form = FormData::from_query(Some("textcontent=from-query"));
        form.extend_from(b"textcontent=from-body");
        assert_eq!(display_value(&form), "from-body");
    }
}
