//! HTTP protocol layer module
//!
//! Form decoding and response building, decoupled from handler logic.

pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_cgi_html_response,
    build_html_response, build_options_response,
};
