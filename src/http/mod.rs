//! HTTP module containing client construction and response header helpers.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`headers`] - Extraction of the declared length and content type
//!
//! # Examples
//!
//! ```rust
//! use streamsave::http::{declared_length, declared_content_type};
//! use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2000"));
//! headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/png"));
//!
//! assert_eq!(declared_length(&headers), Some(2000));
//! assert_eq!(declared_content_type(&headers).as_deref(), Some("image/png"));
//! ```

pub mod client;
pub mod headers;

pub use client::{create_http_client, HttpClientConfig};
pub use headers::{declared_content_type, declared_length, parse_declared_length};
