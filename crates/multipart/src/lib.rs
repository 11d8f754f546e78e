//! A micro builder for `multipart/form-data` and other MIME multipart bodies
//!
//! This crate assembles multipart message bodies: it generates a random boundary token,
//! wraps arbitrary content into parts with headers, and serializes parts and headers into
//! a byte buffer suitable as an HTTP request body.
//!
//! # Features
//!
//! - Random boundary generation with a configurable prefix and length
//! - Form field and file upload parts with the standard `Content-Disposition` headers
//! - Ordered, case-insensitive header lists with attribute support
//! - Nested multipart containers
//! - Conversion into [`http::Request`]
//!
//! # Example
//!
//! ```
//! use http::Request;
//! use micro_multipart::protocol::Multipart;
//!
//! let mut form = Multipart::form_data();
//! form.append_field("user", "zava");
//! form.append_file("avatar", vec![0x89, b'P', b'N', b'G'], Some("me.png"), Some("image/png"));
//!
//! let request = form.into_request(Request::post("http://127.0.0.1:8080/upload")).unwrap();
//! let content_type = request.headers()[http::header::CONTENT_TYPE].to_str().unwrap();
//! assert!(content_type.starts_with("multipart/form-data; boundary=--MicroMultipart"));
//! ```
//!
//! # Architecture
//!
//! - [`boundary`]: boundary token generation
//! - [`protocol`]: headers, content, parts and containers
//! - [`codec`]: the byte level encoders used to write them
//!
//! # Wire format
//!
//! ```text
//! --<boundary>\r\n
//! <Header-Name>: <value>\r\n   (repeated, in insertion order)
//! \r\n
//! <raw content bytes>\r\n
//! ...
//! --<boundary>--\r\n
//! ```
//!
//! # Limitations
//!
//! - Encoding only, there is no parser
//! - Bodies are fully buffered, large files are not streamed
//! - Header names and values are not validated, and content is not scanned for the boundary

pub mod boundary;
pub mod codec;
pub mod protocol;
