//! Byte level encoders for multipart messages
//!
//! - [`HeaderEncoder`]: writes the header block of an entity
//! - [`MultipartEncoder`]: frames entities between the delimiter lines of a boundary
//!
//! Both implement [`tokio_util::codec::Encoder`], so they can also drive a `FramedWrite`,
//! but the inherent methods are infallible and are what [`Multipart`](crate::protocol::Multipart)
//! uses to build its body.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_multipart::codec::{MultipartEncoder, MultipartItem};
//! use micro_multipart::protocol::Part;
//! use tokio_util::codec::Encoder;
//!
//! let part = Part::form_field("name", "value");
//! let mut encoder = MultipartEncoder::new("boundary");
//! let mut buf = BytesMut::new();
//!
//! encoder.encode(MultipartItem::Entity(&part), &mut buf).unwrap();
//! encoder.encode(MultipartItem::Eof, &mut buf).unwrap();
//! assert!(buf.ends_with(b"--boundary--\r\n"));
//! ```

mod header_encoder;
mod multipart_encoder;

pub use header_encoder::HeaderEncoder;
pub use multipart_encoder::MultipartEncoder;
pub use multipart_encoder::MultipartItem;
