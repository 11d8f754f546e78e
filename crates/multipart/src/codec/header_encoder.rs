//! Header block encoder for multipart entities
//!
//! Writes every header of a [`HeaderList`] as `Name: value\r\n`, in insertion order,
//! followed by the blank line that separates the headers from the content.

use crate::protocol::{HeaderList, MultipartError};

use bytes::{BufMut, BytesMut};
use std::fmt;
use tokio_util::codec::Encoder;

/// Encoder for the header block of an entity, implementing the [`Encoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl HeaderEncoder {
    /// Appends the header lines and the blank separator line to `dst`.
    ///
    /// Names and values are copied as they are, nothing is escaped.
    pub fn encode_head(headers: &HeaderList, dst: &mut BytesMut) {
        let size: usize = headers.iter().map(|header| header.name().len() + header.value().len() + 4).sum();
        dst.reserve(size + 2);

        for header in headers {
            dst.put_slice(header.name().as_bytes());
            dst.put_slice(b": ");
            let _ = header.fmt_value(&mut FastWrite(dst));
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
    }
}

impl Encoder<&HeaderList> for HeaderEncoder {
    type Error = MultipartError;

    fn encode(&mut self, item: &HeaderList, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Self::encode_head(item, dst);
        Ok(())
    }
}

/// Fast writer implementation for writing formatted values to BytesMut.
struct FastWrite<'a>(&'a mut BytesMut);

impl fmt::Write for FastWrite<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_slice(s.as_bytes());
        Ok(())
    }
}
