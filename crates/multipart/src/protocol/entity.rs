use crate::codec::HeaderEncoder;
use crate::protocol::HeaderList;
use bytes::BytesMut;
use std::fmt;

/// Anything that can be placed between the boundary delimiters of a [`Multipart`](crate::protocol::Multipart).
///
/// [`Display`](fmt::Display) is the human readable rendering used for debugging, it is
/// never part of the wire output.
pub trait Entity: fmt::Debug + fmt::Display + Send + Sync {
    /// Headers written in front of the content
    fn headers(&self) -> &HeaderList;

    /// Appends the raw content, without headers, to `dst`.
    fn write_content(&self, dst: &mut BytesMut);

    /// Appends the header block, the blank separator line and the content to `dst`.
    ///
    /// No delimiter is written after the content, framing belongs to the enclosing container.
    fn write(&self, dst: &mut BytesMut) {
        HeaderEncoder::encode_head(self.headers(), dst);
        self.write_content(dst);
    }
}
