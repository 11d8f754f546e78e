use crate::protocol::{Entity, MultipartError};
use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::{trace, warn};

/// Item fed to the [`MultipartEncoder`]
#[derive(Debug, Clone, Copy)]
pub enum MultipartItem<'a> {
    /// An entity to frame between delimiter lines
    Entity(&'a dyn Entity),
    /// Marks the end of the body, producing the closing delimiter
    Eof,
}

impl MultipartItem<'_> {
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, MultipartItem::Eof)
    }
}

/// Frames entities with the delimiters of one boundary.
///
/// Every entity is written as `--<boundary>\r\n<entity>\r\n`, and [`MultipartItem::Eof`] writes
/// the closing `--<boundary>--\r\n` line. After the closing line the encoder is finished and
/// further items are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartEncoder {
    boundary: String,
    eof: bool,
    entities: usize,
}

impl MultipartEncoder {
    pub fn new(boundary: impl Into<String>) -> Self {
        Self { boundary: boundary.into(), eof: false, entities: 0 }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Number of entities written so far
    pub fn entities(&self) -> usize {
        self.entities
    }

    pub fn is_finish(&self) -> bool {
        self.eof
    }

    pub fn encode_entity(&mut self, entity: &dyn Entity, dst: &mut BytesMut) {
        if self.eof {
            warn!(boundary = %self.boundary, "encode entity but the multipart body is already closed");
            return;
        }

        self.put_delimiter(dst);
        dst.put_slice(b"\r\n");
        let start = dst.len();
        entity.write(dst);
        dst.put_slice(b"\r\n");

        self.entities += 1;
        trace!(boundary = %self.boundary, index = self.entities, size = dst.len() - start, "encoded multipart entity");
    }

    pub fn encode_eof(&mut self, dst: &mut BytesMut) {
        if self.eof {
            warn!(boundary = %self.boundary, "encode eof but the multipart body is already closed");
            return;
        }

        self.eof = true;
        self.put_delimiter(dst);
        dst.put_slice(b"--\r\n");
        trace!(boundary = %self.boundary, entities = self.entities, "closed multipart body");
    }

    fn put_delimiter(&self, dst: &mut BytesMut) {
        dst.reserve(self.boundary.len() + 4);
        dst.put_slice(b"--");
        dst.put_slice(self.boundary.as_bytes());
    }
}

impl Encoder<MultipartItem<'_>> for MultipartEncoder {
    type Error = MultipartError;

    fn encode(&mut self, item: MultipartItem<'_>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            MultipartItem::Entity(entity) => self.encode_entity(entity, dst),
            MultipartItem::Eof => self.encode_eof(dst),
        }
        Ok(())
    }
}
