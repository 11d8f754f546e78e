use crate::protocol::{Content, Entity, HeaderList};
use bytes::{BufMut, Bytes, BytesMut};
use mime::Mime;
use std::fmt;

const CONTENT_DISPOSITION: &str = "Content-Disposition";
const CONTENT_TYPE: &str = "Content-Type";
const FORM_DATA: &str = "form-data";

/// A single part of a multipart message: ordered headers plus content.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use micro_multipart::protocol::{Entity, Part};
///
/// let part = Part::form_field("field", "hello");
/// let mut buf = BytesMut::new();
/// part.write(&mut buf);
///
/// assert_eq!(
///     &buf[..],
///     b"Content-Disposition: form-data; name=\"field\"\r\nContent-Type: charset=\"utf-8\"\r\n\r\nhello"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    headers: HeaderList,
    content: Content,
}

impl Part {
    /// Creates a part without any headers.
    pub fn new(content: impl Into<Content>) -> Self {
        Self { headers: HeaderList::new(), content: content.into() }
    }

    /// A `multipart/form-data` part holding a form field and its value.
    pub fn form_field(name: &str, value: impl Into<String>) -> Self {
        let mut part = Self::new(Content::Text(value.into()));
        part.set_value(FORM_DATA, CONTENT_DISPOSITION);
        part.set_attribute("name", name, CONTENT_DISPOSITION);
        part.set_attribute("charset", "utf-8", CONTENT_TYPE);
        part
    }

    /// A `multipart/form-data` part holding the whole content of a file.
    ///
    /// `file_name` becomes the `filename` attribute of `Content-Disposition`, and
    /// `content_type` is used verbatim as the `Content-Type` header.
    pub fn file(name: &str, data: impl Into<Bytes>, file_name: Option<&str>, content_type: Option<&str>) -> Self {
        let mut part = Self::new(Content::Binary(data.into()));
        part.set_value(FORM_DATA, CONTENT_DISPOSITION);
        part.set_attribute("name", name, CONTENT_DISPOSITION);
        if let Some(file_name) = file_name {
            part.set_attribute("filename", file_name, CONTENT_DISPOSITION);
        }
        if let Some(content_type) = content_type {
            part.set_value(content_type, CONTENT_TYPE);
        }
        part
    }

    /// Sets the `Content-Type` header from a parsed mime type.
    #[must_use]
    pub fn with_mime(mut self, mime: &Mime) -> Self {
        self.set_value(mime.as_ref(), CONTENT_TYPE);
        self
    }

    /// See [`HeaderList::set_value`]
    pub fn set_value(&mut self, value: impl Into<String>, field: &str) {
        self.headers.set_value(value, field);
    }

    /// See [`HeaderList::set_attribute`]
    pub fn set_attribute(&mut self, attribute: &str, value: &str, field: &str) {
        self.headers.set_attribute(attribute, value, field);
    }

    pub fn headers_mut(&mut self) -> &mut HeaderList {
        &mut self.headers
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }

    /// The form field name from `Content-Disposition`, if any
    pub fn field_name(&self) -> Option<&str> {
        self.headers.get(CONTENT_DISPOSITION).and_then(|header| header.attribute("name"))
    }

    /// The file name from `Content-Disposition`, if any
    pub fn file_name(&self) -> Option<&str> {
        self.headers.get(CONTENT_DISPOSITION).and_then(|header| header.attribute("filename"))
    }
}

impl Entity for Part {
    fn headers(&self) -> &HeaderList {
        &self.headers
    }

    fn write_content(&self, dst: &mut BytesMut) {
        dst.put_slice(self.content.as_bytes());
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.headers)?;
        match &self.content {
            Content::Text(text) => f.write_str(text),
            Content::Binary(bytes) => write!(f, "({} bytes)", bytes.len()),
        }
    }
}
