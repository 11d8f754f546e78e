use crate::boundary::{BoundaryGenerator, RandomBoundary};
use crate::codec::MultipartEncoder;
use crate::protocol::{Entity, HeaderList, MultipartError, Part};
use bytes::{BufMut, Bytes, BytesMut};
use http::{HeaderValue, Request, header, request};
use mime::Mime;
use std::fmt;
use tracing::debug;

const CONTENT_TYPE: &str = "Content-Type";

/// Subtype of a `multipart/*` media type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Subtype {
    Mixed,
    Alternative,
    Digest,
    Parallel,
    Related,
    FormData,
}

impl Subtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Mixed => "mixed",
            Subtype::Alternative => "alternative",
            Subtype::Digest => "digest",
            Subtype::Parallel => "parallel",
            Subtype::Related => "related",
            Subtype::FormData => "form-data",
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multipart container: one boundary and an ordered sequence of entities.
///
/// The container frames every entity between delimiter lines and ends the body with the
/// closing delimiter. Being an [`Entity`] itself, it can be nested inside another container.
///
/// # Example
///
/// ```
/// use micro_multipart::protocol::{Multipart, Subtype};
///
/// let mut form = Multipart::with_boundary(Subtype::FormData, "XyZ");
/// form.append_field("title", "hello");
///
/// assert_eq!(form.content_type(), "multipart/form-data; boundary=XyZ");
/// assert_eq!(
///     &form.body()[..],
///     &b"--XyZ\r\n\
///        Content-Disposition: form-data; name=\"title\"\r\n\
///        Content-Type: charset=\"utf-8\"\r\n\
///        \r\n\
///        hello\r\n\
///        --XyZ--\r\n"[..]
/// );
/// ```
#[derive(Debug)]
pub struct Multipart {
    subtype: Subtype,
    boundary: String,
    headers: HeaderList,
    preamble: Option<String>,
    entities: Vec<Box<dyn Entity>>,
}

impl Multipart {
    /// Creates an empty container with a random boundary.
    pub fn new(subtype: Subtype) -> Self {
        Self::with_generator(subtype, &RandomBoundary::default())
    }

    /// Creates an empty `multipart/form-data` container with a random boundary.
    pub fn form_data() -> Self {
        Self::new(Subtype::FormData)
    }

    pub fn with_generator<G: BoundaryGenerator + ?Sized>(subtype: Subtype, generator: &G) -> Self {
        Self::with_boundary(subtype, generator.generate())
    }

    /// Creates an empty container using `boundary` verbatim.
    ///
    /// The boundary is not checked against the content of the entities appended later.
    pub fn with_boundary(subtype: Subtype, boundary: impl Into<String>) -> Self {
        let boundary = boundary.into();
        let mut headers = HeaderList::new();
        headers.set_value(format!("multipart/{subtype}; boundary={boundary}"), CONTENT_TYPE);
        Self { subtype, boundary, headers, preamble: None, entities: Vec::new() }
    }

    pub fn append(&mut self, entity: impl Entity + 'static) {
        self.entities.push(Box::new(entity));
    }

    /// Appends a [`Part::form_field`].
    pub fn append_field(&mut self, name: &str, value: impl Into<String>) {
        self.append(Part::form_field(name, value));
    }

    /// Appends a [`Part::file`].
    pub fn append_file(&mut self, name: &str, data: impl Into<Bytes>, file_name: Option<&str>, content_type: Option<&str>) {
        self.append(Part::file(name, data, file_name, content_type));
    }

    /// Text written before the first delimiter, ignored by conforming readers
    pub fn set_preamble(&mut self, preamble: impl Into<String>) {
        self.preamble = Some(preamble.into());
    }

    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }

    pub fn subtype(&self) -> Subtype {
        self.subtype
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn headers_mut(&mut self) -> &mut HeaderList {
        &mut self.headers
    }

    pub fn entities(&self) -> &[Box<dyn Entity>] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The `Content-Type` value announcing this container.
    ///
    /// This is the container's `Content-Type` header, falling back to
    /// `multipart/<subtype>; boundary=<boundary>` when that header was removed.
    pub fn content_type(&self) -> String {
        self.headers.value(CONTENT_TYPE).unwrap_or_else(|| format!("multipart/{}; boundary={}", self.subtype, self.boundary))
    }

    pub fn header_value(&self) -> Result<HeaderValue, MultipartError> {
        HeaderValue::from_str(&self.content_type()).map_err(MultipartError::invalid_header)
    }

    pub fn mime(&self) -> Result<Mime, MultipartError> {
        self.content_type().parse().map_err(MultipartError::invalid_mime)
    }

    /// Encodes the framed entities, without the container's own headers.
    pub fn body(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.estimated_size());
        self.write_content(&mut dst);
        dst.freeze()
    }

    /// Builds a request carrying the encoded body.
    ///
    /// Only `Content-Type` is taken from the container headers, others such as a
    /// `Content-Disposition` meant for nesting stay out of the request. `Content-Length`
    /// is set to the body length. Nothing is sent.
    pub fn into_request(self, builder: request::Builder) -> Result<Request<Bytes>, MultipartError> {
        let content_type = self.header_value()?;
        let body = self.body();

        debug!(boundary = %self.boundary, entities = self.entities.len(), body_size = body.len(), "build multipart request");
        Ok(builder.header(header::CONTENT_TYPE, content_type).header(header::CONTENT_LENGTH, body.len()).body(body)?)
    }

    fn estimated_size(&self) -> usize {
        let framing = (self.boundary.len() + 8) * (self.entities.len() + 1);
        let preamble = self.preamble.as_ref().map_or(0, |preamble| preamble.len() + 2);
        framing + preamble + self.entities.len() * 128
    }
}

impl Entity for Multipart {
    fn headers(&self) -> &HeaderList {
        &self.headers
    }

    fn write_content(&self, dst: &mut BytesMut) {
        if let Some(preamble) = &self.preamble {
            dst.put_slice(preamble.as_bytes());
            dst.put_slice(b"\r\n");
        }

        let mut encoder = MultipartEncoder::new(self.boundary.clone());
        for entity in &self.entities {
            encoder.encode_entity(entity.as_ref(), dst);
        }
        encoder.encode_eof(dst);
    }
}

impl fmt::Display for Multipart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.headers)?;
        if let Some(preamble) = &self.preamble {
            write!(f, "{preamble}\r\n")?;
        }
        for entity in &self.entities {
            write!(f, "--{}\r\n{entity}\r\n", self.boundary)?;
        }
        write!(f, "--{}--\r\n", self.boundary)
    }
}
