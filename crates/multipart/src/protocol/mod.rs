//! Data model of multipart messages.
//!
//! - **Headers** ([`header`]): [`MessageHeader`] and the ordered [`HeaderList`]
//! - **Content** ([`content`]): [`Content`], text or opaque bytes
//! - **Entities** ([`entity`]): the [`Entity`] trait shared by parts and containers
//!   - [`Part`]: headers plus content
//!   - [`Multipart`]: a boundary plus an ordered sequence of entities
//! - **Errors** ([`error`]): [`MultipartError`], raised only when converting into `http` types
//!
//! Encoding is total: a part or container always produces bytes, even when a header value
//! or the boundary would make the result malformed. Checking that the boundary does not
//! occur in any content, or that values carry no line breaks, is left to the caller.

mod content;
pub use content::Content;

mod header;
pub use header::HeaderList;
pub use header::MessageHeader;

mod entity;
pub use entity::Entity;

mod part;
pub use part::Part;

mod multipart;
pub use multipart::Multipart;
pub use multipart::Subtype;

mod error;
pub use error::MultipartError;
