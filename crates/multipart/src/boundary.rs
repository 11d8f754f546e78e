//! Boundary token generation for multipart bodies.
//!
//! A boundary is a fixed prefix followed by random characters drawn from a
//! 62 symbol alphabet (`a-z`, `A-Z`, `0-9`). The token only has to be unlikely
//! to appear inside any part's content, so a fast thread-local generator is used
//! instead of a cryptographic one.
//!
//! The generator never inspects part content: if a caller needs a hard guarantee
//! that the boundary is absent from the payload, it has to check and re-roll itself.
//!
//! # Example
//!
//! ```
//! use micro_multipart::boundary::{generate_boundary, DEFAULT_BOUNDARY_PREFIX};
//!
//! let boundary = generate_boundary(DEFAULT_BOUNDARY_PREFIX, 16);
//! assert!(boundary.starts_with(DEFAULT_BOUNDARY_PREFIX));
//! assert_eq!(boundary.len(), DEFAULT_BOUNDARY_PREFIX.len() + 16);
//! ```

use rand::Rng;
use tracing::trace;

/// Prefix used by [`random_boundary`] and [`RandomBoundary::default`]
pub const DEFAULT_BOUNDARY_PREFIX: &str = "--MicroMultipart";

/// Number of random characters used by [`random_boundary`] and [`RandomBoundary::default`]
pub const DEFAULT_BOUNDARY_LENGTH: usize = 16;

const BOUNDARY_ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates `prefix` followed by `length` random alphanumeric characters.
///
/// A `length` of zero yields the prefix unchanged. The prefix is expected to be
/// ASCII but is not validated.
pub fn generate_boundary(prefix: &str, length: usize) -> String {
    generate_boundary_with(&mut rand::rng(), prefix, length)
}

/// Same as [`generate_boundary`] but draws from the given random source.
pub fn generate_boundary_with<R: Rng>(rng: &mut R, prefix: &str, length: usize) -> String {
    let mut boundary = String::with_capacity(prefix.len() + length);
    boundary.push_str(prefix);
    boundary.extend((0..length).map(|_| char::from(BOUNDARY_ALPHABET[rng.random_range(0..BOUNDARY_ALPHABET.len())])));

    trace!(boundary = %boundary, "generated multipart boundary");
    boundary
}

/// Generates a boundary with the default prefix and length.
pub fn random_boundary() -> String {
    generate_boundary(DEFAULT_BOUNDARY_PREFIX, DEFAULT_BOUNDARY_LENGTH)
}

/// Source of boundary strings for [`Multipart`](crate::protocol::Multipart) containers.
pub trait BoundaryGenerator {
    fn generate(&self) -> String;
}

/// Configurable random boundary generator.
///
/// ```
/// use micro_multipart::boundary::{BoundaryGenerator, RandomBoundary};
///
/// let generator = RandomBoundary::default().with_prefix("--form").with_length(8);
/// assert_eq!(generator.generate().len(), "--form".len() + 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomBoundary {
    prefix: String,
    length: usize,
}

impl RandomBoundary {
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self { prefix: prefix.into(), length }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomBoundary {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY_PREFIX, DEFAULT_BOUNDARY_LENGTH)
    }
}

impl BoundaryGenerator for RandomBoundary {
    fn generate(&self) -> String {
        generate_boundary(&self.prefix, self.length)
    }
}
