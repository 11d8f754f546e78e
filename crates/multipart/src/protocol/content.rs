use bytes::Bytes;

/// The body of a part.
///
/// Whether the bytes are text is decided when the part is built, so the human readable
/// rendering never has to guess: [`Content::Text`] is echoed, [`Content::Binary`] is
/// summarized by its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// UTF-8 text, written as its bytes
    Text(String),
    /// Opaque bytes, written verbatim
    Binary(Bytes),
}

impl Content {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Content::Text(text) => text.as_bytes(),
            Content::Binary(bytes) => &bytes[..],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Content::Text(_))
    }

    /// Returns the text if this is [`Content::Text`]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text.as_str()),
            Content::Binary(_) => None,
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Content::Text(text) => Bytes::from(text),
            Content::Binary(bytes) => bytes,
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Bytes> for Content {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for Content {
    fn from(bytes: &'static [u8]) -> Self {
        Self::Binary(Bytes::from_static(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_follows_construction() {
        let text = Content::from("hello");
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_bytes(), b"hello");

        let binary = Content::from(b"hello".as_slice());
        assert!(!binary.is_text());
        assert_eq!(binary.as_text(), None);
        assert_eq!(binary.len(), 5);
    }

    #[test]
    fn into_bytes_keeps_payload() {
        assert_eq!(Content::from(String::from("abc")).into_bytes(), Bytes::from_static(b"abc"));
        assert_eq!(Content::from(vec![0u8, 1, 2]).into_bytes(), Bytes::from_static(&[0, 1, 2]));
        assert!(Content::from(Bytes::new()).is_empty());
    }
}
