use std::fmt;

/// A single MIME header line of an entity.
///
/// The value is kept as a base value plus an ordered list of attributes, rendered as
/// `base; attr1="v1"; attr2="v2"`. Nothing here is validated: a name or value holding
/// `\r` or `\n` ends up verbatim in the encoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    name: String,
    value: String,
    attributes: Vec<(String, String)>,
}

impl MessageHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), attributes: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base value, without attributes
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the value of `attribute`, matched case-insensitively.
    pub fn attribute(&self, attribute: &str) -> Option<&str> {
        self.attributes.iter().find(|(name, _)| name.eq_ignore_ascii_case(attribute)).map(|(_, value)| value.as_str())
    }

    fn matches(&self, field: &str) -> bool {
        self.name.eq_ignore_ascii_case(field)
    }

    fn set_attribute(&mut self, attribute: &str, value: &str) {
        match self.attributes.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(attribute)) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.attributes.push((attribute.to_owned(), value.to_owned())),
        }
    }

    /// Writes the full value, base and attributes, into `f`.
    pub(crate) fn fmt_value(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(&self.value)?;
        for (index, (name, value)) in self.attributes.iter().enumerate() {
            if index > 0 || !self.value.is_empty() {
                f.write_str("; ")?;
            }
            write!(f, "{name}=\"{value}\"")?;
        }
        Ok(())
    }

    /// The full rendered value, base and attributes
    pub fn full_value(&self) -> String {
        let mut value = String::with_capacity(self.value.len());
        let _ = self.fmt_value(&mut value);
        value
    }
}

impl fmt::Display for MessageHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        self.fmt_value(f)
    }
}

/// Ordered list of the headers of an entity.
///
/// Insertion order is the output order. Field names are compared case-insensitively,
/// and when a name occurs more than once the mutators address the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    headers: Vec<MessageHeader>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the first header named `field` with exactly `value`, dropping its
    /// attributes, or appends a new header when none exists.
    pub fn set_value(&mut self, value: impl Into<String>, field: &str) {
        match self.get_mut(field) {
            Some(header) => {
                header.value = value.into();
                header.attributes.clear();
            }
            None => self.headers.push(MessageHeader::new(field, value)),
        }
    }

    /// Adds `attribute="value"` to the first header named `field`, creating the header
    /// with an empty base value when none exists. An attribute already present on that
    /// header is overwritten in place.
    pub fn set_attribute(&mut self, attribute: &str, value: &str, field: &str) {
        if self.get(field).is_none() {
            self.headers.push(MessageHeader::new(field, ""));
        }
        if let Some(header) = self.get_mut(field) {
            header.set_attribute(attribute, value);
        }
    }

    /// Appends `header` without looking for an existing one of the same name.
    pub fn push(&mut self, header: MessageHeader) {
        self.headers.push(header);
    }

    /// Removes every header named `field`, returning how many were removed.
    pub fn remove(&mut self, field: &str) -> usize {
        let before = self.headers.len();
        self.headers.retain(|header| !header.matches(field));
        before - self.headers.len()
    }

    pub fn get(&self, field: &str) -> Option<&MessageHeader> {
        self.headers.iter().find(|header| header.matches(field))
    }

    fn get_mut(&mut self, field: &str) -> Option<&mut MessageHeader> {
        self.headers.iter_mut().find(|header| header.matches(field))
    }

    /// The full rendered value of the first header named `field`
    pub fn value(&self, field: &str) -> Option<String> {
        self.get(field).map(MessageHeader::full_value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageHeader> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a MessageHeader;
    type IntoIter = std::slice::Iter<'a, MessageHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders every header as `Name: value\r\n`, in insertion order.
impl fmt::Display for HeaderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in &self.headers {
            write!(f, "{header}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_appends_then_replaces() {
        let mut headers = HeaderList::new();
        headers.set_value("text/plain", "Content-Type");
        headers.set_value("form-data", "Content-Disposition");
        assert_eq!(headers.len(), 2);

        headers.set_value("application/json", "content-type");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.value("Content-Type").as_deref(), Some("application/json"));
        // replaced entry keeps its position and original name
        assert_eq!(headers.iter().next().map(MessageHeader::name), Some("Content-Type"));
    }

    #[test]
    fn set_value_drops_attributes() {
        let mut headers = HeaderList::new();
        headers.set_value("form-data", "Content-Disposition");
        headers.set_attribute("name", "field", "Content-Disposition");
        headers.set_value("inline", "Content-Disposition");
        assert_eq!(headers.value("Content-Disposition").as_deref(), Some("inline"));
    }

    #[test]
    fn set_value_addresses_first_duplicate() {
        let mut headers = HeaderList::new();
        headers.push(MessageHeader::new("X-Tag", "a"));
        headers.push(MessageHeader::new("X-Tag", "b"));
        headers.set_value("c", "x-tag");
        assert_eq!(headers.to_string(), "X-Tag: c\r\nX-Tag: b\r\n");
    }

    #[test]
    fn set_attribute_layers_onto_base_value() {
        let mut headers = HeaderList::new();
        headers.set_value("form-data", "Content-Disposition");
        headers.set_attribute("name", "upload", "Content-Disposition");
        headers.set_attribute("filename", "a.txt", "Content-Disposition");
        assert_eq!(
            headers.value("Content-Disposition").as_deref(),
            Some(r#"form-data; name="upload"; filename="a.txt""#)
        );

        let header = headers.get("content-disposition").unwrap();
        assert_eq!(header.value(), "form-data");
        assert_eq!(header.attribute("FILENAME"), Some("a.txt"));
    }

    #[test]
    fn set_attribute_creates_missing_header() {
        let mut headers = HeaderList::new();
        headers.set_attribute("charset", "utf-8", "Content-Type");
        assert_eq!(headers.to_string(), "Content-Type: charset=\"utf-8\"\r\n");

        headers.set_attribute("format", "flowed", "Content-Type");
        assert_eq!(headers.to_string(), "Content-Type: charset=\"utf-8\"; format=\"flowed\"\r\n");
    }

    #[test]
    fn set_attribute_overwrites_in_place() {
        let mut headers = HeaderList::new();
        headers.set_value("form-data", "Content-Disposition");
        headers.set_attribute("name", "a", "Content-Disposition");
        headers.set_attribute("filename", "x.bin", "Content-Disposition");
        headers.set_attribute("name", "b", "Content-Disposition");
        assert_eq!(
            headers.value("Content-Disposition").as_deref(),
            Some(r#"form-data; name="b"; filename="x.bin""#)
        );
    }

    #[test]
    fn render_in_insertion_order() {
        let mut headers = HeaderList::new();
        assert_eq!(headers.to_string(), "");

        headers.set_value("b", "B-Header");
        headers.set_value("a", "A-Header");
        assert_eq!(headers.to_string(), "B-Header: b\r\nA-Header: a\r\n");
    }

    #[test]
    fn remove_all_matches() {
        let mut headers = HeaderList::new();
        headers.push(MessageHeader::new("X-Tag", "a"));
        headers.push(MessageHeader::new("Content-Type", "text/plain"));
        headers.push(MessageHeader::new("x-tag", "b"));
        assert_eq!(headers.remove("X-TAG"), 2);
        assert_eq!(headers.len(), 1);
        assert!(headers.get("x-tag").is_none());
    }

    #[test]
    fn full_value_matches_rendered_line() {
        let mut headers = HeaderList::new();
        headers.set_value("form-data", "Content-Disposition");
        headers.set_attribute("name", "a", "Content-Disposition");
        let header = headers.get("Content-Disposition").unwrap();

        assert_eq!(header.full_value(), r#"form-data; name="a""#);
        assert_eq!(header.to_string(), format!("Content-Disposition: {}", header.full_value()));
    }

    #[test]
    fn values_are_not_sanitized() {
        let mut headers = HeaderList::new();
        headers.set_value("a\r\nInjected: yes", "X-Raw");
        assert_eq!(headers.to_string(), "X-Raw: a\r\nInjected: yes\r\n");
    }
}
