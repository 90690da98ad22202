//! Form data decoding module
//!
//! Parses `application/x-www-form-urlencoded` payloads (query strings
//! and request bodies) into an ordered field list.

/// Decoded form fields in submission order.
///
/// Names may repeat; `get` returns the last occurrence, the same result
/// as inserting the raw pairs into a text-keyed map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Parse a urlencoded byte payload into form fields
    pub fn parse(input: &[u8]) -> Self {
        Self {
            fields: form_urlencoded::parse(input).into_owned().collect(),
        }
    }

    /// Parse an optional query string (without the leading '?')
    pub fn from_query(query: Option<&str>) -> Self {
        query.map_or_else(Self::default, |q| Self::parse(q.as_bytes()))
    }

    /// Append fields decoded from a further payload (e.g. a POST body).
    ///
    /// Appended fields win over earlier ones with the same name.
    pub fn extend_from(&mut self, input: &[u8]) {
        self.fields
            .extend(form_urlencoded::parse(input).into_owned());
    }

    /// Look up a field by name; the last occurrence wins
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_decodes_to_space() {
        let form = FormData::parse(b"textcontent=Hello+World");
        assert_eq!(form.get("textcontent"), Some("Hello World"));
    }

    #[test]
    fn test_percent_decoding() {
        let form = FormData::parse(b"textcontent=%3Cb%3Ehi%3C%2Fb%3E");
        assert_eq!(form.get("textcontent"), Some("<b>hi</b>"));
    }

    #[test]
    fn test_utf8_value() {
        let form = FormData::parse("textcontent=%E4%BD%A0%E5%A5%BD".as_bytes());
        assert_eq!(form.get("textcontent"), Some("你好"));
    }

    #[test]
    fn test_missing_field() {
        let form = FormData::parse(b"other=1");
        assert_eq!(form.get("textcontent"), None);
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_empty_value() {
        let form = FormData::parse(b"textcontent=");
        assert_eq!(form.get("textcontent"), Some(""));
    }

    #[test]
    fn test_bare_key_decodes_to_empty_value() {
        let form = FormData::parse(b"textcontent");
        assert_eq!(form.get("textcontent"), Some(""));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let form = FormData::parse(b"textcontent=first&textcontent=second");
        assert_eq!(form.get("textcontent"), Some("second"));
        assert_eq!(form.len(), 2);
    }

    #[test]
    fn test_extend_overrides_query_fields() {
        let mut form = FormData::from_query(Some("textcontent=from-query&page=1"));
        form.extend_from(b"textcontent=from-body");
        assert_eq!(form.get("textcontent"), Some("from-body"));
        assert_eq!(form.get("page"), Some("1"));
    }

    #[test]
    fn test_empty_input() {
        let form = FormData::from_query(None);
        assert!(form.is_empty());
        assert_eq!(form.get("textcontent"), None);
    }
}
