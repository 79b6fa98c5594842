//! The element capability surface the annotator consumes.
//!
//! The crate never talks to a real DOM. Anything that can expose attributes
//! and a mutable text body can be annotated; browser hosts adapt their
//! element type to [`TimeElement`], and [`TextElement`] serves non-browser
//! hosts and tests.

use std::collections::BTreeMap;

/// An element carrying attributes and mutable visible text.
///
/// Attribute absence is explicit: [`attribute`](TimeElement::attribute)
/// returns `None` for an attribute that was never set, which is distinct
/// from one set to the empty string.
pub trait TimeElement {
    /// The attribute value, or `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set (or overwrite) an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Append to the element's visible text.
    fn append_text(&mut self, text: &str);
}

/// An in-memory [`TimeElement`]: an attribute map plus a text buffer.
///
/// # Examples
///
/// ```
/// use timetag::{TextElement, TimeElement};
///
/// let mut el = TextElement::new("last Wednesday").with_attribute("datetime", "2021-03-03");
/// assert_eq!(el.attribute("datetime").as_deref(), Some("2021-03-03"));
/// el.append_text("!");
/// assert_eq!(el.text(), "last Wednesday!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextElement {
    attributes: BTreeMap<String, String>,
    text: String,
}

impl TextElement {
    /// Create an element with the given visible text and no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            text: text.into(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// The element's current visible text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TimeElement for TextElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attribute_is_none() {
        let el = TextElement::new("hello");
        assert_eq!(el.attribute("datetime"), None);
    }

    #[test]
    fn test_empty_attribute_is_not_absent() {
        let el = TextElement::new("hello").with_attribute("title", "");
        assert_eq!(el.attribute("title").as_deref(), Some(""));
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut el = TextElement::new("hello").with_attribute("title", "old");
        el.set_attribute("title", "new");
        assert_eq!(el.attribute("title").as_deref(), Some("new"));
    }

    #[test]
    fn test_append_text() {
        let mut el = TextElement::new("a");
        el.append_text("b");
        el.append_text("c");
        assert_eq!(el.text(), "abc");
    }
}
