use crate::{
    core::present,
    error::{RssError, RssResult},
};

/// A validated, deferred unit of output.
///
/// Elements own copies of their text, so they are independent of the description
/// they were assembled from. Rendering one never mutates it and can be repeated at
/// any indentation (see [`crate::render::render_element`]).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// `<tag><![CDATA[text]]></tag>` on a single line.
    Leaf { tag: &'static str, text: String },
    /// `<tag>` line, children one level deeper, `</tag>` line.
    Block {
        tag: &'static str,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn leaf(tag: &'static str, text: impl Into<String>) -> Self {
        Self::Leaf {
            tag,
            text: text.into(),
        }
    }

    pub fn block(tag: &'static str, children: Vec<Element>) -> Self {
        Self::Block { tag, children }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Leaf { tag, .. } | Self::Block { tag, .. } => tag,
        }
    }

    /// Text of a leaf; `None` for blocks.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Leaf { text, .. } => Some(text),
            Self::Block { .. } => None,
        }
    }

    /// Children of a block; empty for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Block { children, .. } => children,
        }
    }
}

/// Ordered element list under assembly.
///
/// Callers add fields in schema order; the list never reorders. A failed
/// [`Elements::require`] returns the error and the partial list is dropped by `?`.
#[derive(Clone, Debug, Default)]
pub struct Elements {
    inner: Vec<Element>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a leaf for `value`, or fails with the tag name when it is absent.
    pub fn require(&mut self, value: Option<&str>, tag: &'static str) -> RssResult<&mut Self> {
        match present(value) {
            Some(text) => {
                self.inner.push(Element::leaf(tag, text));
                Ok(self)
            }
            None => {
                tracing::debug!(tag, "required field absent");
                Err(RssError::missing(tag))
            }
        }
    }

    /// Appends a leaf for `value` when present; otherwise nothing.
    pub fn optional(&mut self, value: Option<&str>, tag: &'static str) -> &mut Self {
        self.optional_or(value, tag, None)
    }

    /// Appends a leaf for `value` when present, else for `default` when present.
    pub fn optional_or(
        &mut self,
        value: Option<&str>,
        tag: &'static str,
        default: Option<&str>,
    ) -> &mut Self {
        if let Some(text) = present(value).or(present(default)) {
            self.inner.push(Element::leaf(tag, text));
        }
        self
    }

    /// Appends an already assembled element (used for nested blocks).
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.inner.push(element);
        self
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.inner
    }

    pub fn into_block(self, tag: &'static str) -> Element {
        Element::block(tag, self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_appends_present_value() {
        let mut e = Elements::new();
        e.require(Some("T"), "title").unwrap();
        assert_eq!(e.into_vec(), vec![Element::leaf("title", "T")]);
    }

    #[test]
    fn require_rejects_none_and_empty() {
        let mut e = Elements::new();
        let err = e.require(None, "link").unwrap_err();
        assert_eq!(err.missing_tag(), Some("link"));
        let err = e.require(Some(""), "description").unwrap_err();
        assert_eq!(err.missing_tag(), Some("description"));
        assert!(e.is_empty());
    }

    #[test]
    fn optional_skips_absent_values() {
        let mut e = Elements::new();
        e.optional(None, "a").optional(Some(""), "b").optional(Some("c"), "c");
        assert_eq!(e.into_vec(), vec![Element::leaf("c", "c")]);
    }

    #[test]
    fn optional_or_prefers_value_then_default() {
        let mut e = Elements::new();
        e.optional_or(Some("mine"), "generator", Some("fallback"))
            .optional_or(None, "generator", Some("fallback"))
            .optional_or(Some(""), "generator", Some("fallback"))
            .optional_or(None, "generator", None);
        let texts: Vec<_> = e
            .into_vec()
            .iter()
            .map(|el| el.text().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["mine", "fallback", "fallback"]);
    }

    #[test]
    fn into_block_wraps_children_in_order() {
        let mut e = Elements::new();
        e.push(Element::leaf("a", "1")).push(Element::leaf("b", "2"));
        assert_eq!(e.len(), 2);
        let block = e.into_block("x");
        assert_eq!(block.tag(), "x");
        assert_eq!(block.text(), None);
        let tags: Vec<_> = block.children().iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["a", "b"]);
    }
}
