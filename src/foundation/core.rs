/// One nesting level of output indentation.
pub const INDENT: &str = "\t";

/// Content of `<generator>` when the channel description leaves it absent.
pub const DEFAULT_GENERATOR: &str = "https://crates.io/crates/rss-writer";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

pub const RSS_OPEN: &str = r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#;

pub const RSS_CLOSE: &str = "</rss>";

/// Returns the field's text when it counts as present.
///
/// `None` and `""` are absent. Anything else, whitespace included, is present.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_none_are_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
    }

    #[test]
    fn whitespace_is_present() {
        assert_eq!(present(Some(" ")), Some(" "));
        assert_eq!(present(Some("0")), Some("0"));
    }
}
