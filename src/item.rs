use crate::{
    element::{Element, Elements},
    error::RssResult,
    model::ItemSpec,
};

/// A validated `<item>` block, detached from any channel.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Item {
    element: Element,
}

impl Item {
    /// Validates `spec`: `title`, `link` and `description` are required, then
    /// `author`, `category`, `comments`, `guid` and `pubDate` when present.
    #[tracing::instrument(skip(spec), fields(title = spec.title.as_deref()))]
    pub fn new(spec: &ItemSpec) -> RssResult<Self> {
        let mut e = Elements::new();
        e.require(spec.title.as_deref(), "title")?
            .require(spec.link.as_deref(), "link")?
            .require(spec.description.as_deref(), "description")?
            .optional(spec.author.as_deref(), "author")
            .optional(spec.category.as_deref(), "category")
            .optional(spec.comments.as_deref(), "comments")
            .optional(spec.guid.as_deref(), "guid")
            .optional(spec.pub_date.as_deref(), "pubDate");

        Ok(Self {
            element: e.into_block("item"),
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    /// Rendered `<item>` block at `indent`.
    pub fn render(&self, indent: &str) -> String {
        crate::render::render_element(&self.element, indent)
    }
}
