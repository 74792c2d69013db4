use std::{collections::VecDeque, fmt};

use crate::{
    core::DEFAULT_GENERATOR,
    element::{Element, Elements},
    error::RssResult,
    image,
    item::Item,
    model::{ChannelSpec, FeedSpec, ItemSpec},
    render::render_document,
};

/// An RSS channel: frozen head elements plus a caller-ordered item list.
#[derive(Clone, Debug)]
pub struct Channel {
    head: Vec<Element>,
    items: VecDeque<Item>,
}

impl Channel {
    /// Assembles the channel head in schema order. Fails without building anything
    /// when `title`, `link` or `description` is absent, or when a supplied image
    /// lacks one of its own required fields.
    #[tracing::instrument(skip(spec), fields(title = spec.title.as_deref()))]
    pub fn new(spec: &ChannelSpec) -> RssResult<Self> {
        let mut e = Elements::new();
        e.require(spec.title.as_deref(), "title")?
            .require(spec.link.as_deref(), "link")?
            .require(spec.description.as_deref(), "description")?
            .optional(spec.category.as_deref(), "category")
            .optional(spec.cloud.as_deref(), "cloud")
            .optional(spec.copyright.as_deref(), "copyright")
            .optional(spec.docs.as_deref(), "docs")
            .optional_or(
                spec.generator.as_deref(),
                "generator",
                Some(DEFAULT_GENERATOR),
            );
        if let Some(block) = image::assemble(spec.image.as_ref())? {
            e.push(block);
        }
        e.optional(spec.language.as_deref(), "language")
            .optional(spec.last_build_date.as_deref(), "lastBuildDate")
            .optional(spec.managing_editor.as_deref(), "managingEditor")
            .optional(spec.pub_date.as_deref(), "pubDate")
            .optional(spec.rating.as_deref(), "rating")
            .optional(spec.skip_days.as_deref(), "skipDays")
            .optional(spec.skip_hours.as_deref(), "skipHours")
            .optional(spec.ttl.as_deref(), "ttl")
            .optional(spec.web_master.as_deref(), "webMaster");

        tracing::debug!(head_len = e.len(), "channel assembled");
        Ok(Self {
            head: e.into_vec(),
            items: VecDeque::new(),
        })
    }

    /// Builds a channel and appends `feed.items` in order. Any invalid item
    /// fails the whole feed.
    pub fn from_feed(feed: &FeedSpec) -> RssResult<Self> {
        let mut channel = Self::new(&feed.channel)?;
        let items = feed
            .items
            .iter()
            .map(Item::new)
            .collect::<RssResult<Vec<_>>>()?;
        channel.items.extend(items);
        Ok(channel)
    }

    /// Validates an item without attaching it.
    pub fn create_item(&self, spec: &ItemSpec) -> RssResult<Item> {
        Item::new(spec)
    }

    pub fn prepend_item(&mut self, spec: &ItemSpec) -> RssResult<()> {
        let item = Item::new(spec)?;
        self.push_item_front(item);
        Ok(())
    }

    pub fn append_item(&mut self, spec: &ItemSpec) -> RssResult<()> {
        let item = Item::new(spec)?;
        self.push_item_back(item);
        Ok(())
    }

    pub fn push_item_front(&mut self, item: Item) {
        self.items.push_front(item);
        tracing::debug!(position = "front", items = self.items.len(), "item added");
    }

    pub fn push_item_back(&mut self, item: Item) {
        self.items.push_back(item);
        tracing::debug!(position = "back", items = self.items.len(), "item added");
    }

    pub fn head(&self) -> &[Element] {
        &self.head
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> {
        self.items.iter()
    }

    /// Full RSS document text. Rendering does not touch channel state.
    #[tracing::instrument(skip(self), fields(items = self.items.len()))]
    pub fn render(&self) -> String {
        render_document(&self.head, self.items.iter().map(Item::element))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
