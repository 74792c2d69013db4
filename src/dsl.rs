use crate::{
    channel::Channel,
    error::RssResult,
    item::Item,
    model::{ChannelSpec, ImageSpec, ItemSpec},
};

pub struct ChannelBuilder {
    spec: ChannelSpec,
    items: Vec<ItemSpec>,
}

macro_rules! setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, v: impl Into<String>) -> Self {
                self.spec.$name = Some(v.into());
                self
            }
        )*
    };
}

impl ChannelBuilder {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            spec: ChannelSpec {
                title: Some(title.into()),
                link: Some(link.into()),
                description: Some(description.into()),
                ..ChannelSpec::default()
            },
            items: Vec::new(),
        }
    }

    setters!(
        category,
        cloud,
        copyright,
        docs,
        generator,
        language,
        last_build_date,
        managing_editor,
        pub_date,
        rating,
        skip_days,
        skip_hours,
        ttl,
        web_master,
    );

    pub fn image(mut self, image: ImageSpec) -> Self {
        self.spec.image = Some(image);
        self
    }

    /// Queues an item; items are appended in call order by [`Self::build`].
    pub fn item(mut self, item: ItemSpec) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> RssResult<Channel> {
        let mut channel = Channel::new(&self.spec)?;
        for item in &self.items {
            channel.append_item(item)?;
        }
        Ok(channel)
    }
}

pub struct ItemBuilder {
    spec: ItemSpec,
}

impl ItemBuilder {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            spec: ItemSpec {
                title: Some(title.into()),
                link: Some(link.into()),
                description: Some(description.into()),
                ..ItemSpec::default()
            },
        }
    }

    setters!(author, category, comments, guid, pub_date);

    pub fn spec(self) -> ItemSpec {
        self.spec
    }

    pub fn build(self) -> RssResult<Item> {
        Item::new(&self.spec)
    }
}

pub struct ImageBuilder {
    spec: ImageSpec,
}

impl ImageBuilder {
    pub fn new(url: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            spec: ImageSpec {
                url: Some(url.into()),
                title: Some(title.into()),
                link: Some(link.into()),
                ..ImageSpec::default()
            },
        }
    }

    setters!(description);

    pub fn height(mut self, px: u32) -> Self {
        self.spec.height = Some(px.to_string());
        self
    }

    pub fn width(mut self, px: u32) -> Self {
        self.spec.width = Some(px.to_string());
        self
    }

    pub fn build(self) -> ImageSpec {
        self.spec
    }
}
