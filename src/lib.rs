//! Builds RSS 2.0 documents from structured channel and item descriptions.
//!
//! Descriptions are validated into immutable [`Element`] trees when a [`Channel`]
//! or [`Item`] is assembled; [`Channel::render`] turns them into indented XML with
//! CDATA-wrapped text.
#![forbid(unsafe_code)]

mod foundation;

pub mod channel;
pub mod dsl;
pub mod element;
pub mod image;
pub mod item;
pub mod model;
pub mod render;

pub use foundation::{core, error};

pub use channel::Channel;
pub use crate::core::{DEFAULT_GENERATOR, INDENT};
pub use dsl::{ChannelBuilder, ImageBuilder, ItemBuilder};
pub use element::{Element, Elements};
pub use crate::error::{RssError, RssResult};
pub use item::Item;
pub use model::{ChannelSpec, FeedSpec, ImageSpec, ItemSpec};
pub use render::{render_document, render_element};
