use crate::{
    element::{Element, Elements},
    error::RssResult,
    model::ImageSpec,
};

/// Assembles the channel's `<image>` block.
///
/// No image yields `Ok(None)`. A supplied image must carry `url`, `title` and
/// `link`; `description`, `height` and `width` follow when present.
pub fn assemble(image: Option<&ImageSpec>) -> RssResult<Option<Element>> {
    let Some(image) = image else {
        return Ok(None);
    };

    let mut e = Elements::new();
    e.require(image.url.as_deref(), "url")?
        .require(image.title.as_deref(), "title")?
        .require(image.link.as_deref(), "link")?
        .optional(image.description.as_deref(), "description")
        .optional(image.height.as_deref(), "height")
        .optional(image.width.as_deref(), "width");

    Ok(Some(e.into_block("image")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> ImageSpec {
        ImageSpec {
            url: Some("http://x/logo.png".to_string()),
            title: Some("Logo".to_string()),
            link: Some("http://x".to_string()),
            ..ImageSpec::default()
        }
    }

    #[test]
    fn absent_image_contributes_nothing() {
        assert_eq!(assemble(None).unwrap(), None);
    }

    #[test]
    fn schema_order_is_fixed() {
        let spec = ImageSpec {
            width: Some("88".to_string()),
            description: Some("d".to_string()),
            height: Some("31".to_string()),
            ..logo()
        };
        let el = assemble(Some(&spec)).unwrap().unwrap();
        assert_eq!(el.tag(), "image");
        let tags: Vec<_> = el.children().iter().map(Element::tag).collect();
        assert_eq!(
            tags,
            vec!["url", "title", "link", "description", "height", "width"]
        );
    }

    #[test]
    fn supplied_image_requires_url() {
        let spec = ImageSpec {
            url: None,
            ..logo()
        };
        let err = assemble(Some(&spec)).unwrap_err();
        assert_eq!(err.missing_tag(), Some("url"));
    }

    #[test]
    fn empty_image_reports_first_required_field() {
        let err = assemble(Some(&ImageSpec::default())).unwrap_err();
        assert_eq!(err.missing_tag(), Some("url"));
    }
}
