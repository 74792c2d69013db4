use rss_writer::{Channel, DEFAULT_GENERATOR, FeedSpec};

#[test]
fn json_fixture_renders_exactly() {
    let s = include_str!("data/simple_feed.json");
    let feed = FeedSpec::from_json(s).unwrap();
    let xml = Channel::from_feed(&feed).unwrap().render();

    let expected = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
         <rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n\
         \n\
         <channel>\n\
         \t<title><![CDATA[Release notes]]></title>\n\
         \t<link><![CDATA[https://example.org]]></link>\n\
         \t<description><![CDATA[Changes & fixes <weekly>]]></description>\n\
         \t<generator><![CDATA[{DEFAULT_GENERATOR}]]></generator>\n\
         \t<image>\n\
         \t\t<url><![CDATA[https://example.org/logo.png]]></url>\n\
         \t\t<title><![CDATA[Release notes]]></title>\n\
         \t\t<link><![CDATA[https://example.org]]></link>\n\
         \t\t<height><![CDATA[31]]></height>\n\
         \t\t<width><![CDATA[88]]></width>\n\
         \t</image>\n\
         \t<language><![CDATA[en]]></language>\n\
         \t<ttl><![CDATA[60]]></ttl>\n\
         \t<item>\n\
         \t\t<title><![CDATA[v1.1]]></title>\n\
         \t\t<link><![CDATA[https://example.org/v1.1]]></link>\n\
         \t\t<description><![CDATA[Faster <b>rendering</b>]]></description>\n\
         \t\t<guid><![CDATA[v1.1]]></guid>\n\
         \t\t<pubDate><![CDATA[Tue, 02 Jan 2024 00:00:00 GMT]]></pubDate>\n\
         \t</item>\n\
         \t<item>\n\
         \t\t<title><![CDATA[v1.0]]></title>\n\
         \t\t<link><![CDATA[https://example.org/v1.0]]></link>\n\
         \t\t<description><![CDATA[First release]]></description>\n\
         \t</item>\n\
         </channel>\n\
         \n\
         </rss>"
    );
    assert_eq!(xml, expected);
}

#[test]
fn json_fixture_missing_image_url_fails() {
    let s = include_str!("data/missing_image_url.json");
    let feed = FeedSpec::from_json(s).unwrap();
    let err = Channel::from_feed(&feed).unwrap_err();
    assert_eq!(err.missing_tag(), Some("url"));
}

#[test]
fn assembled_head_serializes_for_inspection() {
    let s = include_str!("data/simple_feed.json");
    let feed = FeedSpec::from_json(s).unwrap();
    let channel = Channel::from_feed(&feed).unwrap();
    let v = serde_json::to_value(channel.head()).unwrap();
    assert_eq!(v[0]["kind"], "leaf");
    assert_eq!(v[0]["tag"], "title");
    assert_eq!(v[4]["kind"], "block");
    assert_eq!(v[4]["children"][0]["text"], "https://example.org/logo.png");
}
