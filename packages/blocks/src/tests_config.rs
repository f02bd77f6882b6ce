use crate::{read_block_config, to_class_name, ConfigValue};
use storefront_dom::parse_element;

#[test]
fn test_read_block_config() {
    let root = parse_element(
        r#"<div class="mini-cart"><div><div>Start Shopping URL</div><div><a href="/shop">Shop</a></div></div><div><div>Cart URL</div><div><p>/cart</p></div></div><div><div>Images</div><div><img src="a.png" /><img src="b.png" /></div></div><div><div>Plain</div><div>value</div></div><div><div>only one cell</div></div></div>"#,
    )
    .expect("Failed to parse");

    let config = read_block_config(&root);

    assert_eq!(config.len(), 4);
    assert_eq!(config.get_str("start-shopping-url"), Some("/shop"));
    assert_eq!(config.get_str("cart-url"), Some("/cart"));
    assert_eq!(
        config.get("images"),
        Some(&ConfigValue::List(vec!["a.png".to_string(), "b.png".to_string()]))
    );
    assert_eq!(config.get_str("plain"), Some("value"));
    assert_eq!(config.get_or("checkout-url", "/checkout"), "/checkout");

    let keys: Vec<&str> = config.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["start-shopping-url", "cart-url", "images", "plain"]);
}

#[test]
fn test_later_rows_overwrite() {
    let root = parse_element(
        r#"<div><div><div>Key</div><div>first</div></div><div><div>key</div><div>second</div></div></div>"#,
    )
    .expect("Failed to parse");

    let config = read_block_config(&root);
    assert_eq!(config.len(), 1);
    assert_eq!(config.get_str("key"), Some("second"));
}

#[test]
fn test_to_class_name() {
    assert_eq!(to_class_name("  Checkout URL! "), "checkout-url");
    assert_eq!(to_class_name("Start__Shopping--Url"), "start-shopping-url");
    assert_eq!(to_class_name("---"), "");
}

#[test]
fn test_config_serializes_untagged() {
    let root = parse_element(r#"<div><div><div>Cart URL</div><div>/cart</div></div></div>"#).expect("Failed to parse");
    let json = serde_json::to_value(read_block_config(&root)).expect("Failed to serialize");
    assert_eq!(json["entries"][0][1], "/cart");
}
