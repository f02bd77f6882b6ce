//! Key-value configuration authored as two-cell rows.

use serde::Serialize;
use storefront_dom::query::tag;
use storefront_dom::Element;

/// A config value: one string, or a list when the cell holds several
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Single(String),
    List(Vec<String>),
}

impl ConfigValue {
    fn from_values(mut values: Vec<String>) -> Self {
        if values.len() == 1 {
            ConfigValue::Single(values.remove(0))
        } else {
            ConfigValue::List(values)
        }
    }

    /// The value, or the first entry of a list
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Single(value) => Some(value),
            ConfigValue::List(values) => values.first().map(String::as_str),
        }
    }
}

/// Ordered block configuration. Later rows overwrite earlier ones with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl BlockConfig {
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// String value or `default` when the key is absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: ConfigValue) {
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Read the configuration rows of a block.
///
/// The key is the first cell's text as a class name. The value is taken from
/// the second cell: link targets, else image sources, else paragraph texts,
/// else the cell text.
pub fn read_block_config(root: &Element) -> BlockConfig {
    let mut config = BlockConfig::default();

    for row in root.element_children().filter(|row| row.is("div")) {
        let cells: Vec<&Element> = row.element_children().collect();
        let (Some(key_cell), Some(value_cell)) = (cells.first(), cells.get(1)) else {
            continue;
        };

        let key = to_class_name(&key_cell.text_content());
        config.insert(key, cell_value(value_cell));
    }

    config
}

fn cell_value(cell: &Element) -> ConfigValue {
    let links = attribute_values(cell, "a", "href");
    if !links.is_empty() {
        return ConfigValue::from_values(links);
    }

    let images = attribute_values(cell, "img", "src");
    if !images.is_empty() {
        return ConfigValue::from_values(images);
    }

    let paragraphs: Vec<String> = cell
        .find_all(tag("p"))
        .into_iter()
        .map(Element::text_content)
        .collect();
    if !paragraphs.is_empty() {
        return ConfigValue::from_values(paragraphs);
    }

    ConfigValue::Single(cell.text_content())
}

fn attribute_values(cell: &Element, tag_name: &str, attribute: &str) -> Vec<String> {
    cell.find_all(tag(tag_name))
        .into_iter()
        .map(|el| el.attr(attribute).unwrap_or_default().to_string())
        .collect()
}

/// Lowercase, runs of non-alphanumerics collapsed to `-`, no leading or trailing dash
pub fn to_class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}
