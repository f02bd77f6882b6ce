//! HTML fragment parsing on top of `tl`.

use crate::error::{DomError, DomResult};
use crate::vdom::{Element, VNode};

/// Parse an HTML fragment into owned nodes.
///
/// Comments and declarations are dropped. Whitespace-only text that spans a line
/// break is indentation and is dropped too; single spaces between inline elements
/// are kept.
pub fn parse_fragment(html: &str) -> DomResult<Vec<VNode>> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| DomError::Parse(format!("{:?}", e)))?;

    let parser = dom.parser();
    Ok(dom
        .children()
        .iter()
        .filter_map(|handle| convert(*handle, parser))
        .collect())
}

/// Parse a fragment and return its first element
pub fn parse_element(html: &str) -> DomResult<Element> {
    parse_fragment(html)?
        .into_iter()
        .find_map(VNode::into_element)
        .ok_or(DomError::NoElement)
}

fn convert(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<VNode> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();
            if tag_name.starts_with('!') {
                return None;
            }

            let mut element = Element::new(tag_name);
            for (key, value) in tag.attributes().iter() {
                let key_str: &str = key.as_ref();
                let value_str = value.map(|v| decode_entities(&v)).unwrap_or_default();
                element.set_attr(key_str.to_lowercase(), value_str);
            }

            for child_handle in tag.children().top().iter() {
                if let Some(child) = convert(*child_handle, parser) {
                    element.children.push(child);
                }
            }

            Some(VNode::Element(element))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            if text.trim().is_empty() && text.contains('\n') {
                None
            } else {
                Some(VNode::text(decode_entities(&text)))
            }
        }
        tl::Node::Comment(_) => None,
    }
}

/// Decode HTML character references
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_reference(&rest[1..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix('x').or_else(|| numeric.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
