//! Authoring metadata and field tables.
//!
//! The editor runtime maps rendered markup back to editable fields through
//! `data-aue-*` attributes. Decorators regenerate those attributes on the
//! wrappers they build, and read authored fields by their metadata name,
//! falling back to child position only for legacy content.

use storefront_dom::query::tag;
use storefront_dom::Element;
use tracing::debug;

pub const AUE_PROP: &str = "data-aue-prop";
pub const AUE_TYPE: &str = "data-aue-type";
pub const AUE_LABEL: &str = "data-aue-label";
pub const AUE_FILTER: &str = "data-aue-filter";

/// Editor field type carried in `data-aue-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    RichText,
    Container,
    Media,
    Select,
    Reference,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::RichText => "richtext",
            FieldKind::Container => "container",
            FieldKind::Media => "media",
            FieldKind::Select => "select",
            FieldKind::Reference => "reference",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(FieldKind::Text),
            "richtext" => Some(FieldKind::RichText),
            "container" => Some(FieldKind::Container),
            "media" => Some(FieldKind::Media),
            "select" => Some(FieldKind::Select),
            "reference" => Some(FieldKind::Reference),
            _ => None,
        }
    }
}

/// Authoring metadata for one editable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringField {
    pub prop: String,
    pub kind: FieldKind,
    pub label: String,
    pub filter: Option<String>,
}

impl AuthoringField {
    pub fn new(prop: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            kind,
            label: label.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Write the metadata attributes onto `element`
    pub fn apply(&self, element: &mut Element) {
        element.set_attr(AUE_PROP, self.prop.as_str());
        element.set_attr(AUE_TYPE, self.kind.as_str());
        element.set_attr(AUE_LABEL, self.label.as_str());
        if let Some(filter) = &self.filter {
            element.set_attr(AUE_FILTER, filter.as_str());
        }
    }

    /// Read metadata back from an element. Requires a prop and a known type.
    pub fn read(element: &Element) -> Option<Self> {
        Some(Self {
            prop: element.attr(AUE_PROP)?.to_string(),
            kind: FieldKind::parse(element.attr(AUE_TYPE)?)?,
            label: element.attr(AUE_LABEL).unwrap_or_default().to_string(),
            filter: element.attr(AUE_FILTER).map(str::to_string),
        })
    }
}

/// Hidden `div` carrying a resolved value back to the editor
pub fn hidden_field(class: Option<&str>, value: &str, field: &AuthoringField) -> Element {
    let mut element = Element::new("div");
    if let Some(class) = class {
        element.add_class(class);
    }
    element.append(storefront_dom::VNode::text(value));
    element.hide();
    field.apply(&mut element);
    element
}

/// Expected content shape of an authored field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    RichText,
    Text,
    Link,
    Boolean,
    Media,
    Select,
}

impl FieldShape {
    fn accepts(&self, element: &Element) -> bool {
        match self {
            FieldShape::Link => element.contains(tag("a")),
            FieldShape::Media => element.contains(|el| el.is("img") || el.is("picture")),
            FieldShape::Boolean => {
                let text = field_text(element);
                text.is_empty() || text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
            }
            FieldShape::RichText | FieldShape::Text | FieldShape::Select => true,
        }
    }
}

/// One row of a decorator's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn new(name: &'static str, shape: FieldShape) -> Self {
        Self { name, shape }
    }
}

/// Which child index fills which field of a table
#[derive(Debug, Clone)]
pub struct FieldAssignment {
    names: Vec<&'static str>,
    slots: Vec<Option<usize>>,
    by_name: bool,
}

impl FieldAssignment {
    pub fn has(&self, name: &str) -> bool {
        self.names
            .iter()
            .position(|n| *n == name)
            .is_some_and(|i| self.slots[i].is_some())
    }

    pub fn resolved_by_name(&self) -> bool {
        self.by_name
    }
}

/// The metadata name a child carries, on itself or on a descendant
fn carried_name<'a>(child: &'a Element, table: &[FieldSpec]) -> Option<&'a str> {
    let known = |prop: &str| table.iter().any(|spec| spec.name == prop);
    match child.attr(AUE_PROP) {
        Some(prop) if known(prop) => Some(prop),
        _ => child
            .find(|el| el.attr(AUE_PROP).is_some_and(known))
            .and_then(|el| el.attr(AUE_PROP)),
    }
}

/// True if any child carries the metadata name of a table field
pub fn has_named_fields<'a>(children: impl IntoIterator<Item = &'a Element>, table: &[FieldSpec]) -> bool {
    children
        .into_iter()
        .any(|child| carried_name(child, table).is_some())
}

/// Assign children to table fields: by metadata name first, then by position
/// for the fields still empty.
pub fn assign_fields<'a>(
    children: impl IntoIterator<Item = &'a Element>,
    table: &[FieldSpec],
) -> FieldAssignment {
    let children: Vec<&Element> = children.into_iter().collect();
    let mut slots: Vec<Option<usize>> = vec![None; table.len()];
    let mut unnamed = Vec::new();

    for (index, child) in children.iter().enumerate() {
        let field = carried_name(child, table)
            .and_then(|name| table.iter().position(|spec| spec.name == name));
        match field {
            Some(field) if slots[field].is_none() => slots[field] = Some(index),
            _ => unnamed.push(index),
        }
    }

    let by_name = slots.iter().any(Option::is_some);
    let mut leftovers = unnamed.into_iter();
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        match leftovers.next() {
            Some(index) => *slot = Some(index),
            None => break,
        }
    }

    for (spec, slot) in table.iter().zip(&slots) {
        if let Some(index) = slot {
            if !spec.shape.accepts(children[*index]) {
                debug!(field = spec.name, shape = ?spec.shape, "Authored field does not match expected shape");
            }
        }
    }

    FieldAssignment {
        names: table.iter().map(|spec| spec.name).collect(),
        slots,
        by_name,
    }
}

/// Authored fields keyed by table name, owned
#[derive(Debug, Default)]
pub struct ResolvedFields {
    fields: Vec<(&'static str, Element)>,
    by_name: bool,
}

impl ResolvedFields {
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, element)| element)
    }

    pub fn take(&mut self, name: &str) -> Option<Element> {
        let index = self.fields.iter().position(|(field, _)| *field == name)?;
        Some(self.fields.remove(index).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn resolved_by_name(&self) -> bool {
        self.by_name
    }
}

/// Move children into their table fields. Children matching no field are dropped.
pub fn resolve_fields(children: Vec<Element>, table: &[FieldSpec]) -> ResolvedFields {
    let assignment = assign_fields(children.iter(), table);
    let mut children: Vec<Option<Element>> = children.into_iter().map(Some).collect();

    let fields = table
        .iter()
        .zip(&assignment.slots)
        .filter_map(|(spec, slot)| {
            let element = children.get_mut((*slot)?)?.take()?;
            Some((spec.name, element))
        })
        .collect();

    ResolvedFields {
        fields,
        by_name: assignment.by_name,
    }
}

/// Trimmed text of a field: its first paragraph if it has one
pub fn field_text(element: &Element) -> String {
    element
        .find(tag("p"))
        .map(Element::text_content)
        .unwrap_or_else(|| element.text_content())
        .trim()
        .to_string()
}

/// Non-empty href of the first link in a field
pub fn field_link(element: &Element) -> Option<String> {
    element
        .find(tag("a"))
        .and_then(|a| a.attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Boolean-like text field: `true` in any case
pub fn field_bool(element: &Element) -> bool {
    field_text(element).eq_ignore_ascii_case("true")
}
