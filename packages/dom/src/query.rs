//! Tree queries over [`Element`] descendants.
//!
//! All queries visit descendants in document order and never match the element
//! they are called on. Predicates are plain closures; the helpers below cover
//! the selectors the decorators need (`picture, img`, `p a`, `[data-aue-prop=..]`).

use crate::vdom::{Element, VNode};

/// Matches elements with the given tag
pub fn tag<'a>(name: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el| el.is(name)
}

/// Matches elements whose tag is any of `names`
pub fn tags<'a>(names: &'a [&'a str]) -> impl Fn(&Element) -> bool + 'a {
    move |el| names.iter().any(|name| el.is(name))
}

pub fn heading(el: &Element) -> bool {
    el.is_heading()
}

/// Matches elements carrying the given class
pub fn class<'a>(name: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el| el.has_class(name)
}

/// Matches elements whose attribute equals `value`
pub fn attr_eq<'a>(name: &'a str, value: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el| el.attr(name) == Some(value)
}

impl Element {
    /// First matching descendant
    pub fn find<P: Fn(&Element) -> bool>(&self, pred: P) -> Option<&Element> {
        find_in(&self.children, &pred)
    }

    pub fn find_mut<P: Fn(&Element) -> bool>(&mut self, pred: P) -> Option<&mut Element> {
        find_in_mut(&mut self.children, &pred)
    }

    /// All matching descendants, including matches nested in other matches
    pub fn find_all<P: Fn(&Element) -> bool>(&self, pred: P) -> Vec<&Element> {
        let mut found = Vec::new();
        find_all_in(&self.children, &pred, &mut found);
        found
    }

    pub fn contains<P: Fn(&Element) -> bool>(&self, pred: P) -> bool {
        self.find(pred).is_some()
    }

    /// Detach the first matching descendant and hand over ownership
    pub fn take_first<P: Fn(&Element) -> bool>(&mut self, pred: P) -> Option<Element> {
        take_first_in(&mut self.children, &pred)
    }

    /// Detach every matching descendant in document order.
    ///
    /// Matches nested inside an earlier match travel with their ancestor.
    pub fn take_all<P: Fn(&Element) -> bool>(&mut self, pred: P) -> Vec<Element> {
        let mut taken = Vec::new();
        take_all_in(&mut self.children, &pred, &mut taken);
        taken
    }

    /// Remove matching descendants, returning how many were dropped
    pub fn remove_where<P: Fn(&Element) -> bool>(&mut self, pred: P) -> usize {
        remove_in(&mut self.children, &pred)
    }

    /// Apply `f` to every matching descendant
    pub fn for_each_match<P, F>(&mut self, pred: P, mut f: F)
    where
        P: Fn(&Element) -> bool,
        F: FnMut(&mut Element),
    {
        for_each_in(&mut self.children, &pred, &mut f);
    }

    /// Replace the first matching descendant with `replacement`, returning the original
    pub fn replace_first<P: Fn(&Element) -> bool>(
        &mut self,
        pred: P,
        replacement: VNode,
    ) -> Result<Element, VNode> {
        replace_in(&mut self.children, &pred, replacement)
    }
}

fn find_in<'a, P: Fn(&Element) -> bool>(nodes: &'a [VNode], pred: &P) -> Option<&'a Element> {
    for node in nodes {
        if let VNode::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_in(&el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_mut<'a, P: Fn(&Element) -> bool>(
    nodes: &'a mut [VNode],
    pred: &P,
) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let VNode::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_in_mut(&mut el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_all_in<'a, P: Fn(&Element) -> bool>(
    nodes: &'a [VNode],
    pred: &P,
    found: &mut Vec<&'a Element>,
) {
    for node in nodes {
        if let VNode::Element(el) = node {
            if pred(el) {
                found.push(el);
            }
            find_all_in(&el.children, pred, found);
        }
    }
}

fn matches_at<P: Fn(&Element) -> bool>(nodes: &[VNode], index: usize, pred: &P) -> bool {
    match &nodes[index] {
        VNode::Element(el) => pred(el),
        _ => false,
    }
}

fn take_first_in<P: Fn(&Element) -> bool>(nodes: &mut Vec<VNode>, pred: &P) -> Option<Element> {
    let mut index = 0;
    while index < nodes.len() {
        if matches_at(nodes, index, pred) {
            return nodes.remove(index).into_element();
        }
        if let VNode::Element(el) = &mut nodes[index] {
            if let Some(found) = take_first_in(&mut el.children, pred) {
                return Some(found);
            }
        }
        index += 1;
    }
    None
}

fn take_all_in<P: Fn(&Element) -> bool>(nodes: &mut Vec<VNode>, pred: &P, taken: &mut Vec<Element>) {
    let mut index = 0;
    while index < nodes.len() {
        if matches_at(nodes, index, pred) {
            if let Some(el) = nodes.remove(index).into_element() {
                taken.push(el);
            }
            continue;
        }
        if let VNode::Element(el) = &mut nodes[index] {
            take_all_in(&mut el.children, pred, taken);
        }
        index += 1;
    }
}

fn remove_in<P: Fn(&Element) -> bool>(nodes: &mut Vec<VNode>, pred: &P) -> usize {
    let before = nodes.len();
    nodes.retain(|node| !matches!(node, VNode::Element(el) if pred(el)));
    let mut removed = before - nodes.len();
    for node in nodes.iter_mut() {
        if let VNode::Element(el) = node {
            removed += remove_in(&mut el.children, pred);
        }
    }
    removed
}

fn for_each_in<P, F>(nodes: &mut [VNode], pred: &P, f: &mut F)
where
    P: Fn(&Element) -> bool,
    F: FnMut(&mut Element),
{
    for node in nodes.iter_mut() {
        if let VNode::Element(el) = node {
            if pred(el) {
                f(el);
            }
            for_each_in(&mut el.children, pred, f);
        }
    }
}

fn replace_in<P: Fn(&Element) -> bool>(
    nodes: &mut [VNode],
    pred: &P,
    replacement: VNode,
) -> Result<Element, VNode> {
    let mut replacement = replacement;
    for index in 0..nodes.len() {
        if matches_at(nodes, index, pred) {
            let original = std::mem::replace(&mut nodes[index], replacement);
            return original.into_element().ok_or_else(|| VNode::text(""));
        }
        if let VNode::Element(el) = &mut nodes[index] {
            match replace_in(&mut el.children, pred, replacement) {
                Ok(original) => return Ok(original),
                Err(unused) => replacement = unused,
            }
        }
    }
    Err(replacement)
}
