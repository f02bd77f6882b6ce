//! Block discovery over a whole page tree.

use crate::block::Block;
use crate::registry::{BlockRegistry, Decoration};
use serde::Serialize;
use storefront_dom::{Element, VNode};
use tracing::{debug, info};

/// Counts from one page decoration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub decorated: usize,
    pub already_decorated: usize,
    pub inert: usize,
}

impl PageReport {
    pub fn total(&self) -> usize {
        self.decorated + self.already_decorated + self.inert
    }

    fn record(&mut self, decoration: &Decoration) {
        match decoration {
            Decoration::Applied(_) => self.decorated += 1,
            Decoration::AlreadyDecorated(_) => self.already_decorated += 1,
            Decoration::Inert(_) => self.inert += 1,
        }
    }
}

/// Name of the block an element roots: the first class of a `div`
pub fn block_name(element: &Element) -> Option<&str> {
    if !element.is("div") {
        return None;
    }
    element.classes().next()
}

/// Decorate every registered block found under `root`.
///
/// Blocks are not searched for nested blocks; their content belongs to the
/// decorator.
pub fn decorate_page(root: &mut Element, registry: &BlockRegistry) -> PageReport {
    let mut report = PageReport::default();
    decorate_children(&mut root.children, registry, &mut report);
    info!(
        decorated = report.decorated,
        already_decorated = report.already_decorated,
        inert = report.inert,
        "Decorated page"
    );
    report
}

fn decorate_children(nodes: &mut [VNode], registry: &BlockRegistry, report: &mut PageReport) {
    for node in nodes.iter_mut() {
        let VNode::Element(element) = node else {
            continue;
        };

        let name = match block_name(element) {
            Some(name) if registry.contains(name) => name.to_string(),
            _ => {
                decorate_children(&mut element.children, registry, report);
                continue;
            }
        };

        let root = std::mem::replace(element, Element::new("div"));
        let block = Block::new(name, root);
        match registry.decorate(block) {
            Ok(decoration) => {
                report.record(&decoration);
                *element = decoration.into_block().into_element();
            }
            Err(err) => {
                // unreachable in practice: the name was checked above
                debug!(error = %err, "Block skipped");
            }
        }
    }
}

/// Child-index path from a page root to a block
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPath(Vec<usize>);

impl BlockPath {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Detach every block with the given name, leaving placeholders so the paths
/// stay valid until the blocks are put back with [`put_block`].
pub fn take_blocks_named(root: &mut Element, name: &str) -> Vec<(BlockPath, Block)> {
    let mut taken = Vec::new();
    let mut path = Vec::new();
    take_in(&mut root.children, name, &mut path, &mut taken);
    taken
}

fn take_in(
    nodes: &mut [VNode],
    name: &str,
    path: &mut Vec<usize>,
    taken: &mut Vec<(BlockPath, Block)>,
) {
    for (index, node) in nodes.iter_mut().enumerate() {
        let VNode::Element(element) = node else {
            continue;
        };
        path.push(index);
        if block_name(element) == Some(name) {
            let root = std::mem::replace(node, VNode::text(""));
            if let Some(root) = root.into_element() {
                taken.push((BlockPath(path.clone()), Block::new(name, root)));
            }
        } else {
            take_in(&mut element.children, name, path, taken);
        }
        path.pop();
    }
}

/// Put a block back at the path it was taken from. Returns false if the path
/// no longer exists.
pub fn put_block(root: &mut Element, path: &BlockPath, block: Block) -> bool {
    let Some((last, parents)) = path.0.split_last() else {
        return false;
    };

    let mut current = root;
    for index in parents {
        match current.children.get_mut(*index).and_then(VNode::as_element_mut) {
            Some(child) => current = child,
            None => return false,
        }
    }

    match current.children.get_mut(*last) {
        Some(slot) => {
            *slot = VNode::Element(block.into_element());
            true
        }
        None => false,
    }
}
