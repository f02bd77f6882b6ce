use crate::vdom::{Element, VNode};

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Default::default()
        }
    }
}

struct Context<'a> {
    options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a single node to HTML
pub fn render(node: &VNode, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    render_node(node, &mut ctx, false);
    ctx.get_output()
}

/// Render an element to HTML
pub fn render_element(element: &Element, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    render_element_into(element, &mut ctx, false);
    ctx.get_output()
}

/// Render a list of sibling nodes to HTML
pub fn render_nodes(nodes: &[VNode], options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    let block = ctx.options.pretty && has_element_children(nodes);
    for node in nodes {
        render_node(node, &mut ctx, block);
    }
    ctx.get_output()
}

fn render_node(node: &VNode, ctx: &mut Context<'_>, block: bool) {
    match node {
        VNode::Element(element) => render_element_into(element, ctx, block),
        VNode::Text { content } => {
            if block {
                if content.trim().is_empty() {
                    return;
                }
                ctx.add_indent();
                ctx.add(&escape_html(content.trim()));
                ctx.newline();
            } else {
                ctx.add(&escape_html(content));
            }
        }
        VNode::Comment { content } => {
            if block {
                ctx.add_indent();
            }
            ctx.add(&format!("<!--{}-->", content));
            if block {
                ctx.newline();
            }
        }
    }
}

fn render_element_into(element: &Element, ctx: &mut Context<'_>, block: bool) {
    if block {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", element.tag));

    for (name, value) in element.attributes.iter() {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    // Self-closing tags
    if element.children.is_empty() && is_self_closing(&element.tag) {
        ctx.add(" />");
        if block {
            ctx.newline();
        }
        return;
    }

    ctx.add(">");

    if is_raw_text(&element.tag) {
        for child in &element.children {
            if let VNode::Text { content } = child {
                ctx.add(content);
            }
        }
    } else {
        let nested = ctx.options.pretty && has_element_children(&element.children);
        if nested {
            ctx.newline();
            ctx.indent();
        }
        for child in &element.children {
            render_node(child, ctx, nested);
        }
        if nested {
            ctx.dedent();
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", element.tag));
    if block {
        ctx.newline();
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_raw_text(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

fn has_element_children(children: &[VNode]) -> bool {
    children.iter().any(VNode::is_element)
}
