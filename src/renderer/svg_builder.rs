//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Elements are kept as a small tree so that glyphs needing a transform can
//! live in their own `<g>` without any state leaking to their neighbours.

use crate::model::{AffineTransform, Anchor};

// ═══════════════════════════════════════════════════════════════════════
// Drawing surface
// ═══════════════════════════════════════════════════════════════════════

/// Attributes of one `<text>` element.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font_size: f64,
    pub font_family: &'a str,
    pub font_weight: &'a str,
    pub fill: &'a str,
}

/// The primitives the document assembler draws with.
pub trait DrawingSurface {
    fn add_text(&mut self, content: &str, x: f64, y: f64, anchor: Anchor, style: &TextStyle<'_>);

    fn add_line(&mut self, start: (f64, f64), end: (f64, f64), stroke: &str, dash: Option<&str>);

    /// Open a transformed group and return it for drawing into.
    fn add_group(&mut self, transform: &AffineTransform) -> &mut dyn DrawingSurface;
}

struct SvgGroup {
    transform: String,
    children: SvgLayer,
}

enum SvgNode {
    Element(String),
    Group(Box<SvgGroup>),
}

/// A list of SVG nodes, either the document root or a group's content.
///
/// The most recently opened group stays in `open_group` so callers can keep
/// drawing into it; it is moved into `nodes` as soon as anything else is
/// added to this layer.
#[derive(Default)]
pub struct SvgLayer {
    nodes: Vec<SvgNode>,
    open_group: Option<Box<SvgGroup>>,
}

impl SvgLayer {
    fn push(&mut self, node: SvgNode) {
        self.close_group();
        self.nodes.push(node);
    }

    fn close_group(&mut self) {
        if let Some(group) = self.open_group.take() {
            self.nodes.push(SvgNode::Group(group));
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        for node in &self.nodes {
            match node {
                SvgNode::Element(el) => {
                    indent(out, depth);
                    out.push_str(el);
                    out.push('\n');
                }
                SvgNode::Group(group) => group.write(out, depth),
            }
        }
        if let Some(group) = &self.open_group {
            group.write(out, depth);
        }
    }

    fn len(&self) -> usize {
        let closed: usize = self
            .nodes
            .iter()
            .map(|n| match n {
                SvgNode::Element(_) => 1,
                SvgNode::Group(group) => group.len(),
            })
            .sum();
        closed + self.open_group.as_ref().map_or(0, |g| g.len())
    }
}

impl SvgGroup {
    fn write(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        out.push_str(&format!(r#"<g transform="{}">"#, self.transform));
        out.push('\n');
        self.children.write(out, depth + 1);
        indent(out, depth);
        out.push_str("</g>\n");
    }

    fn len(&self) -> usize {
        1 + self.children.len()
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

impl DrawingSurface for SvgLayer {
    fn add_text(&mut self, content: &str, x: f64, y: f64, anchor: Anchor, style: &TextStyle<'_>) {
        self.push(SvgNode::Element(format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-family="{}" font-weight="{}" fill="{}" text-anchor="{}" xml:space="preserve">{}</text>"#,
            x,
            y,
            style.font_size,
            escape(style.font_family),
            style.font_weight,
            escape(style.fill),
            anchor.as_svg(),
            escape(content)
        )));
    }

    fn add_line(&mut self, start: (f64, f64), end: (f64, f64), stroke: &str, dash: Option<&str>) {
        let dash_attr = dash
            .map(|d| format!(r#" stroke-dasharray="{}""#, escape(d)))
            .unwrap_or_default();
        self.push(SvgNode::Element(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"{}/>"#,
            start.0,
            start.1,
            end.0,
            end.1,
            escape(stroke),
            dash_attr
        )));
    }

    fn add_group(&mut self, transform: &AffineTransform) -> &mut dyn DrawingSurface {
        self.close_group();
        let group = self.open_group.insert(Box::new(SvgGroup {
            transform: transform.to_svg(),
            children: SvgLayer::default(),
        }));
        &mut group.children
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgBuilder {
    root: SvgLayer,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            root: SvgLayer::default(),
            width,
            height,
        }
    }

    /// Number of elements drawn so far, groups and their content included.
    pub fn element_count(&self) -> usize {
        self.root.len()
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        self.root.write(&mut svg, 1);
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawingSurface for SvgBuilder {
    fn add_text(&mut self, content: &str, x: f64, y: f64, anchor: Anchor, style: &TextStyle<'_>) {
        self.root.add_text(content, x, y, anchor, style);
    }

    fn add_line(&mut self, start: (f64, f64), end: (f64, f64), stroke: &str, dash: Option<&str>) {
        self.root.add_line(start, end, stroke, dash);
    }

    fn add_group(&mut self, transform: &AffineTransform) -> &mut dyn DrawingSurface {
        self.root.add_group(transform)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
