//! Arena-based markup tree.
//!
//! `Document::parse` is a tolerant single-pass scanner, not a conforming
//! HTML parser: unknown constructs degrade to text, mismatched close tags
//! are skipped, and parsing never fails. Nodes live in a flat arena and are
//! addressed by `NodeId` indices, so rule checks read a stable immutable
//! tree and fix passes apply substitutions to a fresh parse before
//! serializing. `to_html` is deterministic: re-parsing serializer output
//! and serializing again is a fixed point, which is what keeps the fix
//! passes idempotent.

/// Stable reference to a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    Doctype,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Lowercased tag name; empty for non-elements.
    pub tag: String,
    /// Attributes in source order, names lowercased, values raw.
    pub attrs: Vec<(String, String)>,
    /// Raw content for text/comment/doctype nodes.
    pub text: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// Tags that never take children and serialize without a close tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Parse markup into a tree. Tolerant: pathological input degrades to
    /// text nodes rather than an error.
    pub fn parse(input: &str) -> Document {
        Parser::new(input).run()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// All element nodes in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(self.root, &mut out);
        out
    }

    /// Elements whose tag is in `tags`, in document order.
    pub fn elements_by_tag(&self, tags: &[&str]) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|id| tags.contains(&self.node(*id).tag.as_str()))
            .collect()
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let node = self.node(id);
        if node.kind == NodeKind::Element {
            out.push(id);
        }
        for child in &node.children {
            self.collect_elements(*child, out);
        }
    }

    /// Element descendants of `id` (excluding `id` itself), document order.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for child in &self.node(id).children {
            self.collect_elements(*child, &mut out);
        }
        out
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if node.kind == NodeKind::Text {
            out.push_str(&node.text);
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    pub fn has_ancestor_tag(&self, id: NodeId, tag: &str) -> bool {
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            if self.node(parent).tag == tag {
                return true;
            }
            current = self.node(parent).parent;
        }
        false
    }

    /// Set an attribute, replacing in place or appending.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let node = &mut self.nodes[id.0];
        if let Some(entry) = node.attrs.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            node.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn rename_tag(&mut self, id: NodeId, tag: &str) {
        self.nodes[id.0].tag = tag.to_string();
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.node(self.root).children {
            self.write_node(*child, &mut out);
        }
        out
    }

    /// Serialize a single subtree, e.g. for issue snippets.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serialize only the start tag of an element.
    pub fn start_tag_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_start_tag(id, &mut out);
        out
    }

    fn write_start_tag(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
        out.push('>');
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match node.kind {
            NodeKind::Document => {
                for child in &node.children {
                    self.write_node(*child, out);
                }
            }
            NodeKind::Element => {
                self.write_start_tag(id, out);
                if is_void(&node.tag) {
                    return;
                }
                for child in &node.children {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(&node.tag);
                out.push('>');
            }
            NodeKind::Text => out.push_str(&node.text),
            NodeKind::Comment => {
                out.push_str("<!--");
                out.push_str(&node.text);
                out.push_str("-->");
            }
            NodeKind::Doctype => {
                out.push_str("<!");
                out.push_str(&node.text);
                out.push('>');
            }
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    text_start: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let root = Node {
            kind: NodeKind::Document,
            tag: String::new(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        };
        Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            nodes: vec![root],
            stack: vec![NodeId(0)],
            text_start: 0,
        }
    }

    fn run(mut self) -> Document {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'<' && self.try_markup() {
                continue;
            }
            self.pos += 1;
        }
        self.flush_text(self.bytes.len());
        Document {
            nodes: self.nodes,
            root: NodeId(0),
        }
    }

    /// Attempt to consume a markup construct at `<`. Returns false when the
    /// angle bracket is just text.
    fn try_markup(&mut self) -> bool {
        let rest = &self.input[self.pos..];
        if rest.starts_with("<!--") {
            self.flush_text(self.pos);
            let content_start = self.pos + 4;
            let end = self.input[content_start..]
                .find("-->")
                .map(|i| content_start + i)
                .unwrap_or(self.bytes.len());
            self.push_leaf(NodeKind::Comment, &self.input[content_start..end]);
            self.pos = (end + 3).min(self.bytes.len());
            self.text_start = self.pos;
            true
        } else if rest.starts_with("<!") {
            self.flush_text(self.pos);
            let content_start = self.pos + 2;
            let end = self.input[content_start..]
                .find('>')
                .map(|i| content_start + i)
                .unwrap_or(self.bytes.len());
            self.push_leaf(NodeKind::Doctype, &self.input[content_start..end]);
            self.pos = (end + 1).min(self.bytes.len());
            self.text_start = self.pos;
            true
        } else if rest.starts_with("</") {
            self.flush_text(self.pos);
            self.close_tag();
            true
        } else if rest.len() > 1 && rest.as_bytes()[1].is_ascii_alphabetic() {
            self.flush_text(self.pos);
            self.open_tag();
            true
        } else {
            false
        }
    }

    fn flush_text(&mut self, end: usize) {
        if end > self.text_start {
            let raw = &self.input[self.text_start..end];
            self.push_leaf(NodeKind::Text, raw);
        }
        self.text_start = end;
    }

    fn push_leaf(&mut self, kind: NodeKind, text: &str) {
        let parent = *self.stack.last().unwrap_or(&NodeId(0));
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            tag: String::new(),
            attrs: Vec::new(),
            text: text.to_string(),
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.0].children.push(id);
    }

    fn close_tag(&mut self) {
        self.pos += 2;
        let name = self.read_name();
        // Skip to '>'
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'>' {
            self.pos += 1;
        }
        self.pos = (self.pos + 1).min(self.bytes.len());
        self.text_start = self.pos;
        if name.is_empty() {
            return;
        }
        // Close the nearest matching open element, implicitly closing
        // anything left open inside it. Unmatched close tags are skipped.
        if let Some(depth) = self
            .stack
            .iter()
            .rposition(|id| self.nodes[id.0].tag == name)
        {
            if depth > 0 {
                self.stack.truncate(depth);
            }
        }
    }

    fn open_tag(&mut self) {
        self.pos += 1;
        let name = self.read_name();
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.bytes.get(self.pos) {
                None => break,
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.bytes.get(self.pos) == Some(&b'>') {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => {
                    if let Some(attr) = self.read_attr() {
                        attrs.push(attr);
                    } else {
                        self.pos += 1;
                    }
                }
            }
        }
        self.text_start = self.pos;

        let parent = *self.stack.last().unwrap_or(&NodeId(0));
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Element,
            tag: name.clone(),
            attrs,
            text: String::new(),
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.0].children.push(id);

        if name == "script" || name == "style" {
            self.consume_raw_text(id, &name);
        } else if !is_void(&name) && !self_closing {
            self.stack.push(id);
        }
    }

    /// Script and style content is opaque: scan to the matching close tag
    /// without interpreting anything in between.
    fn consume_raw_text(&mut self, id: NodeId, tag: &str) {
        let close = format!("</{tag}");
        let needle = close.as_bytes();
        let end = self.bytes[self.pos..]
            .windows(needle.len())
            .position(|w| w.eq_ignore_ascii_case(needle))
            .map(|i| self.pos + i);
        let content_end = end.unwrap_or(self.bytes.len());
        if content_end > self.pos {
            let text_id = NodeId(self.nodes.len());
            self.nodes.push(Node {
                kind: NodeKind::Text,
                tag: String::new(),
                attrs: Vec::new(),
                text: self.input[self.pos..content_end].to_string(),
                children: Vec::new(),
                parent: Some(id),
            });
            self.nodes[id.0].children.push(text_id);
        }
        self.pos = content_end;
        if end.is_some() {
            // Consume the close tag itself
            while self.pos < self.bytes.len() && self.bytes[self.pos] != b'>' {
                self.pos += 1;
            }
            self.pos = (self.pos + 1).min(self.bytes.len());
        }
        self.text_start = self.pos;
    }

    fn read_name(&mut self) -> String {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'-' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_lowercase()
    }

    fn read_attr(&mut self) -> Option<(String, String)> {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_whitespace() || b == b'=' || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let name = self.input[start..self.pos].to_lowercase();
        self.skip_whitespace();
        if self.bytes.get(self.pos) != Some(&b'=') {
            return Some((name, String::new()));
        }
        self.pos += 1;
        self.skip_whitespace();
        let value = match self.bytes.get(self.pos) {
            Some(&q) if q == b'"' || q == b'\'' => {
                self.pos += 1;
                let vstart = self.pos;
                while self.pos < self.bytes.len() && self.bytes[self.pos] != q {
                    self.pos += 1;
                }
                let v = self.input[vstart..self.pos].to_string();
                self.pos = (self.pos + 1).min(self.bytes.len());
                v
            }
            _ => {
                let vstart = self.pos;
                while self.pos < self.bytes.len() {
                    let b = self.bytes[self.pos];
                    if b.is_ascii_whitespace() || b == b'>' {
                        break;
                    }
                    self.pos += 1;
                }
                self.input[vstart..self.pos].to_string()
            }
        };
        Some((name, value))
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements() {
        let doc = Document::parse("<div><p>hello</p></div>");
        let divs = doc.elements_by_tag(&["div"]);
        assert_eq!(divs.len(), 1);
        let ps = doc.elements_by_tag(&["p"]);
        assert_eq!(ps.len(), 1);
        assert_eq!(doc.text_content(ps[0]), "hello");
        assert!(doc.has_ancestor_tag(ps[0], "div"));
    }

    #[test]
    fn parses_attributes() {
        let doc = Document::parse(r#"<img SRC="x.jpg" alt='photo' disabled>"#);
        let img = doc.elements_by_tag(&["img"])[0];
        assert_eq!(doc.attr(img, "src"), Some("x.jpg"));
        assert_eq!(doc.attr(img, "alt"), Some("photo"));
        assert_eq!(doc.attr(img, "disabled"), Some(""));
        assert_eq!(doc.attr(img, "missing"), None);
    }

    #[test]
    fn void_elements_take_no_children() {
        let doc = Document::parse("<div><img src=a.png><p>after</p></div>");
        let img = doc.elements_by_tag(&["img"])[0];
        assert!(doc.node(img).children.is_empty());
        let p = doc.elements_by_tag(&["p"])[0];
        assert_eq!(doc.node(doc.node(p).parent.unwrap()).tag, "div");
    }

    #[test]
    fn self_closing_and_unmatched_close_tags() {
        let doc = Document::parse("<div/><span>x</span></p>");
        assert_eq!(doc.elements_by_tag(&["div"]).len(), 1);
        assert_eq!(doc.text_content(doc.elements_by_tag(&["span"])[0]), "x");
    }

    #[test]
    fn script_content_is_opaque() {
        let doc = Document::parse("<script>if (a < b) { x(); }</script><p>t</p>");
        assert_eq!(doc.elements_by_tag(&["p"]).len(), 1);
        let script = doc.elements_by_tag(&["script"])[0];
        assert!(doc.text_content(script).contains("a < b"));
    }

    #[test]
    fn serializes_deterministically() {
        let html = r#"<html lang="en"><body><img src="x.jpg" alt=""><p>hi</p></body></html>"#;
        let once = Document::parse(html).to_html();
        let twice = Document::parse(&once).to_html();
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_comments_and_doctype() {
        let html = "<!DOCTYPE html><!-- note --><p>x</p>";
        let out = Document::parse(html).to_html();
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("<!-- note -->"));
    }

    #[test]
    fn set_attr_and_rename() {
        let mut doc = Document::parse("<h3 class=\"t\">Title</h3>");
        let h = doc.elements_by_tag(&["h3"])[0];
        doc.set_attr(h, "id", "main-title");
        doc.rename_tag(h, "h2");
        let out = doc.to_html();
        assert_eq!(out, "<h2 class=\"t\" id=\"main-title\">Title</h2>");
    }

    #[test]
    fn degrades_on_garbage() {
        let doc = Document::parse("<<<>>> not << markup");
        assert!(doc.elements().is_empty());
        assert!(doc.to_html().contains("not"));
    }
}
