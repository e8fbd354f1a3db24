//! Minimal document tree: lookup by id, text and markup assignment, child
//! append, and HTML serialization. Text and attribute values are always
//! escaped on output; only `Node::Markup` is written verbatim.

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup, written as-is.
    Markup(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Replaces all children with a single text node.
    pub fn set_text_content(&mut self, text: &str) {
        self.children = vec![Node::Text(text.to_string())];
    }

    /// Replaces all children with raw markup. An empty string clears the element.
    pub fn set_inner_html(&mut self, markup: &str) {
        self.children.clear();
        if !markup.is_empty() {
            self.children.push(Node::Markup(markup.to_string()));
        }
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Markup(markup) => out.push_str(markup),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// A full HTML document rooted at `<html>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Empty `<html>` document with no containers.
    pub fn empty() -> Self {
        Self::new(Element::new("html"))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.root.find_by_id(id).is_some()
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.root.write_html(&mut out);
        out
    }
}

/// Read-side queries used to inspect rendered documents in tests.
#[cfg(test)]
impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Markup(_) => {}
            }
        }
    }

    /// All descendants (including self) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for el in self.child_elements() {
            el.collect_by_class(class, found);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

#[cfg(test)]
impl Document {
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            Element::new("html").with_child(
                Element::new("body")
                    .with_child(Element::new("p").with_id("about-text").with_text("old"))
                    .with_child(
                        Element::new("div")
                            .with_id("list")
                            .with_class("grid")
                            .with_class("wide"),
                    ),
            ),
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let doc = sample();
        assert!(doc.contains("about-text"));
        assert!(!doc.contains("missing"));
        assert_eq!(doc.get_element_by_id("about-text").unwrap().tag(), "p");
    }

    #[test]
    fn test_text_is_escaped_on_serialization() {
        let mut doc = sample();
        doc.get_element_by_id_mut("about-text")
            .unwrap()
            .set_text_content("<script>alert('x')</script> & more");
        let html = doc.to_html();
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let el = Element::new("a").with_attr("href", "https://x.dev/?a=1&b=\"2\"");
        assert_eq!(
            el.to_html(),
            "<a href=\"https://x.dev/?a=1&amp;b=&quot;2&quot;\"></a>"
        );
    }

    #[test]
    fn test_markup_is_written_verbatim_and_empty_markup_clears() {
        let mut doc = sample();
        let list = doc.get_element_by_id_mut("list").unwrap();
        list.append_child(Element::new("span").with_text("a"));
        list.set_inner_html("<em>raw</em>");
        assert_eq!(list.to_html(), "<div id=\"list\" class=\"grid wide\"><em>raw</em></div>");
        list.set_inner_html("");
        assert!(list.children().is_empty());
    }

    #[test]
    fn test_with_class_appends() {
        let el = Element::new("div").with_class("a").with_class("b");
        assert!(el.has_class("a"));
        assert!(el.has_class("b"));
        assert!(!el.has_class("c"));
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("meta").with_attr("charset", "utf-8");
        assert_eq!(el.to_html(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_find_by_class_in_document_order() {
        let root = Element::new("ul")
            .with_child(Element::new("li").with_class("item").with_text("1"))
            .with_child(Element::new("li").with_class("item").with_text("2"));
        let items = root.find_by_class("item");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text_content(), "2");
    }

    #[test]
    fn test_document_starts_with_doctype() {
        assert!(sample().to_html().starts_with("<!DOCTYPE html>\n<html>"));
    }
}
