//! Markup tree: the render target for widgets and pages.
//!
//! A minimal element/text tree with attributes, classes, and inline style
//! declarations, serialized to an HTML string with escaping. Widgets build
//! these; how the host mounts the resulting markup is its business.

use std::fmt;

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

/// One markup node: an element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(Element),
    Text(String),
}

impl Markup {
    /// A text node. Escaped on output.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Serialize to an HTML string.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&escape(text)),
        }
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// An element node with attributes, classes, inline styles, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    children: Vec<Markup>,
}

/// Tags serialized without a closing tag or children.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "source"];

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (chainable).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a class (chainable). Duplicates are not added.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add a class only when `condition` holds (chainable).
    pub fn class_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Add one inline style declaration (chainable).
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Add many inline style declarations (chainable).
    pub fn styles(mut self, declarations: impl IntoIterator<Item = (String, String)>) -> Self {
        self.styles.extend(declarations);
        self
    }

    /// Append a child node (chainable).
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes (chainable).
    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child (chainable).
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Markup::text(content))
    }

    /// The element's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Element {
    /// Attribute order is class, style, then declared attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape_attr(&self.classes.join(" ")))?;
        }
        if !self.styles.is_empty() {
            let css: Vec<String> = self
                .styles
                .iter()
                .map(|(property, value)| format!("{property}:{value}"))
                .collect();
            write!(f, " style=\"{}\"", escape_attr(&css.join(";")))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return write!(f, ">");
        }
        write!(f, ">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape an attribute value (quotes included).
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_node_escapes() {
        assert_eq!(
            Markup::text("a < b & c > d").to_html(),
            "a &lt; b &amp; c &gt; d"
        );
    }

    #[test]
    fn empty_element() {
        assert_eq!(Element::new("div").to_string(), "<div></div>");
    }

    #[test]
    fn element_with_text_child() {
        let el = Element::new("p").text("Hello");
        assert_eq!(el.to_string(), "<p>Hello</p>");
    }

    #[test]
    fn classes_join_and_dedupe() {
        let el = Element::new("div").class("a").class("b").class("a");
        assert_eq!(el.to_string(), r#"<div class="a b"></div>"#);
    }

    #[test]
    fn class_if_respects_condition() {
        let el = Element::new("div").class("base").class_if(false, "off").class_if(true, "on");
        assert_eq!(el.to_string(), r#"<div class="base on"></div>"#);
    }

    #[test]
    fn styles_render_in_order() {
        let el = Element::new("div")
            .style("color", "#333")
            .style("padding", "8px");
        assert_eq!(el.to_string(), r#"<div style="color:#333;padding:8px"></div>"#);
    }

    #[test]
    fn attribute_order_class_style_attrs() {
        let el = Element::new("a")
            .attr("href", "/x")
            .class("link")
            .style("color", "red");
        assert_eq!(
            el.to_string(),
            r#"<a class="link" style="color:red" href="/x"></a>"#
        );
    }

    #[test]
    fn attr_values_escape_quotes() {
        let el = Element::new("img").attr("alt", r#"say "hi""#);
        assert_eq!(el.to_string(), r#"<img alt="say &quot;hi&quot;">"#);
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "/pic.png");
        assert_eq!(el.to_string(), r#"<img src="/pic.png">"#);
        assert_eq!(Element::new("br").to_string(), "<br>");
    }

    #[test]
    fn nested_elements() {
        let el = Element::new("section")
            .class("hero")
            .child(Element::new("h1").text("Title"))
            .child(Element::new("p").text("Body"));
        assert_eq!(
            el.to_string(),
            r#"<section class="hero"><h1>Title</h1><p>Body</p></section>"#
        );
    }

    #[test]
    fn markup_from_element() {
        let markup: Markup = Element::new("span").text("x").into();
        assert_eq!(markup.to_html(), "<span>x</span>");
    }
}
