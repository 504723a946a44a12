//! Host-independent DOM fragment.
//!
//! DESIGN
//! ======
//! The renderer builds an owned `Element` tree and hands it to a `PageHost`,
//! which decides how to materialize it (arena nodes in memory, `web-sys`
//! nodes in the browser). Text is stored raw and escaped only when
//! serialized to HTML.

/// An owned element: tag, attributes, optional text, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    /// Equivalent of `textContent` when the element holds no children.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), text: None, children: Vec::new() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Concatenated text of this element and all descendants, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Serialize this element and its subtree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_open_tag(&mut out, &self.tag, &self.attributes);
        if is_void(&self.tag) {
            return out;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            out.push_str(&child.to_html());
        }
        write_close_tag(&mut out, &self.tag);
        out
    }
}

#[cfg(test)]
impl Element {
    /// Value of the named attribute, if set.
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children with the given tag.
    pub(crate) fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }
}

/// Elements serialized without content or a closing tag.
fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "img" | "input" | "link" | "meta")
}

fn write_open_tag(out: &mut String, tag: &str, attributes: &[(String, String)]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
    }
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Escape text for use in HTML content or a double-quoted attribute.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod tests;
