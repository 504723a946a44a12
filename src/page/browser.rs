//! Live page backed by `web-sys`. Requires a browser environment.

use crate::dom::Element;

use super::{PageError, PageHost};

/// The window's current `Document`.
pub struct BrowserPage {
    document: web_sys::Document,
}

impl BrowserPage {
    /// Bind to `window.document`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoDocument`] outside a window context (e.g. a worker).
    pub fn from_window() -> Result<Self, PageError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PageError::NoDocument)?;
        Ok(Self { document })
    }

    fn materialize(&self, el: &Element) -> Result<web_sys::Element, PageError> {
        let node = self.document.create_element(&el.tag).map_err(dom_error)?;
        for (name, value) in &el.attributes {
            node.set_attribute(name, value).map_err(dom_error)?;
        }
        if let Some(text) = &el.text {
            node.set_text_content(Some(text));
        }
        for child in &el.children {
            let child = self.materialize(child)?;
            node.append_child(&child).map_err(dom_error)?;
        }
        Ok(node)
    }
}

impl PageHost for BrowserPage {
    type Handle = web_sys::Element;

    fn find_element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn append_child(&mut self, parent: &web_sys::Element, child: Element) -> Result<(), PageError> {
        let node = self.materialize(&child)?;
        parent.append_child(&node).map_err(dom_error)?;
        Ok(())
    }
}

fn dom_error(err: wasm_bindgen::JsValue) -> PageError {
    PageError::Dom(format!("{err:?}"))
}
