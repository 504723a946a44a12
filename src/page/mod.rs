//! Page host — where the rendered table ends up.
//!
//! DESIGN
//! ======
//! The renderer never touches a concrete document. It asks a `PageHost` for
//! the container by id and hands it an owned [`Element`]. `MemoryPage` backs
//! the CLI and the tests; `BrowserPage` (feature `browser`) backs the live
//! page through `web-sys`.

pub mod memory;

#[cfg(feature = "browser")]
pub mod browser;

use crate::dom::Element;
use crate::error::ErrorCode;

pub use memory::MemoryPage;

#[cfg(feature = "browser")]
pub use browser::BrowserPage;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while mutating a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The handle does not refer to a node of this page.
    #[error("unknown node handle: {0}")]
    UnknownNode(usize),

    /// No document is available in this environment.
    #[error("no document available")]
    NoDocument,

    /// The host DOM rejected an operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl ErrorCode for PageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "E_UNKNOWN_NODE",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::Dom(_) => "E_DOM",
        }
    }
}

// =============================================================================
// PAGE HOST TRAIT
// =============================================================================

/// Capability to locate and mutate elements of a page. Enables mocking in tests.
pub trait PageHost {
    /// Reference to an element owned by the host.
    type Handle;

    /// Look up an element by its `id` attribute.
    fn find_element(&self, id: &str) -> Option<Self::Handle>;

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns a [`PageError`] if `parent` is not part of this page or the
    /// host refuses the mutation.
    fn append_child(&mut self, parent: &Self::Handle, child: Element) -> Result<(), PageError>;
}
