//! Table renderer — rows to a `<table>` appended to the page container.
//!
//! DESIGN
//! ======
//! The table is built completely before the page is touched. Lookup of the
//! container happens first, so a missing container leaves the page exactly
//! as it was. Rows go straight under `<table>` with no `thead`/`tbody`.

use crate::dom::Element;
use crate::error::ErrorCode;
use crate::page::{PageError, PageHost};
use crate::row::Row;

/// Header labels, in column order.
pub const HEADER_LABELS: [&str; 3] = ["From", "To", "Message"];

/// `id` of the element the table is appended to.
pub const CONTAINER_ID: &str = "content";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("container element #{id} not found")]
    MissingContainer { id: String },

    #[error(transparent)]
    Page(#[from] PageError),
}

impl ErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingContainer { .. } => "E_MISSING_CONTAINER",
            Self::Page(e) => e.error_code(),
        }
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Header row: one `<th>` per label.
#[must_use]
pub fn build_header() -> Element {
    let mut tr = Element::new("tr");
    for label in HEADER_LABELS {
        tr.append_child(Element::new("th").with_text(label));
    }
    tr
}

/// Body row: one `<td>` per cell.
#[must_use]
pub fn build_body_row(row: &Row) -> Element {
    let mut tr = Element::new("tr");
    for cell in row.cells() {
        tr.append_child(Element::new("td").with_text(cell.as_str()));
    }
    tr
}

/// Header row followed by one body row per input row.
#[must_use]
pub fn build_table(rows: &[Row]) -> Element {
    let mut table = Element::new("table");
    table.append_child(build_header());
    for row in rows {
        table.append_child(build_body_row(row));
    }
    table
}

// =============================================================================
// RENDER
// =============================================================================

/// Build the table and append it to the [`CONTAINER_ID`] element.
///
/// # Errors
///
/// Returns [`RenderError::MissingContainer`] if the page has no such element,
/// or [`RenderError::Page`] if the host rejects the append.
pub fn render_table<H: PageHost>(host: &mut H, rows: &[Row]) -> Result<(), RenderError> {
    let Some(container) = host.find_element(CONTAINER_ID) else {
        return Err(RenderError::MissingContainer { id: CONTAINER_ID.to_owned() });
    };
    host.append_child(&container, build_table(rows))?;
    tracing::debug!(rows = rows.len(), container = CONTAINER_ID, "table appended");
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
