//! Ticket list model
//!
//! Shapes a collection of records into rows of rendered cells. All field
//! access goes through the column extractors, so the list itself never
//! looks inside a record.

use std::fmt;

/// Message shown when a finished fetch produced no tickets
pub const NO_TICKETS_MESSAGE: &str = "No tickets to list!";

/// A header label paired with the function that renders its cell
pub struct Column<T, R> {
    header: String,
    extractor: Box<dyn Fn(&T) -> R + Send + Sync>,
}

impl<T, R> Column<T, R> {
    pub fn new(header: impl Into<String>, extractor: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        Self {
            header: header.into(),
            extractor: Box::new(extractor),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn extract(&self, item: &T) -> R {
        (self.extractor)(item)
    }
}

impl<T, R> fmt::Debug for Column<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Headers of a column set, in display order
pub fn headers<T, R>(columns: &[Column<T, R>]) -> Vec<String> {
    columns.iter().map(|c| c.header.clone()).collect()
}

/// Apply every column to every item.
///
/// `rows[i][j]` is `columns[j]` applied to `items[i]`.
pub fn render_rows<T, R>(columns: &[Column<T, R>], items: &[T]) -> Vec<Vec<R>> {
    items
        .iter()
        .map(|item| columns.iter().map(|c| c.extract(item)).collect())
        .collect()
}

/// What the list area shows; the three cases are mutually exclusive
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent<R> {
    /// A fetch is in flight; only the spinner is shown
    Loading,
    /// The last fetch returned nothing
    Placeholder(&'static str),
    /// Rendered rows under their headers
    Rows {
        headers: Vec<String>,
        rows: Vec<Vec<R>>,
    },
}

impl<R> ListContent<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListContent::Loading)
    }
}

/// Pick the list content for the current loading flag and items
pub fn list_content<T, R>(columns: &[Column<T, R>], items: &[T], loading: bool) -> ListContent<R> {
    if loading {
        ListContent::Loading
    } else if items.is_empty() {
        ListContent::Placeholder(NO_TICKETS_MESSAGE)
    } else {
        ListContent::Rows {
            headers: headers(columns),
            rows: render_rows(columns, items),
        }
    }
}
