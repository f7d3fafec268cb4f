//! Scoped builders for assembling a Document
//!
//! Each kind of container hands its closure a different scope type, and
//! the methods available on that type are the only things that can be done
//! at that point in the document. Only [`DocumentScope`] can declare the
//! document class or packages; lists are the only place items can be
//! added. Because a child scope mutably borrows its parent for the duration
//! of the closure, it can never outlive it.

mod scopes;

pub use scopes::*;

use tracing::debug;

use crate::language::{Document, DocumentError};

/// Build a Document. The closure receives the top-level scope; any error it
/// returns abandons the document being built.
pub fn document<F>(build: F) -> Result<Document, DocumentError>
where
    F: FnOnce(&mut DocumentScope<'_>) -> Result<(), DocumentError>,
{
    let mut document = Document::new();

    build(&mut DocumentScope::new(&mut document))?;

    debug!(
        "Built document in phase {:?} with {} top-level node{}",
        document.phase(),
        document
            .body()
            .children()
            .len(),
        if document
            .body()
            .children()
            .len()
            == 1
        {
            ""
        } else {
            "s"
        }
    );

    Ok(document)
}
