//! Core traits for Roster

/// A rendering surface that accumulates list entries.
///
/// Implementers stand in for whatever actually displays the list: a
/// terminal, a widget tree, or an in-memory buffer in tests. Loaders only
/// ever append, so the trait has no removal or reordering API.
///
/// `append_item` takes `&self`: two loads may target the same container
/// at once, and implementations are expected to serialize appends
/// internally. Entries from concurrent loads may interleave.
pub trait ListContainer: Send + Sync {
    /// Identifier of the container (e.g. `"Users"`)
    fn id(&self) -> &str;

    /// Append one entry displaying `text` at the end of the list
    fn append_item(&self, text: &str);
}

impl<C: ListContainer + ?Sized> ListContainer for std::sync::Arc<C> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn append_item(&self, text: &str) {
        (**self).append_item(text);
    }
}

impl<C: ListContainer + ?Sized> ListContainer for &C {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn append_item(&self, text: &str) {
        (**self).append_item(text);
    }
}
