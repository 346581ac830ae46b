//! Document access for link and toggle synchronization
//!
//! Sync code only talks to a [`DocumentAdapter`]. A browser host wraps its
//! real document; [`MemoryDocument`] is a small element tree for tests and
//! headless use.

mod memory;
mod sync;

pub use memory::MemoryDocument;
pub use sync::{
    SyncReport, ToggleBinding, sync_document, toggle_label, update_internal_links,
    update_repo_links, update_toggle,
};

/// Opaque reference to an element owned by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub usize);

/// The element queries synchronization needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `a.<class>`
    AnchorWithClass(&'a str),
    /// `a[href="<href>"]`
    AnchorWithHref(&'a str),
    /// `<ancestor> a[href^="<prefix>"]`
    AnchorWithHrefPrefixIn { ancestor: &'a str, prefix: &'a str },
}

pub trait DocumentAdapter {
    fn find_by_id(&self, id: &str) -> Option<ElementHandle>;

    /// All matches in document order; empty when nothing matches
    fn find_by_selector(&self, selector: &Selector<'_>) -> Vec<ElementHandle>;

    /// First descendant carrying `class`, like `querySelector(".class")` on the element
    fn find_descendant_by_class(
        &self,
        element: ElementHandle,
        class: &str,
    ) -> Option<ElementHandle>;

    fn attribute(&self, element: ElementHandle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str);

    fn set_text(&mut self, element: ElementHandle, text: &str);
}
