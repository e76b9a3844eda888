use crate::facade::{FacadeFactory, MediaQueryList};
use crate::ports::HostGlobal;
use std::cell::RefCell;

/// Minimal stand-in for the host global (`window`-like) object.
///
/// Holds at most one installed media-query entry point. Application code
/// under test calls [`MockWindow::match_media`]; test drivers never touch
/// this type directly beyond constructing and injecting it.
#[derive(Default)]
pub struct MockWindow {
    match_media: RefCell<Option<FacadeFactory>>,
}

impl MockWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry point application code calls. `None` models the entry
    /// point being absent from the host (nothing installed, or torn down).
    pub fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        self.match_media.borrow().as_ref().map(|f| f.create(query))
    }

    pub fn has_match_media(&self) -> bool {
        self.match_media.borrow().is_some()
    }
}

impl HostGlobal for MockWindow {
    fn install_match_media(&self, factory: FacadeFactory) {
        *self.match_media.borrow_mut() = Some(factory);
    }

    fn remove_match_media(&self) {
        *self.match_media.borrow_mut() = None;
    }
}
