use crate::registry::QueryRegistry;
use mediamock_domain::{ChangeListener, MediaQueryEvent};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tracing::trace;

/// The only event kind the modern registration protocol recognizes.
pub const CHANGE_EVENT: &str = "change";

/// Handle for a single media query, as handed out by the installed facade.
///
/// A thin view over the shared registry: `media` and `matches` are fixed at
/// creation (`matches` is a snapshot against the active query, not live),
/// and both registration protocols delegate to the same registry bucket.
/// Every handle created for the same query string acts on that one bucket.
pub struct MediaQueryList {
    media: Arc<str>,
    matches: bool,
    onchange: RefCell<Option<ChangeListener>>,
    registry: Rc<RefCell<QueryRegistry>>,
}

impl MediaQueryList {
    /// Whether this handle's query was the active one when the handle was
    /// created. One-time snapshot.
    pub fn matches(&self) -> bool {
        self.matches
    }

    /// The bound query string, verbatim.
    pub fn media(&self) -> &str {
        &self.media
    }

    /// Compatibility slot only: the mock never invokes `onchange`.
    pub fn set_onchange(&self, listener: Option<ChangeListener>) {
        *self.onchange.borrow_mut() = listener;
    }

    pub fn onchange(&self) -> Option<ChangeListener> {
        self.onchange.borrow().clone()
    }

    /// Legacy registration protocol.
    pub fn add_listener(&self, listener: ChangeListener) {
        self.registry.borrow_mut().add_listener(&self.media, listener);
    }

    /// Legacy removal; safe to call for listeners that were never added.
    pub fn remove_listener(&self, listener: &ChangeListener) {
        self.registry.borrow_mut().remove_listener(&self.media, listener);
    }

    /// Modern registration protocol. Only the `"change"` kind reaches the
    /// registry; any other kind is a silent no-op.
    pub fn add_event_listener(&self, kind: &str, listener: ChangeListener) {
        if kind != CHANGE_EVENT {
            trace!("Ignoring add for event kind {:?} on: {}", kind, self.media);
            return;
        }
        self.registry.borrow_mut().add_listener(&self.media, listener);
    }

    /// Modern removal, filtered to the `"change"` kind like
    /// [`MediaQueryList::add_event_listener`].
    pub fn remove_event_listener(&self, kind: &str, listener: &ChangeListener) {
        if kind != CHANGE_EVENT {
            trace!("Ignoring remove for event kind {:?} on: {}", kind, self.media);
            return;
        }
        self.registry.borrow_mut().remove_listener(&self.media, listener);
    }

    /// API-shape completeness only: no registry interaction and no replay
    /// of past activations. Returns `true` (nothing here is cancelable).
    pub fn dispatch_event(&self, _event: &MediaQueryEvent) -> bool {
        true
    }
}

impl fmt::Debug for MediaQueryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaQueryList")
            .field("media", &self.media)
            .field("matches", &self.matches)
            .finish()
    }
}

/// Creates [`MediaQueryList`] handles bound to the shared registry.
///
/// This is the object installed as the host global's media-query entry
/// point; application code reaches it through the host, never directly.
#[derive(Clone)]
pub struct FacadeFactory {
    registry: Rc<RefCell<QueryRegistry>>,
}

impl FacadeFactory {
    pub fn new(registry: Rc<RefCell<QueryRegistry>>) -> Self {
        Self { registry }
    }

    /// Builds a handle for `query`, snapshotting `matches` against the
    /// registry's active query at this moment.
    pub fn create(&self, query: &str) -> MediaQueryList {
        let matches = self.registry.borrow().is_active(query);
        MediaQueryList {
            media: Arc::from(query),
            matches,
            onchange: RefCell::new(None),
            registry: Rc::clone(&self.registry),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
