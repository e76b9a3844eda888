use crate::facade::FacadeFactory;
use crate::ports::HostGlobal;
use crate::registry::QueryRegistry;
use mediamock_domain::{ChangeListener, MediaMockError, MediaQueryEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// Control surface for the matchMedia test double.
///
/// One instance per test context: construction installs the facade on the
/// injected host, [`MatchMediaMock::teardown`] (or drop) removes it again.
/// Test drivers mutate state through `activate`/`clear` and assert through
/// the introspection methods; application code under test only ever sees
/// the host's entry point.
pub struct MatchMediaMock {
    registry: Rc<RefCell<QueryRegistry>>,
    host: Rc<dyn HostGlobal>,
}

impl MatchMediaMock {
    /// Builds a fresh registry and installs its facade on `host`.
    pub fn install(host: Rc<dyn HostGlobal>) -> Self {
        let registry = Rc::new(RefCell::new(QueryRegistry::new()));
        host.install_match_media(FacadeFactory::new(Rc::clone(&registry)));
        debug!("matchMedia mock installed");
        Self { registry, host }
    }

    /// Declares `query` as now matching and synchronously notifies its
    /// listeners in registration order, each with a synthetic event whose
    /// `matches` is true and whose `media` is `query`.
    ///
    /// Dispatch iterates a snapshot taken before the first invocation:
    /// listeners may add or remove registrations for the same query without
    /// skipping or duplicating in-flight invocations. Fails with
    /// [`MediaMockError::InvalidQuery`] before any state change when
    /// `query` is empty; with no registrations the marker still updates and
    /// nothing is dispatched.
    pub fn activate(&self, query: &str) -> Result<(), MediaMockError> {
        // Snapshot under the borrow, dispatch after releasing it, so
        // listeners can re-enter the registry.
        let snapshot = self.registry.borrow_mut().activate(query)?;
        if snapshot.is_empty() {
            return Ok(());
        }

        debug!(
            "Dispatching change to {} listener(s) for: {}",
            snapshot.len(),
            query
        );
        let event = MediaQueryEvent::now_matching(query);
        for listener in &snapshot {
            listener.call(&event);
        }
        Ok(())
    }

    /// Queries that currently have at least one registered listener, in
    /// first-registration order.
    pub fn list_queries(&self) -> Vec<Arc<str>> {
        self.registry.borrow().list_queries()
    }

    /// Defensive copy of the ordered listener sequence for `query`.
    pub fn list_listeners(&self, query: &str) -> Vec<ChangeListener> {
        self.registry.borrow().list_listeners(query)
    }

    /// Drops every registration and resets the active-query marker, so no
    /// `matches` state leaks into the next test case.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }

    /// [`MatchMediaMock::clear`] plus removal of the facade from the host
    /// global. Idempotent; also runs on drop, so a test that forgets the
    /// explicit call still releases the host.
    pub fn teardown(&self) {
        self.clear();
        self.host.remove_match_media();
        debug!("matchMedia mock torn down");
    }
}

impl Drop for MatchMediaMock {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
