use mediamock_domain::{ChangeListener, MediaMockError};
use std::sync::Arc;
use tracing::{debug, trace};

struct QueryBucket {
    query: Arc<str>,
    listeners: Vec<ChangeListener>,
}

/// Ordered listener registry, one instance per mock lifetime.
///
/// Buckets live in a flat vector in first-registration order; listener
/// counts per query are small, so linear scans are sufficient and keep
/// iteration order deterministic for free. Query strings are opaque keys,
/// never parsed.
///
/// An absent bucket and an empty bucket are indistinguishable to every
/// read operation. Buckets emptied by removal are retained but skipped by
/// [`QueryRegistry::list_queries`].
pub struct QueryRegistry {
    buckets: Vec<QueryBucket>,
    active_query: Option<Arc<str>>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            active_query: None,
        }
    }

    /// True when `query` is the most recently activated query.
    pub fn is_active(&self, query: &str) -> bool {
        self.active_query.as_deref() == Some(query)
    }

    /// Appends `listener` to the bucket for `query`, creating the bucket if
    /// absent. Silent no-op when the same listener (by identity) is already
    /// registered there, regardless of which protocol added it. Never
    /// invokes the listener.
    pub fn add_listener(&mut self, query: &str, listener: ChangeListener) {
        if let Some(bucket) = self.bucket_mut(query) {
            if bucket.listeners.iter().any(|l| l.same_as(&listener)) {
                trace!("Listener already registered for: {}", query);
                return;
            }
            bucket.listeners.push(listener);
        } else {
            self.buckets.push(QueryBucket {
                query: Arc::from(query),
                listeners: vec![listener],
            });
        }
        debug!("Registered listener for: {}", query);
    }

    /// Removes `listener` from the bucket for `query` if present. Silent
    /// no-op for unknown queries or unregistered listeners, so speculative
    /// removal is always safe.
    pub fn remove_listener(&mut self, query: &str, listener: &ChangeListener) {
        let Some(bucket) = self.bucket_mut(query) else {
            return;
        };
        if let Some(idx) = bucket.listeners.iter().position(|l| l.same_as(listener)) {
            bucket.listeners.remove(idx);
            debug!("Removed listener for: {}", query);
        }
    }

    /// Marks `query` as the currently matching query and returns a snapshot
    /// of its listeners in registration order, empty when none are
    /// registered.
    ///
    /// Validation happens before any state change: an empty query fails
    /// with [`MediaMockError::InvalidQuery`] and leaves the registry
    /// untouched. The caller dispatches over the snapshot, so listeners
    /// that mutate the registry mid-dispatch cannot skip or duplicate
    /// in-flight invocations.
    pub fn activate(&mut self, query: &str) -> Result<Vec<ChangeListener>, MediaMockError> {
        if query.is_empty() {
            return Err(MediaMockError::InvalidQuery(
                "media query must be a non-empty string".to_string(),
            ));
        }

        self.active_query = Some(Arc::from(query));
        Ok(self
            .bucket(query)
            .map(|b| b.listeners.clone())
            .unwrap_or_default())
    }

    /// Queries that currently have at least one registered listener, in
    /// first-registration order.
    pub fn list_queries(&self) -> Vec<Arc<str>> {
        self.buckets
            .iter()
            .filter(|b| !b.listeners.is_empty())
            .map(|b| Arc::clone(&b.query))
            .collect()
    }

    /// Defensive copy of the ordered listener sequence for `query`, empty
    /// when none are registered. Mutating the copy never affects the
    /// registry.
    pub fn list_listeners(&self, query: &str) -> Vec<ChangeListener> {
        self.bucket(query)
            .map(|b| b.listeners.clone())
            .unwrap_or_default()
    }

    /// Drops every registration and resets the active-query marker to the
    /// unset sentinel, so no `matches` state leaks into the next test case.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.active_query = None;
        debug!("Cleared all media query registrations");
    }

    fn bucket(&self, query: &str) -> Option<&QueryBucket> {
        self.buckets.iter().find(|b| b.query.as_ref() == query)
    }

    fn bucket_mut(&mut self, query: &str) -> Option<&mut QueryBucket> {
        self.buckets.iter_mut().find(|b| b.query.as_ref() == query)
    }
}

impl Default for QueryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
