use crate::MediaQueryEvent;
use std::fmt;
use std::rc::Rc;

/// A callable registered for media-query change notifications.
///
/// Identity, not structure, is what the registry matches on: two listeners
/// are the same only when they share an allocation. Cloning preserves
/// identity, so the clone handed to a handle can later be removed with the
/// original. There is no meaningful structural equality over arbitrary
/// closures.
#[derive(Clone)]
pub struct ChangeListener {
    inner: Rc<dyn Fn(&MediaQueryEvent)>,
}

impl ChangeListener {
    pub fn new(f: impl Fn(&MediaQueryEvent) + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the listener with a synthetic change event.
    pub fn call(&self, event: &MediaQueryEvent) {
        (self.inner)(event);
    }

    /// Identity comparison on the allocation address.
    ///
    /// Compares data pointers only; vtable addresses are not stable across
    /// codegen units and must not participate in identity.
    pub fn same_as(&self, other: &ChangeListener) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.inner) as *const u8,
            Rc::as_ptr(&other.inner) as *const u8,
        )
    }
}

impl fmt::Debug for ChangeListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChangeListener")
            .field(&(Rc::as_ptr(&self.inner) as *const u8))
            .finish()
    }
}
