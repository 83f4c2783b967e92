use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded handle to a value remembered by an [`InstanceScope`](crate::InstanceScope).
///
/// Cloning the handle is cheap; every clone points at the same slot, which
/// lives as long as the mounted instance that owns the scope.
pub struct Owned<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Owned<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Run `f` with a mutable reference to the stored value.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut borrow = self.inner.borrow_mut();
        f(&mut *borrow)
    }
}
