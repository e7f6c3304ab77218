use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison for values stored in a [`History`](crate::History).
///
/// `History::go_to` looks for *the same* snapshot, not an equal one: two
/// separately built documents with identical contents are different points
/// in time. Implement this for your snapshot type in terms of pointer
/// identity.
pub trait Snapshot {
    fn same_snapshot(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Snapshot for Arc<T> {
    fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Snapshot for Rc<T> {
    fn same_snapshot(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Snapshot for &T {
    fn same_snapshot(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
