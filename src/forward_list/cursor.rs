use core::fmt;
use core::ptr::NonNull;

use super::{link::Link, node::Header};

/// A raw position in a chain.
///
/// A cursor addresses the link whose `next` field an insertion at this
/// position would rewrite: the root sentinel (`before_begin`), a node, or
/// the end of the chain. The end cursor holds no address and is distinct
/// from every node. Cursors are compared by link identity and are `Copy`;
/// they do not borrow the list, which is why the operations consuming them
/// are `unsafe`.
///
/// A cursor is invalidated by erasing the node it addresses and by moving
/// the list whose sentinel it addresses. Cursors to other nodes survive
/// insertions, erasures, and splices around them.
pub struct Cursor<B: ?Sized> {
    pub(crate) p: Option<NonNull<Link<B>>>,
}

impl<B: ?Sized> Cursor<B> {
    /// The end cursor.
    pub const fn end() -> Self {
        Cursor { p: None }
    }

    /// Returns `true` if this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.p.is_none()
    }

    /// Advances to the next position, reaching the end cursor after the
    /// last node.
    ///
    /// # Safety
    ///
    /// The cursor must address a live link (`before_begin` or a node); it
    /// must not be the end cursor.
    pub unsafe fn move_next(&mut self) {
        let p = self.p.expect("cannot advance the end cursor");
        self.p = unsafe { (*p.as_ptr()).next.map(NonNull::cast) };
    }

    /// Borrows the element at this position.
    ///
    /// # Safety
    ///
    /// The cursor must address a live node. `before_begin` and the end
    /// cursor are not dereferenceable. The chain must not be mutated for
    /// the chosen lifetime `'a`.
    pub unsafe fn as_ref<'a>(&self) -> &'a B {
        let p = self.p.expect("cannot dereference the end cursor");
        unsafe { Header::elem(p.cast::<Header<B>>()).as_ref() }
    }

    /// Mutably borrows the element at this position.
    ///
    /// # Safety
    ///
    /// As [`Cursor::as_ref`], and the caller must have exclusive access to
    /// the chain for the chosen lifetime `'a`.
    pub unsafe fn as_mut<'a>(&self) -> &'a mut B {
        let p = self.p.expect("cannot dereference the end cursor");
        unsafe { Header::elem(p.cast::<Header<B>>()).as_mut() }
    }
}

impl<B: ?Sized> Clone for Cursor<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Cursor<B> {}

impl<B: ?Sized> Default for Cursor<B> {
    fn default() -> Self {
        Self::end()
    }
}

impl<B: ?Sized> PartialEq for Cursor<B> {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
    }
}

impl<B: ?Sized> Eq for Cursor<B> {}

impl<B: ?Sized> fmt::Debug for Cursor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.p).finish()
    }
}
