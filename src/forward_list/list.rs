use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    cursor::Cursor,
    iter::{Iter, IterMut},
    link::Link,
    node::{self, Header},
    traits::AsBase,
};

/// A singly-linked list owning elements of heterogeneous concrete types
/// behind the base type `B`.
///
/// Every inserted value is stored inline in its own heap node; the chain
/// holds only type-erased header pointers, and each node destroys its
/// payload through the concrete type it was inserted with. `B` is normally
/// a trait object, but any sized `B` gives a plain homogeneous list through
/// the identity [`AsBase`] impl.
///
/// The list is not `Send` or `Sync`: the concrete payload types are erased
/// at insertion, so nothing ties their thread affinity to `B`.
pub struct PolyForwardList<B: ?Sized> {
    root: Link<B>,
    _owns: PhantomData<Box<B>>,
}

impl<B: ?Sized> PolyForwardList<B> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        PolyForwardList {
            root: Link::new(),
            _owns: PhantomData,
        }
    }

    /// Returns `true` if the chain holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.next.is_none()
    }

    /// Borrows the first element.
    pub fn front(&self) -> Option<&B> {
        self.root.next.map(|n| unsafe { Header::elem(n).as_ref() })
    }

    /// Mutably borrows the first element.
    pub fn front_mut(&mut self) -> Option<&mut B> {
        self.root.next.map(|n| unsafe { Header::elem(n).as_mut() })
    }

    /// Inserts `value` at the front and returns a reference to it as the
    /// base type.
    pub fn push_front<T>(&mut self, value: T) -> &mut B
    where
        T: AsBase<B>,
    {
        let header = unsafe { node::link_after(NonNull::from(&mut self.root), value) };
        unsafe { Header::elem(header).as_mut() }
    }

    /// Removes and destroys the first element. Returns `false` on an empty
    /// list.
    pub fn pop_front(&mut self) -> bool {
        match self.root.next {
            Some(head) => {
                unsafe {
                    self.root.next = (*head.as_ptr()).link.next;
                    Header::drop_node(head);
                }
                true
            }
            None => false,
        }
    }

    /// Destroys every node in the chain.
    pub fn clear(&mut self) {
        while let Some(head) = self.root.next {
            unsafe {
                self.root.next = (*head.as_ptr()).link.next;
                Header::drop_node(head);
            }
        }
    }

    /// Replaces the entire contents with `values`.
    ///
    /// The replacement chain is built fully before the old one is touched;
    /// if the source iterator panics, this list is left unchanged and the
    /// partially built chain is destroyed.
    pub fn assign<T, I>(&mut self, values: I)
    where
        T: AsBase<B>,
        I: IntoIterator<Item = T>,
    {
        let mut fresh = Self::new();
        let mut tail = fresh.before_begin();
        for value in values {
            tail = unsafe { fresh.insert_after(tail, value) };
        }
        self.clear();
        self.root.next = fresh.root.next.take();
    }

    /// Replaces the entire contents with `count` clones of `value`, with the
    /// same rollback guarantee as [`PolyForwardList::assign`].
    pub fn assign_repeat<T>(&mut self, count: usize, value: T)
    where
        T: Clone + AsBase<B>,
    {
        self.assign(core::iter::repeat_n(value, count));
    }

    /// Exchanges the chains of two lists.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.root.next, &mut other.root.next);
    }

    /// A cursor to the position before the first node: not dereferenceable,
    /// but a valid position for the `*_after` operations.
    pub fn before_begin(&mut self) -> Cursor<B> {
        Cursor {
            p: Some(NonNull::from(&mut self.root)),
        }
    }

    /// A cursor to the first node, or the end cursor on an empty list.
    pub fn begin(&mut self) -> Cursor<B> {
        Cursor {
            p: self.root.next.map(NonNull::cast),
        }
    }

    /// Iterates the chain front to back.
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(self.root.next)
    }

    /// Iterates the chain front to back with mutable access.
    pub fn iter_mut(&mut self) -> IterMut<'_, B> {
        IterMut::new(self.root.next)
    }

    /// Inserts `value` directly after `pos` and returns a cursor to the new
    /// node.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position in this list. Panics if `pos` is the
    /// end cursor.
    pub unsafe fn insert_after<T>(&mut self, pos: Cursor<B>, value: T) -> Cursor<B>
    where
        T: AsBase<B>,
    {
        let after = pos.p.expect("insert position must not be the end cursor");
        let header = unsafe { node::link_after(after, value) };
        Cursor {
            p: Some(header.cast()),
        }
    }

    /// Inserts every value yielded by `values` directly after `pos`,
    /// preserving their order. Returns a cursor to the last inserted node,
    /// or `pos` if the source was empty.
    ///
    /// The run is built on a detached side chain and spliced in only once
    /// every value has been constructed; a panicking source destroys the
    /// side chain and leaves this list unchanged.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position in this list. Panics if `pos` is the
    /// end cursor.
    pub unsafe fn insert_after_each<T, I>(&mut self, pos: Cursor<B>, values: I) -> Cursor<B>
    where
        T: AsBase<B>,
        I: IntoIterator<Item = T>,
    {
        let mut side = PolyForwardList::<B>::new();
        let mut tail = side.before_begin();
        for value in values {
            tail = unsafe { side.insert_after(tail, value) };
        }

        let after = pos.p.expect("insert position must not be the end cursor");
        let Some(head) = side.root.next.take() else {
            return pos;
        };
        unsafe {
            let last = tail.p.expect("side chain tail cannot be the end cursor");
            (*last.as_ptr()).next = (*after.as_ptr()).next;
            (*after.as_ptr()).next = Some(head);
        }
        tail
    }

    /// Inserts `count` clones of `value` directly after `pos`, with the
    /// same rollback guarantee as [`PolyForwardList::insert_after_each`].
    ///
    /// # Safety
    ///
    /// As [`PolyForwardList::insert_after_each`].
    pub unsafe fn insert_after_n<T>(&mut self, pos: Cursor<B>, count: usize, value: T) -> Cursor<B>
    where
        T: Clone + AsBase<B>,
    {
        unsafe { self.insert_after_each(pos, core::iter::repeat_n(value, count)) }
    }

    /// Unlinks and destroys the node directly after `pos`, returning a
    /// cursor to the position past the erased node.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position in this list with a node after it.
    /// Panics if `pos` is the end cursor or addresses the last position.
    pub unsafe fn erase_after(&mut self, pos: Cursor<B>) -> Cursor<B> {
        let p = pos.p.expect("erase position must not be the end cursor");
        unsafe {
            let trash = (*p.as_ptr()).next.expect("no node after the erase position");
            (*p.as_ptr()).next = (*trash.as_ptr()).link.next;
            Header::drop_node(trash);
            Cursor {
                p: (*p.as_ptr()).next.map(NonNull::cast),
            }
        }
    }

    /// Unlinks and destroys every node strictly between `first` and `last`,
    /// returning `last`. `last` may be the end cursor, meaning erase to the
    /// tail.
    ///
    /// # Safety
    ///
    /// `first` must be a valid position in this list and `last` a position
    /// reachable from it. Panics if `first` is the end cursor.
    pub unsafe fn erase_range_after(&mut self, first: Cursor<B>, last: Cursor<B>) -> Cursor<B> {
        let p = first.p.expect("erase position must not be the end cursor");
        unsafe {
            while let Some(trash) = (*p.as_ptr()).next {
                if Some(trash.cast()) == last.p {
                    break;
                }
                (*p.as_ptr()).next = (*trash.as_ptr()).link.next;
                Header::drop_node(trash);
            }
        }
        last
    }

    /// Destroys every element equal to `value`, returning the count removed.
    pub fn remove(&mut self, value: &B) -> usize
    where
        B: PartialEq,
    {
        self.remove_if(|elem| elem == value)
    }

    /// Destroys every element satisfying `pred` in one pass, returning the
    /// count removed.
    ///
    /// The pivot advances only when the node after it survives, so
    /// consecutive matches are all removed.
    pub fn remove_if<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&B) -> bool,
    {
        let mut removed = 0;
        let mut pivot = NonNull::from(&mut self.root);
        unsafe {
            while let Some(next) = (*pivot.as_ptr()).next {
                if pred(Header::elem(next).as_ref()) {
                    (*pivot.as_ptr()).next = (*next.as_ptr()).link.next;
                    Header::drop_node(next);
                    removed += 1;
                } else {
                    pivot = next.cast();
                }
            }
        }
        removed
    }

    /// Relocates `other`'s entire chain to directly after `pos`, leaving
    /// `other` empty. No nodes are constructed or destroyed.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position in this list. Panics if `pos` is the
    /// end cursor.
    pub unsafe fn splice_after(&mut self, pos: Cursor<B>, other: &mut Self) {
        let p = pos.p.expect("splice position must not be the end cursor");
        let Some(head) = other.root.next.take() else {
            return;
        };
        unsafe {
            let saved = (*p.as_ptr()).next.replace(head);
            let mut tail = head;
            while let Some(next) = (*tail.as_ptr()).link.next {
                tail = next;
            }
            (*tail.as_ptr()).link.next = saved;
        }
    }

    /// Relocates the single node after `it` to directly after `pos`. The
    /// two cursors may address the same chain or different chains.
    ///
    /// # Safety
    ///
    /// Both cursors must address valid positions, with a node after `it`,
    /// and the caller must have exclusive access to both chains. Undefined
    /// if `it == pos`. Panics on an end cursor or when no node follows
    /// `it`.
    pub unsafe fn splice_next_after(&mut self, pos: Cursor<B>, it: Cursor<B>) {
        let p = pos.p.expect("splice position must not be the end cursor");
        let q = it.p.expect("splice source must not be the end cursor");
        unsafe {
            let moved = (*q.as_ptr()).next.expect("no node after the splice source");
            let saved = (*p.as_ptr()).next;
            (*q.as_ptr()).next = (*moved.as_ptr()).link.next;
            (*p.as_ptr()).next = Some(moved);
            (*moved.as_ptr()).link.next = saved;
        }
    }

    /// Relocates the open range `(first, last)` to directly after `pos`,
    /// preserving the relative order of the moved nodes. `last` may be the
    /// end cursor.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid position in this list, `first` a valid
    /// position with `last` reachable from it, and `pos` must not lie
    /// inside the moved range. The caller must have exclusive access to
    /// both chains. Panics if `pos` or `first` is the end cursor.
    pub unsafe fn splice_range_after(&mut self, pos: Cursor<B>, first: Cursor<B>, last: Cursor<B>) {
        let p = pos.p.expect("splice position must not be the end cursor");
        let f = first.p.expect("splice source must not be the end cursor");
        unsafe {
            let saved = (*p.as_ptr()).next;
            (*p.as_ptr()).next = (*f.as_ptr()).next;
            (*f.as_ptr()).next = last.p.map(NonNull::cast);
            let mut tail = p;
            while (*tail.as_ptr()).next.map(NonNull::cast) != last.p {
                tail = (*tail.as_ptr())
                    .next
                    .expect("splice range end not reachable")
                    .cast();
            }
            (*tail.as_ptr()).next = saved;
        }
    }

    /// Stable two-way merge of two chains ordered by `<`, consuming `other`
    /// entirely. See [`PolyForwardList::merge_by`].
    pub fn merge(&mut self, other: &mut Self)
    where
        B: PartialOrd,
    {
        self.merge_by(other, |a, b| a < b);
    }

    /// Stable two-way merge ordered by `less`, consuming `other` entirely.
    ///
    /// A node of `other` is spliced over only when it compares strictly
    /// less than the next element here, so equal elements keep their
    /// origin order with this list's elements first. Once this chain is
    /// exhausted the remainder of `other` is attached wholesale. No nodes
    /// are constructed or destroyed.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&B, &B) -> bool,
    {
        let mut pivot = NonNull::from(&mut self.root);
        unsafe {
            loop {
                let Some(mine) = (*pivot.as_ptr()).next else {
                    break;
                };
                let Some(theirs) = other.root.next else {
                    return;
                };
                if less(Header::elem(theirs).as_ref(), Header::elem(mine).as_ref()) {
                    other.root.next = (*theirs.as_ptr()).link.next;
                    (*theirs.as_ptr()).link.next = Some(mine);
                    (*pivot.as_ptr()).next = Some(theirs);
                    pivot = theirs.cast();
                } else {
                    pivot = mine.cast();
                }
            }
            (*pivot.as_ptr()).next = other.root.next.take();
        }
    }

    /// Reverses the chain in place: one pass, no allocation. Each node is
    /// moved onto the front of a detached chain, which then becomes the new
    /// root successor.
    pub fn reverse(&mut self) {
        let mut reversed: Option<NonNull<Header<B>>> = None;
        while let Some(head) = self.root.next {
            unsafe {
                self.root.next = (*head.as_ptr()).link.next;
                (*head.as_ptr()).link.next = reversed;
            }
            reversed = Some(head);
        }
        self.root.next = reversed;
    }
}

impl<B: ?Sized> Default for PolyForwardList<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized> Drop for PolyForwardList<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<B: ?Sized + fmt::Debug> fmt::Debug for PolyForwardList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<B: ?Sized + PartialEq> PartialEq for PolyForwardList<B> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<B: ?Sized + Eq> Eq for PolyForwardList<B> {}

impl<B: ?Sized + PartialOrd> PartialOrd for PolyForwardList<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<B: ?Sized + Ord> Ord for PolyForwardList<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<B, T> FromIterator<T> for PolyForwardList<B>
where
    B: ?Sized,
    T: AsBase<B>,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.extend(values);
        list
    }
}

impl<B, T> Extend<T> for PolyForwardList<B>
where
    B: ?Sized,
    T: AsBase<B>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut tail = NonNull::from(&mut self.root);
        unsafe {
            while let Some(next) = (*tail.as_ptr()).next {
                tail = next.cast();
            }
            self.insert_after_each(Cursor { p: Some(tail) }, values);
        }
    }
}

impl<'a, B: ?Sized> IntoIterator for &'a PolyForwardList<B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, B: ?Sized> IntoIterator for &'a mut PolyForwardList<B> {
    type Item = &'a mut B;
    type IntoIter = IterMut<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
