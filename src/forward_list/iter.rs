use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::Header;

/// A borrowing iterator over a chain, yielding base references.
pub struct Iter<'a, B: ?Sized> {
    next: Option<NonNull<Header<B>>>,
    _chain: PhantomData<&'a B>,
}

impl<'a, B: ?Sized> Iter<'a, B> {
    pub(crate) fn new(head: Option<NonNull<Header<B>>>) -> Self {
        Iter {
            next: head,
            _chain: PhantomData,
        }
    }
}

impl<'a, B: ?Sized> Iterator for Iter<'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<&'a B> {
        self.next.map(|node| unsafe {
            self.next = (*node.as_ptr()).link.next;
            Header::elem(node).as_ref()
        })
    }
}

impl<'a, B: ?Sized> Clone for Iter<'a, B> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            _chain: PhantomData,
        }
    }
}

/// A mutably borrowing iterator over a chain.
pub struct IterMut<'a, B: ?Sized> {
    next: Option<NonNull<Header<B>>>,
    _chain: PhantomData<&'a mut B>,
}

impl<'a, B: ?Sized> IterMut<'a, B> {
    pub(crate) fn new(head: Option<NonNull<Header<B>>>) -> Self {
        IterMut {
            next: head,
            _chain: PhantomData,
        }
    }
}

impl<'a, B: ?Sized> Iterator for IterMut<'a, B> {
    type Item = &'a mut B;

    fn next(&mut self) -> Option<&'a mut B> {
        self.next.map(|node| unsafe {
            self.next = (*node.as_ptr()).link.next;
            Header::elem(node).as_mut()
        })
    }
}
