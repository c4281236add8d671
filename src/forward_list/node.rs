use alloc::boxed::Box;
use core::ptr::NonNull;

use super::{link::Link, traits::AsBase};

/// Type-erased node header.
///
/// Every heap node begins with one of these, so the chain can be walked,
/// relinked, and torn down through `NonNull<Header<B>>` alone. The two
/// function pointers are monomorphized over the concrete payload type when
/// the node is allocated; `drop_fn` is the stand-in for a virtual
/// destructor, so payload types themselves need no polymorphic capability.
#[repr(C)]
pub(crate) struct Header<B: ?Sized> {
    pub(crate) link: Link<B>,
    elem_fn: unsafe fn(NonNull<Header<B>>) -> NonNull<B>,
    drop_fn: unsafe fn(NonNull<Header<B>>),
}

/// A heap node owning one payload of concrete type `T`.
///
/// `repr(C)` with the header first, so a pointer to the node is also a
/// pointer to its header and the erased entry points can cast back.
#[repr(C)]
struct Node<B: ?Sized, T> {
    header: Header<B>,
    elem: T,
}

impl<B: ?Sized> Header<B> {
    /// Projects the header to the base view of its payload.
    ///
    /// # Safety
    ///
    /// `this` must point to the header of a live node created by
    /// [`link_after`]. The sentinel link is not a header.
    pub(crate) unsafe fn elem(this: NonNull<Header<B>>) -> NonNull<B> {
        unsafe { ((*this.as_ptr()).elem_fn)(this) }
    }

    /// Destroys the payload through its concrete type and releases the
    /// node's storage.
    ///
    /// # Safety
    ///
    /// `this` must point to the header of a live node created by
    /// [`link_after`], and the node must not be reachable from any chain
    /// afterwards.
    pub(crate) unsafe fn drop_node(this: NonNull<Header<B>>) {
        unsafe { ((*this.as_ptr()).drop_fn)(this) }
    }
}

/// Allocates a node owning `value` and links it directly after `after`,
/// capturing `after`'s old successor as the new node's successor.
///
/// The node is insert-after by construction: it is never observable in a
/// free-floating or half-linked state.
///
/// # Safety
///
/// `after` must point to a live link (the root sentinel or a node header)
/// whose chain the caller has exclusive access to.
pub(crate) unsafe fn link_after<B, T>(after: NonNull<Link<B>>, value: T) -> NonNull<Header<B>>
where
    B: ?Sized,
    T: AsBase<B>,
{
    let node = Box::new(Node {
        header: Header {
            link: Link {
                next: unsafe { (*after.as_ptr()).next },
            },
            elem_fn: elem_erased::<B, T>,
            drop_fn: drop_erased::<B, T>,
        },
        elem: value,
    });
    let header = unsafe { NonNull::new_unchecked(Box::into_raw(node)) }.cast::<Header<B>>();
    unsafe { (*after.as_ptr()).next = Some(header) };
    header
}

unsafe fn elem_erased<B, T>(header: NonNull<Header<B>>) -> NonNull<B>
where
    B: ?Sized,
    T: AsBase<B>,
{
    let node = header.cast::<Node<B, T>>().as_ptr();
    let base = T::base_ptr(unsafe { &raw mut (*node).elem });
    unsafe { NonNull::new_unchecked(base) }
}

unsafe fn drop_erased<B, T>(header: NonNull<Header<B>>)
where
    B: ?Sized,
    T: AsBase<B>,
{
    drop(unsafe { Box::from_raw(header.cast::<Node<B, T>>().as_ptr()) });
}
