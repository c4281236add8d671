use core::ptr::NonNull;

use super::node::Header;

/// A bare next pointer.
///
/// The list's root sentinel is a `Link`, and every node header starts with
/// one, so any chain position can be addressed uniformly as a link without
/// knowing whether it is the sentinel or a real node.
#[repr(C)]
pub(crate) struct Link<B: ?Sized> {
    pub(crate) next: Option<NonNull<Header<B>>>,
}

impl<B: ?Sized> Link<B> {
    pub(crate) const fn new() -> Self {
        Link { next: None }
    }
}
