/// Projection from a concrete element type to the list's base element type.
///
/// A [`PolyForwardList<B>`](super::list::PolyForwardList) accepts any payload
/// type implementing `AsBase<B>`. The blanket identity impl covers the
/// homogeneous case (`B` itself). For a trait-object base the impl is the
/// raw-pointer unsize coercion, written per concrete type or generated by
/// the `AsBase` derive macro:
///
/// ```
/// use poly_forward_list::AsBase;
///
/// trait Animal {
///     fn speak(&self) -> &str;
/// }
///
/// struct Dog;
///
/// impl Animal for Dog {
///     fn speak(&self) -> &str {
///         "woof"
///     }
/// }
///
/// unsafe impl AsBase<dyn Animal> for Dog {
///     fn base_ptr(ptr: *mut Self) -> *mut dyn Animal {
///         ptr
///     }
/// }
/// ```
///
/// # Safety
///
/// `base_ptr` must return a pointer to the pointee itself or to a subobject
/// of it, valid for reads and writes exactly as long as the pointee, and
/// must not read or write through `ptr`. The projection must be stable: the
/// same input pointer always yields the same base pointer.
pub unsafe trait AsBase<B: ?Sized> {
    /// Projects a raw pointer to the concrete element into a raw pointer to
    /// its base view, without dereferencing it.
    fn base_ptr(ptr: *mut Self) -> *mut B;
}

unsafe impl<B: ?Sized> AsBase<B> for B {
    fn base_ptr(ptr: *mut B) -> *mut B {
        ptr
    }
}
