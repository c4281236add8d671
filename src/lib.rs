//! Owning singly-linked lists over heterogeneous element types.
//!
//! The main export is [`PolyForwardList`], a forward list whose nodes own
//! payloads of differing concrete types behind one base type, normally a
//! trait object. See the [`forward_list`] module for the full API and an
//! example.

#![no_std]

extern crate alloc;

pub mod forward_list;

pub use forward_list::cursor::Cursor;
pub use forward_list::iter::{Iter, IterMut};
pub use forward_list::list::PolyForwardList;
pub use forward_list::traits::AsBase;

pub use poly_forward_list_derive::AsBase;
