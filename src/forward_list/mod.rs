//! # Polymorphic Forward List
//!
//! A singly-linked list that owns elements of heterogeneous concrete types
//! behind a common base type, normally a trait object.
//!
//! Each element lives inline in a single heap node. The node begins with a
//! type-erased header, so the chain can be walked, spliced, and torn down
//! without knowing what concrete type sits behind any given link, while
//! destruction still runs the payload's own destructor.
//!
//! ## Core Components
//!
//! - [`traits::AsBase`]: projects a concrete element type to the list's base
//!   type. Implemented by the blanket identity impl for the homogeneous
//!   case, and by consumers (or the `AsBase` derive) for trait-object bases.
//! - [`list::PolyForwardList`]: the container.
//! - [`cursor::Cursor`]: a raw position in a chain, used by the positional
//!   insert/erase/splice operations.
//! - [`iter::Iter`] and [`iter::IterMut`]: borrowing forward iterators.
//!
//! ## Safety
//!
//! The everyday API is safe. The positional operations on [`cursor::Cursor`]
//! are `unsafe` and the caller is responsible for upholding their contracts:
//!
//! - A cursor must address a position in a live chain, and is invalidated by
//!   erasing its node or by moving the list it points into.
//! - Positional operations on a list must be given positions in that list.
//! - Cross-chain splices require exclusive access to both chains.
//!
//! # Examples
//!
//! ```
//! use poly_forward_list::{AsBase, PolyForwardList};
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(AsBase)]
//! #[as_base(dyn Shape)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         core::f64::consts::PI * self.radius * self.radius
//!     }
//! }
//!
//! #[derive(AsBase)]
//! #[as_base(dyn Shape)]
//! struct Square {
//!     side: f64,
//! }
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 {
//!         self.side * self.side
//!     }
//! }
//!
//! let mut shapes: PolyForwardList<dyn Shape> = PolyForwardList::new();
//! shapes.push_front(Circle { radius: 1.0 });
//! shapes.push_front(Square { side: 2.0 });
//!
//! let areas: Vec<f64> = shapes.iter().map(Shape::area).collect();
//! assert_eq!(areas, vec![4.0, core::f64::consts::PI]);
//! ```

pub mod cursor;
pub mod iter;
pub mod link;
pub mod list;
pub mod node;
pub mod traits;

#[cfg(test)]
mod tests;
