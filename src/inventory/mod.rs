//! Inventory layer - carryable elements and the capacity-bounded bag

pub mod bag;
pub mod element;

pub use bag::{Bag, BagError};
pub use element::Element;
