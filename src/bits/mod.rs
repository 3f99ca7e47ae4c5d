//! Fixed-width bit-field helpers.
//!
//! The pool treats its content as an unsigned integer confined to a
//! configurable number of bits. Everything here is pure and operates on
//! arbitrary-precision integers, so widths such as 4096 bits are handled
//! the same way as a 4-bit toy field.

mod rotate;

pub use rotate::{mask, rol, ror, to_binary_text};
