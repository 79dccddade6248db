//! Affine transform operations and the save/restore transform stack.

pub mod ops;
pub mod stack;
