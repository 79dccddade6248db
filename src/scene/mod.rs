//! Hierarchical scene rendering: drawing surfaces, the per-pass render context and the unit
//! primitives nodes draw with.

pub mod node;
pub mod primitives;
pub mod surface;
