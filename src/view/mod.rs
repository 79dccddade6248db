//! World-window to pixel-viewport mapping.

pub mod mapper;
