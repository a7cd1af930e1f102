//! Two-dimensional text layout for proof trees.
//!
//! This crate provides the pure layout engine the renderer builds on:
//!
//! - **`block`**: immutable multi-line text values and their algebra
//!   (margins, centering, bottom-aligned horizontal concatenation)
//! - **`align`**: fusion of two blocks along a shared text line
//! - **`tree`**: the three-row inference diagram (premises, rule, conclusion)
//!
//! Widths are raw `char` counts. Box-drawing glyphs occupy a single terminal
//! column, so output lines up in practice, but wide (CJK, emoji) characters
//! are not measured by display width.

pub mod align;
pub mod block;
pub mod tree;

pub use align::align;
pub use block::Block;
pub use tree::{AutoWidth, TreeStyle, tree, tree_auto};
