//! Inference diagrams.
//!
//! A diagram has three rows: the premises side by side, a horizontal rule
//! annotated with a note, and the conclusion centered under the rule.
//!
//! ```text
//!  foo  bar
//! ―――――――――― (note)
//!    qux
//! ```
//!
//! When the premise row ends in a single conclusion that is the same text as
//! the rule's top summary line, the two are fused with [`align`] so nested
//! diagrams stack without a gap.

use std::iter;

use tracing::trace;

use crate::align::align;
use crate::block::{Block, line_width};

/// Columns between the rule line and its note.
const NOTE_GAP: usize = 1;

/// What the auto-sized rule line is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoWidth {
    /// The full width of the premise row, including every nested diagram.
    #[default]
    Block,
    /// Only the trimmed bottom line of the premise row, i.e. the premises'
    /// own conclusions. Nested rules stay as narrow as the judgements they
    /// separate.
    Conclusion,
}

/// Glyphs and spacing used to draw inference diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyle {
    /// Character repeated to draw the rule line.
    pub rule: char,
    /// Blank columns between sibling premises.
    pub gap: usize,
    /// Columns added to the measured content when sizing the rule line.
    pub padding: usize,
    /// What [`TreeStyle::tree_auto`] measures the rule line against.
    pub width: AutoWidth,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            rule: '\u{2015}',
            gap: 2,
            padding: 2,
            width: AutoWidth::Block,
        }
    }
}

impl TreeStyle {
    #[must_use]
    pub fn horizontal_rule(&self, width: usize) -> Block {
        Block::from(iter::repeat_n(self.rule, width).collect::<String>())
    }

    /// Draw `root` as the conclusion of `branches` under a rule `line_width`
    /// columns wide, annotated with `note`.
    ///
    /// Content wider than `line_width` is never clipped; the diagram grows to
    /// fit it instead.
    #[must_use]
    pub fn tree(
        &self,
        root: &Block,
        branches: &[Block],
        note: &Block,
        line_width: usize,
    ) -> Block {
        let child_row = Block::spaced(branches, self.gap).center(line_width);
        let summary = Block::from(child_row.last_line().trim()).center(line_width);
        let rule_row = Block::spaced(
            &[self.horizontal_rule(line_width), note.clone()],
            NOTE_GAP,
        );
        let conclusion_row = root.center(line_width);

        let lower = Block::stack([&summary, &rule_row, &conclusion_row]).rectangularize();
        if let Some(fused) = align(&child_row, &lower) {
            trace!(line_width, height = fused.height(), "fused premises onto rule");
            return fused;
        }

        trace!(line_width, branches = branches.len(), "stacked premises above rule");
        Block::stack([&child_row, &rule_row, &conclusion_row]).rectangularize()
    }

    /// Rule width for `root` over `branches`: the wider of the measured
    /// premise content and the conclusion, plus padding.
    #[must_use]
    pub fn auto_width(&self, root: &Block, branches: &[Block]) -> usize {
        let row = Block::spaced(branches, self.gap);
        let content = match self.width {
            AutoWidth::Block => row.width(),
            AutoWidth::Conclusion => line_width(row.last_line().trim()),
        };
        content.max(root.width()) + self.padding
    }

    /// [`TreeStyle::tree`] with the rule width from [`TreeStyle::auto_width`].
    #[must_use]
    pub fn tree_auto(&self, root: &Block, branches: &[Block], note: &Block) -> Block {
        let line_width = self.auto_width(root, branches);
        self.tree(root, branches, note, line_width)
    }
}

/// [`TreeStyle::tree`] with the default style.
#[must_use]
pub fn tree(root: &Block, branches: &[Block], note: &Block, line_width: usize) -> Block {
    TreeStyle::default().tree(root, branches, note, line_width)
}

/// [`TreeStyle::tree_auto`] with the default style.
#[must_use]
pub fn tree_auto(root: &Block, branches: &[Block], note: &Block) -> Block {
    TreeStyle::default().tree_auto(root, branches, note)
}
