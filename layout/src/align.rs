//! Fusion of vertically adjacent blocks along a shared text line.
//!
//! When the bottom line of one block and the top line of the next carry the
//! same text with different surrounding padding, the two blocks can be
//! joined so that text appears once, with both blocks shifted until the
//! shared text occupies the same columns.
//!
//! The match is on trimmed string equality, not structure. Declining to fuse
//! is always safe: the caller stacks the blocks with their separator line
//! instead.

use crate::Block;

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn trailing_whitespace(line: &str) -> usize {
    line.chars().rev().take_while(|c| c.is_whitespace()).count()
}

/// Fuse `bottom` beneath `top` if `top`'s last line and `bottom`'s first
/// line hold the same non-blank text.
///
/// On a match, both blocks are re-margined so the shared text lines up, and
/// the result is every line of `top` followed by the lines of `bottom` after
/// its first: the shared line appears once, taken from `top`.
///
/// Returns `None` when the shared line is blank or the trimmed texts differ.
#[must_use]
pub fn align(top: &Block, bottom: &Block) -> Option<Block> {
    let last = top.last_line();
    let first = bottom.first_line();

    let shared = last.trim();
    if shared.is_empty() || shared != first.trim() {
        return None;
    }

    let top_left = leading_whitespace(last);
    let top_right = trailing_whitespace(last);
    let bottom_left = leading_whitespace(first);
    let bottom_right = trailing_whitespace(first);

    let top = top.margin(
        bottom_left.saturating_sub(top_left),
        bottom_right.saturating_sub(top_right),
    );
    let bottom = bottom.margin(
        top_left.saturating_sub(bottom_left),
        top_right.saturating_sub(bottom_right),
    );

    let mut lines = top.into_lines();
    lines.extend(bottom.into_lines().into_iter().skip(1));
    Some(Block::from_lines(lines))
}
