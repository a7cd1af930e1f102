//! Immutable multi-line text blocks.
//!
//! A [`Block`] is an ordered, non-empty list of lines. Lines may differ in
//! length (a "ragged" block) unless the block has been rectangularized.
//! Every operation returns a new block; nothing is modified in place.

use std::fmt;
use std::iter;

/// Number of `char`s in a line. This is the width unit for every layout
/// computation.
#[must_use]
pub fn line_width(line: &str) -> usize {
    line.chars().count()
}

/// Right-pad a single line with spaces up to `width` characters. Never truncates.
fn pad_line(line: &str, width: usize) -> String {
    let missing = width.saturating_sub(line_width(line));
    let mut padded = String::with_capacity(line.len() + missing);
    padded.push_str(line);
    padded.extend(iter::repeat_n(' ', missing));
    padded
}

/// An immutable multi-line text value.
///
/// # Invariants
///
/// - A block always holds at least one line. The empty block is a single
///   empty line, which is what splitting the empty string yields.
/// - No line contains `'\n'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    lines: Vec<String>,
}

impl Default for Block {
    fn default() -> Self {
        Self::empty()
    }
}

impl Block {
    /// The block holding a single empty line.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Stack blocks vertically, top to bottom, without any alignment.
    ///
    /// Stacking nothing yields the empty block.
    #[must_use]
    pub fn stack<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Self {
        let lines: Vec<String> = blocks
            .into_iter()
            .flat_map(|block| block.lines.iter().cloned())
            .collect();
        Self::from_lines(lines)
    }

    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::empty()
        } else {
            Self { lines }
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| line_width(line)).max().unwrap_or(0)
    }

    #[must_use]
    pub fn first_line(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn last_line(&self) -> &str {
        self.lines.last().map_or("", String::as_str)
    }

    /// Add `left` spaces before and `right` spaces after every line.
    #[must_use]
    pub fn margin(&self, left: usize, right: usize) -> Self {
        self.margin_with(left, right, ' ')
    }

    /// Add `left` and `right` copies of `fill` around every line.
    ///
    /// Each line is extended independently; a ragged block stays ragged.
    #[must_use]
    pub fn margin_with(&self, left: usize, right: usize, fill: char) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                let mut out = String::with_capacity(line.len() + left + right);
                out.extend(iter::repeat_n(fill, left));
                out.push_str(line);
                out.extend(iter::repeat_n(fill, right));
                out
            })
            .collect();
        Self { lines }
    }

    /// Right-pad every line to the block's width.
    #[must_use]
    pub fn rectangularize(&self) -> Self {
        let width = self.width();
        Self {
            lines: self.lines.iter().map(|line| pad_line(line, width)).collect(),
        }
    }

    /// Right-pad so the block is at least `width` wide. Never truncates.
    #[must_use]
    pub fn left_align_to(&self, width: usize) -> Self {
        self.margin(0, width.saturating_sub(self.width()))
    }

    /// Center the block within `width` columns.
    ///
    /// Any odd column goes to the right. When the block is already wider than
    /// `width`, both margins are zero and the block is returned unclipped.
    #[must_use]
    pub fn center(&self, width: usize) -> Self {
        let extra = width.saturating_sub(self.width());
        let left = extra / 2;
        self.margin(left, extra - left)
    }

    /// Join two blocks side by side, aligned on their bottom lines.
    ///
    /// Each side keeps its own width; rows missing from the shorter block
    /// are filled with blanks so its content rests on the shared baseline.
    #[must_use]
    pub fn concat(&self, right: &Block) -> Self {
        let left_width = self.width();
        let right_width = right.width();
        let height = self.height().max(right.height());

        let mut rows: Vec<String> = (0..height)
            .map(|from_bottom| {
                let left_line = nth_from_bottom(&self.lines, from_bottom);
                let right_line = nth_from_bottom(&right.lines, from_bottom);
                let mut row = pad_line(left_line, left_width);
                row.push_str(&pad_line(right_line, right_width));
                row
            })
            .collect();
        rows.reverse();
        Self { lines: rows }
    }

    /// Concatenate blocks left to right with `gap` blank columns between
    /// neighbours.
    ///
    /// No blocks yields the empty block; a single block is returned unchanged.
    #[must_use]
    pub fn spaced(blocks: &[Block], gap: usize) -> Self {
        let Some((first, rest)) = blocks.split_first() else {
            return Self::empty();
        };
        rest.iter()
            .fold(first.clone(), |acc, block| acc.concat(&block.margin(gap, 0)))
    }

    /// Append a line of `ch` as wide as the block.
    #[must_use]
    pub fn underline(&self, ch: char) -> Self {
        let mut lines = self.lines.clone();
        lines.push(iter::repeat_n(ch, self.width()).collect());
        Self { lines }
    }
}

fn nth_from_bottom(lines: &[String], index: usize) -> &str {
    lines
        .len()
        .checked_sub(index + 1)
        .and_then(|i| lines.get(i))
        .map_or("", String::as_str)
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
