//! Usage sheets for a calculus.

use turnstile_layout::Block;
use turnstile_types::{Catalog, Derivation, Formula, Section};

use crate::renderer::Renderer;

/// Column unit of the sheet grid.
const UNIT: usize = 16;
const HALF: usize = 2 * UNIT;
const FULL: usize = 4 * UNIT;

impl Renderer {
    /// Lay out a catalog as a reference sheet: the underlined name, then each
    /// proposition section as rows of formulas, then each rule section as
    /// rows of rendered derivations in half-width cells.
    #[must_use]
    pub fn catalog(&self, catalog: &Catalog) -> Block {
        let br = Block::empty();
        let mut parts = vec![
            br.clone(),
            br.clone(),
            Block::from(catalog.name.as_str()).underline('*').center(FULL),
            br.clone(),
        ];

        for section in &catalog.propositions {
            parts.extend(self.proposition_section(section));
        }
        parts.push(br);
        for section in &catalog.rules {
            parts.extend(self.rule_section(section));
        }

        Block::stack(&parts)
    }

    fn section_header(title: &str) -> [Block; 4] {
        [
            Block::empty(),
            Block::from(title),
            Block::empty(),
            Block::empty(),
        ]
    }

    fn proposition_section(&self, section: &Section<Formula>) -> Vec<Block> {
        let mut parts = Vec::from(Self::section_header(&section.title));
        for row in &section.rows {
            let formulas: Vec<Block> = row.iter().map(|f| self.formula(f)).collect();
            parts.push(Block::spaced(&formulas, 1).center(HALF));
            parts.push(Block::empty());
        }
        parts
    }

    fn rule_section(&self, section: &Section<Derivation>) -> Vec<Block> {
        let mut parts = Vec::from(Self::section_header(&section.title));
        for row in &section.rows {
            let cells: Vec<Block> = row.iter().map(|d| self.render(d).center(HALF)).collect();
            parts.push(Block::spaced(&cells, 0));
            parts.push(Block::empty());
            parts.push(Block::empty());
        }
        parts
    }
}
