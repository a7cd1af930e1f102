//! Rule labels.
//!
//! Rule identifiers are opaque to the renderer. A [`RuleLabels`] table maps
//! the ones it knows to a [`RuleGlyph`]; every other identifier is printed
//! verbatim.

use std::collections::HashMap;

use turnstile_types::RuleId;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

/// A connective whose theme glyph names a logical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    Negation,
    Conjunction,
    Disjunction,
    Implication,
}

impl Connective {
    #[must_use]
    pub fn glyph(self, theme: &Theme) -> String {
        match self {
            Connective::Negation => theme.negation.glyphs(),
            Connective::Conjunction => theme.conjunction.glyphs(),
            Connective::Disjunction => theme.disjunction.glyphs(),
            Connective::Implication => theme.implication.glyphs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleGlyph {
    /// Connective glyph, side letter, optional subscript index: `∧L₁`.
    Connective {
        connective: Connective,
        side: Side,
        index: Option<u8>,
    },
    Literal(String),
}

impl RuleGlyph {
    #[must_use]
    pub fn logical(connective: Connective, side: Side) -> Self {
        RuleGlyph::Connective {
            connective,
            side,
            index: None,
        }
    }

    #[must_use]
    pub fn indexed(connective: Connective, side: Side, index: u8) -> Self {
        RuleGlyph::Connective {
            connective,
            side,
            index: Some(index),
        }
    }

    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        RuleGlyph::Literal(text.into())
    }

    #[must_use]
    pub fn print(&self, theme: &Theme) -> String {
        match self {
            RuleGlyph::Connective {
                connective,
                side,
                index,
            } => {
                let mut label = connective.glyph(theme);
                label.push(side.letter());
                if let Some(index) = index {
                    label.extend(index.to_string().chars().map(subscript));
                }
                label
            }
            RuleGlyph::Literal(text) => text.clone(),
        }
    }
}

fn subscript(digit: char) -> char {
    digit
        .to_digit(10)
        .and_then(|d| char::from_u32(0x2080 + d))
        .unwrap_or(digit)
}

/// Lookup table from rule identifier to display glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLabels {
    table: HashMap<String, RuleGlyph>,
}

impl RuleLabels {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Labels for the Gentzen sequent calculus rule identifiers.
    #[must_use]
    pub fn sequent_calculus() -> Self {
        use Connective::{Conjunction, Disjunction, Implication, Negation};
        use Side::{Left, Right};

        let entries = [
            ("cl1", RuleGlyph::indexed(Conjunction, Left, 1)),
            ("cl2", RuleGlyph::indexed(Conjunction, Left, 2)),
            ("dr1", RuleGlyph::indexed(Disjunction, Right, 1)),
            ("dr2", RuleGlyph::indexed(Disjunction, Right, 2)),
            ("dl", RuleGlyph::logical(Disjunction, Left)),
            ("cr", RuleGlyph::logical(Conjunction, Right)),
            ("il", RuleGlyph::logical(Implication, Left)),
            ("ir", RuleGlyph::logical(Implication, Right)),
            ("nl", RuleGlyph::logical(Negation, Left)),
            ("nr", RuleGlyph::logical(Negation, Right)),
            ("swl", RuleGlyph::literal("WL")),
            ("swr", RuleGlyph::literal("WR")),
            ("scl", RuleGlyph::literal("CL")),
            ("scr", RuleGlyph::literal("CR")),
            ("srotl", RuleGlyph::literal("RotL")),
            ("srotr", RuleGlyph::literal("RotR")),
            ("sswpl", RuleGlyph::literal("PL")),
            ("sswpr", RuleGlyph::literal("PR")),
        ];

        Self {
            table: entries
                .into_iter()
                .map(|(id, glyph)| (id.to_owned(), glyph))
                .collect(),
        }
    }

    /// Add or replace the glyph for `id`.
    pub fn insert(&mut self, id: impl Into<String>, glyph: RuleGlyph) {
        self.table.insert(id.into(), glyph);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RuleGlyph> {
        self.table.get(id)
    }

    /// The display label for `rule`; unknown identifiers print verbatim.
    #[must_use]
    pub fn label(&self, rule: &RuleId, theme: &Theme) -> String {
        self.table
            .get(rule.as_str())
            .map_or_else(|| rule.as_str().to_owned(), |glyph| glyph.print(theme))
    }
}

impl Default for RuleLabels {
    fn default() -> Self {
        Self::sequent_calculus()
    }
}
