//! Propositional formulas.

use serde::{Deserialize, Serialize};

/// A propositional formula.
///
/// Formulas are compared syntactically: two formulas are equal iff they were
/// built from the same connectives over the same atoms in the same order.
/// Rule constructors rely on this when they require two positions of a
/// sequent to hold the same formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    Atom {
        value: String,
    },
    Falsum,
    Verum,
    Negation {
        negand: Box<Formula>,
    },
    Conjunction {
        left: Box<Formula>,
        right: Box<Formula>,
    },
    Disjunction {
        left: Box<Formula>,
        right: Box<Formula>,
    },
    Implication {
        antecedent: Box<Formula>,
        consequent: Box<Formula>,
    },
}

/// Payload-free discriminant of a [`Formula`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaKind {
    Atom,
    Falsum,
    Verum,
    Negation,
    Conjunction,
    Disjunction,
    Implication,
}

impl Formula {
    #[must_use]
    pub fn atom(value: impl Into<String>) -> Self {
        Formula::Atom {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn falsum() -> Self {
        Formula::Falsum
    }

    #[must_use]
    pub fn verum() -> Self {
        Formula::Verum
    }

    #[must_use]
    pub fn negation(negand: Formula) -> Self {
        Formula::Negation {
            negand: Box::new(negand),
        }
    }

    #[must_use]
    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Formula::Disjunction {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn implication(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implication {
            antecedent: Box::new(antecedent),
            consequent: Box::new(consequent),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FormulaKind {
        match self {
            Formula::Atom { .. } => FormulaKind::Atom,
            Formula::Falsum => FormulaKind::Falsum,
            Formula::Verum => FormulaKind::Verum,
            Formula::Negation { .. } => FormulaKind::Negation,
            Formula::Conjunction { .. } => FormulaKind::Conjunction,
            Formula::Disjunction { .. } => FormulaKind::Disjunction,
            Formula::Implication { .. } => FormulaKind::Implication,
        }
    }

    /// The antecedent and consequent, if this is an implication.
    #[must_use]
    pub fn as_implication(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Implication {
                antecedent,
                consequent,
            } => Some((antecedent, consequent)),
            _ => None,
        }
    }
}
