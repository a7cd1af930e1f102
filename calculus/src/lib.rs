//! Proof calculi that build derivation trees.
//!
//! Each calculus module exposes one constructor per rule. A constructor takes
//! the premise derivations (and any side formulas the rule introduces),
//! computes the conclusion sequent, and returns a new transformation node.
//! Constructors check the shape of their premises and the identity of the
//! formulas a rule requires to coincide; they do not check anything else.
//!
//! Every calculus also publishes a usage [`Catalog`] and a sandbox derivation.

use std::fmt;

use thiserror::Error;
use tracing::trace;
use turnstile_types::{Catalog, Derivation, Formula, Judgement};

pub mod la3;
pub mod lk;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A premise lacks the formula positions the rule consumes.
    #[error("rule {rule} needs a premise of the form {needs}")]
    Shape {
        rule: &'static str,
        needs: &'static str,
    },
    /// Two formulas the rule requires to be identical differ.
    #[error("rule {rule} needs identical formulas: expected {expected:?}, found {found:?}")]
    Mismatch {
        rule: &'static str,
        expected: Formula,
        found: Formula,
    },
}

/// Propositional variables shown on every usage sheet.
pub(crate) const VARIABLES: [&str; 6] = ["p", "q", "r", "s", "t", "u"];

pub(crate) fn shape(rule: &'static str, needs: &'static str) -> RuleError {
    RuleError::Shape { rule, needs }
}

pub(crate) fn same(
    rule: &'static str,
    expected: &Formula,
    found: &Formula,
) -> Result<(), RuleError> {
    if expected == found {
        Ok(())
    } else {
        Err(RuleError::Mismatch {
            rule,
            expected: expected.clone(),
            found: found.clone(),
        })
    }
}

pub(crate) fn apply(rule: &'static str, result: Judgement, deps: Vec<Derivation>) -> Derivation {
    trace!(
        rule,
        premises = deps.len(),
        antecedent = result.antecedent.len(),
        succedent = result.succedent.len(),
        "applied rule"
    );
    Derivation::transformation(result, deps, rule)
}

/// The calculi this crate knows, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calculus {
    /// Gentzen's classical sequent calculus.
    Lk,
    /// Łukasiewicz's third axiom system with modus ponens.
    La3,
}

impl Calculus {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Calculus::Lk => "lk",
            Calculus::La3 => "la3",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Calculus] {
        &[Calculus::Lk, Calculus::La3]
    }

    pub fn catalog(self) -> Result<Catalog, RuleError> {
        match self {
            Calculus::Lk => lk::catalog(),
            Calculus::La3 => la3::catalog(),
        }
    }

    pub fn sandbox(self) -> Result<Derivation, RuleError> {
        match self {
            Calculus::Lk => lk::sandbox(),
            Calculus::La3 => la3::sandbox(),
        }
    }
}

impl fmt::Display for Calculus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::{Calculus, RuleError};
    use turnstile_types::Formula;

    #[test]
    fn displays_as_subcommand_name() {
        assert_eq!(Calculus::Lk.to_string(), "lk");
        assert_eq!(Calculus::La3.to_string(), "la3");
    }

    #[test]
    fn every_calculus_builds_its_catalog_and_sandbox() {
        for calculus in Calculus::all() {
            let catalog = calculus.catalog().unwrap();
            assert!(!catalog.rules.is_empty());
            assert!(calculus.sandbox().unwrap().node_count() > 1);
        }
    }

    #[test]
    fn errors_name_the_rule() {
        let shape = RuleError::Shape {
            rule: "ir",
            needs: "Γ,A ⊢ B,Δ",
        };
        assert_eq!(shape.to_string(), "rule ir needs a premise of the form Γ,A ⊢ B,Δ");

        let mismatch = RuleError::Mismatch {
            rule: "MP",
            expected: Formula::atom("p"),
            found: Formula::atom("q"),
        };
        assert!(mismatch.to_string().starts_with("rule MP needs identical formulas"));
    }
}
