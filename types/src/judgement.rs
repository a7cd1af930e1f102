use serde::{Deserialize, Serialize};

use crate::Formula;

/// A sequent `antecedent ⊢ succedent`.
///
/// Both sides are ordered lists. Order and multiplicity are preserved exactly
/// as constructed: structural rules (weakening, contraction, permutation)
/// depend on duplicated and repositioned formulas staying where they were put.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgement {
    pub antecedent: Vec<Formula>,
    pub succedent: Vec<Formula>,
}

impl Judgement {
    #[must_use]
    pub fn new(antecedent: Vec<Formula>, succedent: Vec<Formula>) -> Self {
        Self {
            antecedent,
            succedent,
        }
    }

    /// A judgement with an empty antecedent asserting a single formula.
    #[must_use]
    pub fn conclusion(formula: Formula) -> Self {
        Self::new(Vec::new(), vec![formula])
    }
}

#[cfg(test)]
mod tests {
    use super::{Formula, Judgement};

    #[test]
    fn conclusion_has_empty_antecedent() {
        let j = Judgement::conclusion(Formula::atom("p"));
        assert!(j.antecedent.is_empty());
        assert_eq!(j.succedent, vec![Formula::atom("p")]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let j = Judgement::new(
            vec![Formula::atom("A"), Formula::atom("A"), Formula::atom("B")],
            vec![],
        );
        assert_eq!(j.antecedent.len(), 3);
        assert_eq!(j.antecedent[2], Formula::atom("B"));
    }
}
