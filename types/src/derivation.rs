//! Derivation trees.
//!
//! A derivation is built bottom-up, once, by a calculus's rule constructors
//! and is never mutated afterwards. Every node exclusively owns its
//! dependencies, so the structure is always a finite tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Judgement;

/// Opaque identifier of the rule justifying a transformation.
///
/// The renderer maps known identifiers to theme glyphs and prints any other
/// identifier verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of a derivation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derivation {
    /// An assumed judgement with no justification.
    Premise { result: Judgement },
    /// A rule application. Zero dependencies makes it an axiom instance.
    Transformation {
        result: Judgement,
        rule: RuleId,
        deps: Vec<Derivation>,
    },
}

impl Derivation {
    #[must_use]
    pub fn premise(result: Judgement) -> Self {
        Derivation::Premise { result }
    }

    #[must_use]
    pub fn transformation(
        result: Judgement,
        deps: Vec<Derivation>,
        rule: impl Into<RuleId>,
    ) -> Self {
        Derivation::Transformation {
            result,
            rule: rule.into(),
            deps,
        }
    }

    /// A transformation with no dependencies.
    #[must_use]
    pub fn introduction(result: Judgement, rule: impl Into<RuleId>) -> Self {
        Self::transformation(result, Vec::new(), rule)
    }

    #[must_use]
    pub fn result(&self) -> &Judgement {
        match self {
            Derivation::Premise { result } | Derivation::Transformation { result, .. } => result,
        }
    }

    #[must_use]
    pub fn rule(&self) -> Option<&RuleId> {
        match self {
            Derivation::Premise { .. } => None,
            Derivation::Transformation { rule, .. } => Some(rule),
        }
    }

    #[must_use]
    pub fn deps(&self) -> &[Derivation] {
        match self {
            Derivation::Premise { .. } => &[],
            Derivation::Transformation { deps, .. } => deps,
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.deps().len()
    }

    /// Number of nodes in the tree, counted without recursion.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.deps());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::{Derivation, RuleId};
    use crate::{Formula, Judgement};

    fn leaf(name: &str) -> Derivation {
        Derivation::premise(Judgement::conclusion(Formula::atom(name)))
    }

    #[test]
    fn premise_has_no_rule_or_deps() {
        let p = leaf("p");
        assert!(p.rule().is_none());
        assert_eq!(p.arity(), 0);
    }

    #[test]
    fn introduction_is_a_nullary_transformation() {
        let ax = Derivation::introduction(Judgement::conclusion(Formula::atom("p")), "A1");
        assert_eq!(ax.rule(), Some(&RuleId::new("A1")));
        assert_eq!(ax.arity(), 0);
        assert!(matches!(ax, Derivation::Transformation { .. }));
    }

    #[test]
    fn node_count_covers_all_levels() {
        let inner = Derivation::transformation(
            Judgement::conclusion(Formula::atom("q")),
            vec![leaf("a"), leaf("b")],
            "r",
        );
        let root = Derivation::transformation(
            Judgement::conclusion(Formula::atom("s")),
            vec![inner, leaf("c")],
            "r",
        );
        assert_eq!(root.node_count(), 5);
        assert_eq!(root.deps()[0].arity(), 2);
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = serde_json::json!({
            "kind": "transformation",
            "rule": "MP",
            "result": { "antecedent": [], "succedent": [{ "kind": "atom", "value": "q" }] },
            "deps": [
                { "kind": "premise", "result": { "antecedent": [], "succedent": [{ "kind": "verum" }] } }
            ]
        });
        let node: Derivation = serde_json::from_value(json).unwrap();
        assert_eq!(node.rule().map(RuleId::as_str), Some("MP"));
        assert_eq!(node.deps()[0].result().succedent, vec![Formula::verum()]);
    }
}
