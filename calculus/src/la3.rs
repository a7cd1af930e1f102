//! Łukasiewicz's third axiom system.
//!
//! The language has negation and implication only; conjunction and
//! disjunction are abbreviations. Every judgement is a conclusion with an
//! empty antecedent, and modus ponens is the only rule of inference.

use turnstile_types::{Catalog, Derivation, Formula, Judgement, Section};

use crate::{RuleError, VARIABLES, apply, same, shape};

/// `A ∨ B` abbreviates `¬A → B`.
#[must_use]
pub fn disjunction(a: Formula, b: Formula) -> Formula {
    Formula::implication(Formula::negation(a), b)
}

/// `A ∧ B` abbreviates `¬(A → ¬B)`.
#[must_use]
pub fn conjunction(a: Formula, b: Formula) -> Formula {
    Formula::negation(Formula::implication(a, Formula::negation(b)))
}

fn implies(antecedent: Formula, consequent: Formula) -> Formula {
    Formula::implication(antecedent, consequent)
}

/// `⊢ P→(Q→P)`
#[must_use]
pub fn a1(p: Formula, q: Formula) -> Derivation {
    let axiom = implies(p.clone(), implies(q, p));
    Derivation::introduction(Judgement::conclusion(axiom), "A1")
}

/// `⊢ (P→(Q→R))→((P→Q)→(P→R))`
#[must_use]
pub fn a2(p: Formula, q: Formula, r: Formula) -> Derivation {
    let axiom = implies(
        implies(p.clone(), implies(q.clone(), r.clone())),
        implies(implies(p.clone(), q), implies(p, r)),
    );
    Derivation::introduction(Judgement::conclusion(axiom), "A2")
}

/// `⊢ (¬P→¬Q)→(Q→P)`
#[must_use]
pub fn a3(p: Formula, q: Formula) -> Derivation {
    let axiom = implies(
        implies(Formula::negation(p.clone()), Formula::negation(q.clone())),
        implies(q, p),
    );
    Derivation::introduction(Judgement::conclusion(axiom), "A3")
}

/// Modus ponens: from `⊢ A→C` and `⊢ A` infer `⊢ C`.
///
/// The antecedent of the major premise must be syntactically identical to
/// the minor premise's formula.
pub fn mp(major: Derivation, minor: Derivation) -> Result<Derivation, RuleError> {
    const NEEDS: &str = "⊢ A→C and ⊢ A";
    let Some((antecedent, consequent)) = major
        .result()
        .succedent
        .first()
        .and_then(Formula::as_implication)
    else {
        return Err(shape("MP", NEEDS));
    };
    let Some(a) = minor.result().succedent.first() else {
        return Err(shape("MP", NEEDS));
    };
    same("MP", antecedent, a)?;
    let result = Judgement::conclusion(consequent.clone());
    Ok(apply("MP", result, vec![major, minor]))
}

/// The A3 usage sheet.
pub fn catalog() -> Result<Catalog, RuleError> {
    let atom = Formula::atom;
    let (a, b, c) = (atom("A"), atom("B"), atom("C"));

    let propositions = vec![
        Section::new("Variables", vec![VARIABLES.into_iter().map(atom).collect()]),
        Section::new(
            "Connectives",
            vec![vec![
                Formula::negation(a.clone()),
                implies(a.clone(), b.clone()),
            ]],
        ),
    ];

    let modus_ponens = mp(
        Derivation::premise(Judgement::conclusion(implies(a.clone(), b.clone()))),
        Derivation::premise(Judgement::conclusion(a.clone())),
    )?;
    let rules = vec![
        Section::new(
            "Axioms",
            vec![vec![
                a1(a.clone(), b.clone()),
                a2(a.clone(), b.clone(), c),
                a3(a, b),
            ]],
        ),
        Section::new("Rule", vec![vec![modus_ponens]]),
    ];

    Ok(Catalog {
        name: "Łukasiewicz Axioms 3".to_owned(),
        propositions,
        rules,
    })
}

/// `⊢ (p→(q→¬p))→(p→p)`, one modus ponens away from two axioms.
pub fn sandbox() -> Result<Derivation, RuleError> {
    let p = Formula::atom("p");
    let q = implies(Formula::atom("q"), Formula::negation(p.clone()));
    mp(a2(p.clone(), q.clone(), p.clone()), a1(p, q))
}
