//! Gentzen's sequent calculus LK.
//!
//! Rules act on the ends of the sequent: a formula consumed or introduced in
//! the antecedent sits at its right end, one in the succedent at its left
//! end. Permutation rules move formulas to and from those positions.

use turnstile_types::{Catalog, Derivation, Formula, Judgement, Section};

use crate::{RuleError, VARIABLES, apply, same, shape};

fn join(left: &[Formula], right: &[Formula]) -> Vec<Formula> {
    [left, right].concat()
}

fn with_last(init: &[Formula], last: Formula) -> Vec<Formula> {
    let mut formulas = init.to_vec();
    formulas.push(last);
    formulas
}

fn with_first(first: Formula, rest: &[Formula]) -> Vec<Formula> {
    let mut formulas = Vec::with_capacity(rest.len() + 1);
    formulas.push(first);
    formulas.extend_from_slice(rest);
    formulas
}

/// Axiom: `A ⊢ A`.
#[must_use]
pub fn i(a: Formula) -> Derivation {
    Derivation::introduction(Judgement::new(vec![a.clone()], vec![a]), "I")
}

/// From `Γ ⊢ Δ,A` and `A,Σ ⊢ Π` infer `Γ,Σ ⊢ Δ,Π`.
pub fn cut(left: Derivation, right: Derivation) -> Result<Derivation, RuleError> {
    const NEEDS: &str = "Γ ⊢ Δ,A and A,Σ ⊢ Π";
    let [delta @ .., a] = left.result().succedent.as_slice() else {
        return Err(shape("Cut", NEEDS));
    };
    let [cut_formula, sigma @ ..] = right.result().antecedent.as_slice() else {
        return Err(shape("Cut", NEEDS));
    };
    same("Cut", a, cut_formula)?;
    let result = Judgement::new(
        join(&left.result().antecedent, sigma),
        join(delta, &right.result().succedent),
    );
    Ok(apply("Cut", result, vec![left, right]))
}

/// From `Γ,A ⊢ Δ` infer `Γ,A∧B ⊢ Δ`.
pub fn cl1(b: Formula, s: Derivation) -> Result<Derivation, RuleError> {
    let [gamma @ .., a] = s.result().antecedent.as_slice() else {
        return Err(shape("cl1", "Γ,A ⊢ Δ"));
    };
    let result = Judgement::new(
        with_last(gamma, Formula::conjunction(a.clone(), b)),
        s.result().succedent.clone(),
    );
    Ok(apply("cl1", result, vec![s]))
}

/// From `Γ,B ⊢ Δ` infer `Γ,A∧B ⊢ Δ`.
pub fn cl2(a: Formula, s: Derivation) -> Result<Derivation, RuleError> {
    let [gamma @ .., b] = s.result().antecedent.as_slice() else {
        return Err(shape("cl2", "Γ,B ⊢ Δ"));
    };
    let result = Judgement::new(
        with_last(gamma, Formula::conjunction(a, b.clone())),
        s.result().succedent.clone(),
    );
    Ok(apply("cl2", result, vec![s]))
}

/// From `Γ ⊢ A,Δ` infer `Γ ⊢ A∨B,Δ`.
pub fn dr1(b: Formula, s: Derivation) -> Result<Derivation, RuleError> {
    let [a, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("dr1", "Γ ⊢ A,Δ"));
    };
    let result = Judgement::new(
        s.result().antecedent.clone(),
        with_first(Formula::disjunction(a.clone(), b), delta),
    );
    Ok(apply("dr1", result, vec![s]))
}

/// From `Γ ⊢ B,Δ` infer `Γ ⊢ A∨B,Δ`.
pub fn dr2(a: Formula, s: Derivation) -> Result<Derivation, RuleError> {
    let [b, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("dr2", "Γ ⊢ B,Δ"));
    };
    let result = Judgement::new(
        s.result().antecedent.clone(),
        with_first(Formula::disjunction(a, b.clone()), delta),
    );
    Ok(apply("dr2", result, vec![s]))
}

/// From `Γ,A ⊢ Δ` and `Σ,B ⊢ Π` infer `Γ,Σ,A∨B ⊢ Δ,Π`.
pub fn dl(left: Derivation, right: Derivation) -> Result<Derivation, RuleError> {
    const NEEDS: &str = "Γ,A ⊢ Δ and Σ,B ⊢ Π";
    let [gamma @ .., a] = left.result().antecedent.as_slice() else {
        return Err(shape("dl", NEEDS));
    };
    let [sigma @ .., b] = right.result().antecedent.as_slice() else {
        return Err(shape("dl", NEEDS));
    };
    let result = Judgement::new(
        with_last(&join(gamma, sigma), Formula::disjunction(a.clone(), b.clone())),
        join(&left.result().succedent, &right.result().succedent),
    );
    Ok(apply("dl", result, vec![left, right]))
}

/// From `Γ ⊢ A,Δ` and `Σ ⊢ B,Π` infer `Γ,Σ ⊢ A∧B,Δ,Π`.
pub fn cr(left: Derivation, right: Derivation) -> Result<Derivation, RuleError> {
    const NEEDS: &str = "Γ ⊢ A,Δ and Σ ⊢ B,Π";
    let [a, delta @ ..] = left.result().succedent.as_slice() else {
        return Err(shape("cr", NEEDS));
    };
    let [b, pi @ ..] = right.result().succedent.as_slice() else {
        return Err(shape("cr", NEEDS));
    };
    let result = Judgement::new(
        join(&left.result().antecedent, &right.result().antecedent),
        with_first(Formula::conjunction(a.clone(), b.clone()), &join(delta, pi)),
    );
    Ok(apply("cr", result, vec![left, right]))
}

/// From `Γ ⊢ A,Δ` and `Σ,B ⊢ Π` infer `Γ,Σ,A→B ⊢ Δ,Π`.
pub fn il(left: Derivation, right: Derivation) -> Result<Derivation, RuleError> {
    const NEEDS: &str = "Γ ⊢ A,Δ and Σ,B ⊢ Π";
    let [a, delta @ ..] = left.result().succedent.as_slice() else {
        return Err(shape("il", NEEDS));
    };
    let [sigma @ .., b] = right.result().antecedent.as_slice() else {
        return Err(shape("il", NEEDS));
    };
    let result = Judgement::new(
        with_last(
            &join(&left.result().antecedent, sigma),
            Formula::implication(a.clone(), b.clone()),
        ),
        join(delta, &right.result().succedent),
    );
    Ok(apply("il", result, vec![left, right]))
}

/// From `Γ,A ⊢ B,Δ` infer `Γ ⊢ A→B,Δ`.
pub fn ir(s: Derivation) -> Result<Derivation, RuleError> {
    let (antecedent, succedent) = (&s.result().antecedent, &s.result().succedent);
    let ([gamma @ .., a], [b, delta @ ..]) = (antecedent.as_slice(), succedent.as_slice()) else {
        return Err(shape("ir", "Γ,A ⊢ B,Δ"));
    };
    let result = Judgement::new(
        gamma.to_vec(),
        with_first(Formula::implication(a.clone(), b.clone()), delta),
    );
    Ok(apply("ir", result, vec![s]))
}

/// From `Γ ⊢ A,Δ` infer `Γ,¬A ⊢ Δ`.
pub fn nl(s: Derivation) -> Result<Derivation, RuleError> {
    let [a, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("nl", "Γ ⊢ A,Δ"));
    };
    let result = Judgement::new(
        with_last(&s.result().antecedent, Formula::negation(a.clone())),
        delta.to_vec(),
    );
    Ok(apply("nl", result, vec![s]))
}

/// From `Γ,A ⊢ Δ` infer `Γ ⊢ ¬A,Δ`.
pub fn nr(s: Derivation) -> Result<Derivation, RuleError> {
    let [gamma @ .., a] = s.result().antecedent.as_slice() else {
        return Err(shape("nr", "Γ,A ⊢ Δ"));
    };
    let result = Judgement::new(
        gamma.to_vec(),
        with_first(Formula::negation(a.clone()), &s.result().succedent),
    );
    Ok(apply("nr", result, vec![s]))
}

/// Weakening: from `Γ ⊢ Δ` infer `Γ,A ⊢ Δ`.
#[must_use]
pub fn swl(a: Formula, s: Derivation) -> Derivation {
    let result = Judgement::new(
        with_last(&s.result().antecedent, a),
        s.result().succedent.clone(),
    );
    apply("swl", result, vec![s])
}

/// Weakening: from `Γ ⊢ Δ` infer `Γ ⊢ A,Δ`.
#[must_use]
pub fn swr(a: Formula, s: Derivation) -> Derivation {
    let result = Judgement::new(
        s.result().antecedent.clone(),
        with_first(a, &s.result().succedent),
    );
    apply("swr", result, vec![s])
}

/// Contraction: from `Γ,A,A ⊢ Δ` infer `Γ,A ⊢ Δ`.
pub fn scl(s: Derivation) -> Result<Derivation, RuleError> {
    let [gamma @ .., first, second] = s.result().antecedent.as_slice() else {
        return Err(shape("scl", "Γ,A,A ⊢ Δ"));
    };
    same("scl", second, first)?;
    let result = Judgement::new(
        with_last(gamma, first.clone()),
        s.result().succedent.clone(),
    );
    Ok(apply("scl", result, vec![s]))
}

/// Contraction: from `Γ ⊢ A,A,Δ` infer `Γ ⊢ A,Δ`.
pub fn scr(s: Derivation) -> Result<Derivation, RuleError> {
    let [first, second, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("scr", "Γ ⊢ A,A,Δ"));
    };
    same("scr", first, second)?;
    let result = Judgement::new(
        s.result().antecedent.clone(),
        with_first(first.clone(), delta),
    );
    Ok(apply("scr", result, vec![s]))
}

/// Rotation: from `A,Γ ⊢ Δ` infer `Γ,A ⊢ Δ`.
pub fn srotl(s: Derivation) -> Result<Derivation, RuleError> {
    let [a, gamma @ ..] = s.result().antecedent.as_slice() else {
        return Err(shape("srotl", "A,Γ ⊢ Δ"));
    };
    let result = Judgement::new(with_last(gamma, a.clone()), s.result().succedent.clone());
    Ok(apply("srotl", result, vec![s]))
}

/// Rotation: from `Γ ⊢ A,Δ` infer `Γ ⊢ Δ,A`.
pub fn srotr(s: Derivation) -> Result<Derivation, RuleError> {
    let [a, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("srotr", "Γ ⊢ A,Δ"));
    };
    let result = Judgement::new(s.result().antecedent.clone(), with_last(delta, a.clone()));
    Ok(apply("srotr", result, vec![s]))
}

/// Exchange: from `Γ,A,B ⊢ Δ` infer `Γ,B,A ⊢ Δ`.
pub fn sswpl(s: Derivation) -> Result<Derivation, RuleError> {
    let [gamma @ .., a, b] = s.result().antecedent.as_slice() else {
        return Err(shape("sswpl", "Γ,A,B ⊢ Δ"));
    };
    let result = Judgement::new(
        join(gamma, &[b.clone(), a.clone()]),
        s.result().succedent.clone(),
    );
    Ok(apply("sswpl", result, vec![s]))
}

/// Exchange: from `Γ ⊢ A,B,Δ` infer `Γ ⊢ B,A,Δ`.
pub fn sswpr(s: Derivation) -> Result<Derivation, RuleError> {
    let [a, b, delta @ ..] = s.result().succedent.as_slice() else {
        return Err(shape("sswpr", "Γ ⊢ A,B,Δ"));
    };
    let result = Judgement::new(
        s.result().antecedent.clone(),
        join(&[b.clone(), a.clone()], delta),
    );
    Ok(apply("sswpr", result, vec![s]))
}

fn atom(name: &str) -> Formula {
    Formula::atom(name)
}

/// A premise over schematic atoms.
fn sequent(antecedent: &[&str], succedent: &[&str]) -> Derivation {
    Derivation::premise(Judgement::new(
        antecedent.iter().copied().map(atom).collect(),
        succedent.iter().copied().map(atom).collect(),
    ))
}

/// The LK usage sheet: its language and one schematic instance per rule.
pub fn catalog() -> Result<Catalog, RuleError> {
    let (a, b) = (atom("A"), atom("B"));

    let propositions = vec![
        Section::new("Variables", vec![VARIABLES.into_iter().map(atom).collect()]),
        Section::new(
            "Connectives",
            vec![vec![
                Formula::negation(a.clone()),
                Formula::implication(a.clone(), b.clone()),
                Formula::conjunction(a.clone(), b.clone()),
                Formula::disjunction(a.clone(), b.clone()),
            ]],
        ),
    ];

    let rules = vec![
        Section::new("Axiom", vec![vec![i(a.clone())]]),
        Section::new(
            "Cut",
            vec![vec![cut(
                sequent(&["Γ"], &["Δ", "A"]),
                sequent(&["A", "Σ"], &["Π"]),
            )?]],
        ),
        Section::new(
            "Logical Rules",
            vec![
                vec![
                    cl1(b.clone(), sequent(&["Γ", "A"], &["Δ"]))?,
                    dr1(b.clone(), sequent(&["Γ"], &["A", "Δ"]))?,
                ],
                vec![
                    cl2(a.clone(), sequent(&["Γ", "B"], &["Δ"]))?,
                    dr2(a.clone(), sequent(&["Γ"], &["B", "Δ"]))?,
                ],
                vec![
                    dl(sequent(&["Γ", "A"], &["Δ"]), sequent(&["Σ", "B"], &["Π"]))?,
                    cr(sequent(&["Γ"], &["A", "Δ"]), sequent(&["Σ"], &["B", "Π"]))?,
                ],
                vec![
                    il(sequent(&["Γ"], &["A", "Δ"]), sequent(&["Σ", "B"], &["Π"]))?,
                    ir(sequent(&["Γ", "A"], &["B", "Δ"]))?,
                ],
                vec![
                    nl(sequent(&["Γ"], &["A", "Δ"]))?,
                    nr(sequent(&["Γ", "A"], &["Δ"]))?,
                ],
            ],
        ),
        Section::new(
            "Structural Rules",
            vec![
                vec![
                    swl(a.clone(), sequent(&["Γ"], &["Δ"])),
                    swr(a, sequent(&["Γ"], &["Δ"])),
                ],
                vec![
                    scl(sequent(&["Γ", "A", "A"], &["Δ"]))?,
                    scr(sequent(&["Γ"], &["A", "A", "Δ"]))?,
                ],
                vec![
                    srotl(sequent(&["Σ", "A"], &["Π"]))?,
                    srotr(sequent(&["Σ"], &["A", "Π"]))?,
                ],
                vec![
                    sswpl(sequent(&["Σ", "A", "B"], &["Π"]))?,
                    sswpr(sequent(&["Σ"], &["A", "B", "Π"]))?,
                ],
            ],
        ),
    ];

    Ok(Catalog {
        name: "Gentzen LK".to_owned(),
        propositions,
        rules,
    })
}

/// `⊢ (p→(q→¬p))→(p→p)`, proved by weakening the identity.
pub fn sandbox() -> Result<Derivation, RuleError> {
    let (p, q) = (atom("p"), atom("q"));
    let weakening = Formula::implication(
        p.clone(),
        Formula::implication(q, Formula::negation(p.clone())),
    );
    ir(swl(weakening, ir(i(p))?))
}
