//! Formula and sequent printing.
//!
//! Operands are parenthesized from a precedence table instead of per
//! connective special cases: each operand position declares a threshold, and
//! a child whose precedence is at or below it gets the theme's parenthesis
//! template. Other compound children get the theme's optional wrapper, and
//! atoms print bare.

use turnstile_types::{Formula, FormulaKind, Judgement};

use crate::theme::Theme;

/// Binding strength of a formula's main connective, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Implication,
    /// Conjunction and disjunction.
    Junction,
    Negation,
    /// Atoms and the nullary constants.
    Atomic,
}

impl Precedence {
    #[must_use]
    pub const fn of(kind: FormulaKind) -> Self {
        match kind {
            FormulaKind::Atom | FormulaKind::Falsum | FormulaKind::Verum => Precedence::Atomic,
            FormulaKind::Negation => Precedence::Negation,
            FormulaKind::Conjunction | FormulaKind::Disjunction => Precedence::Junction,
            FormulaKind::Implication => Precedence::Implication,
        }
    }

    /// Threshold for the operands of a connective: operands binding at most
    /// this strongly are parenthesized.
    #[must_use]
    pub const fn operand_threshold(kind: FormulaKind) -> Option<Self> {
        match kind {
            FormulaKind::Atom | FormulaKind::Falsum | FormulaKind::Verum => None,
            FormulaKind::Negation | FormulaKind::Conjunction | FormulaKind::Disjunction => {
                Some(Precedence::Junction)
            }
            FormulaKind::Implication => Some(Precedence::Implication),
        }
    }
}

fn print_operand(operand: &Formula, threshold: Precedence, theme: &Theme) -> String {
    let printed = print_formula(operand, theme);
    if Precedence::of(operand.kind()) <= threshold {
        theme.parenthesis.wrap(&printed)
    } else if operand.kind() == FormulaKind::Atom {
        printed
    } else {
        theme.optional.wrap(&printed)
    }
}

/// Print a formula on one line.
#[must_use]
pub fn print_formula(formula: &Formula, theme: &Theme) -> String {
    let threshold = Precedence::operand_threshold(formula.kind()).unwrap_or(Precedence::Atomic);
    let operand = |f: &Formula| print_operand(f, threshold, theme);

    match formula {
        Formula::Atom { value } => theme.atom.wrap(value),
        Formula::Falsum => theme.falsum.glyphs(),
        Formula::Verum => theme.verum.glyphs(),
        Formula::Negation { negand } => theme.negation.wrap(&operand(negand)),
        Formula::Conjunction { left, right } => {
            theme.conjunction.join(&operand(left), &operand(right))
        }
        Formula::Disjunction { left, right } => {
            theme.disjunction.join(&operand(left), &operand(right))
        }
        Formula::Implication {
            antecedent,
            consequent,
        } => theme
            .implication
            .join(&operand(antecedent), &operand(consequent)),
    }
}

/// Print one side of a sequent. An empty list prints as the empty string.
#[must_use]
pub fn print_formulas(formulas: &[Formula], theme: &Theme) -> String {
    let mut printed = formulas.iter().map(|f| print_formula(f, theme));
    let Some(first) = printed.next() else {
        return String::new();
    };
    printed.fold(first, |acc, next| theme.formulas.join(&acc, &next))
}

/// Print a sequent, trimmed so an empty side leaves no dangling space.
#[must_use]
pub fn print_judgement(judgement: &Judgement, theme: &Theme) -> String {
    theme
        .sequent
        .join(
            &print_formulas(&judgement.antecedent, theme),
            &print_formulas(&judgement.succedent, theme),
        )
        .trim()
        .to_owned()
}
