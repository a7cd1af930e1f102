//! Core domain types for Turnstile.
//!
//! This crate contains pure domain values with no IO and minimal dependencies:
//! propositional formulas, sequent judgements, and the derivation trees built
//! by a calculus and consumed by the renderer. Everything here is immutable
//! once constructed.

mod catalog;
mod derivation;
mod formula;
mod judgement;

pub use catalog::{Catalog, Section};
pub use derivation::{Derivation, RuleId};
pub use formula::{Formula, FormulaKind};
pub use judgement::Judgement;
