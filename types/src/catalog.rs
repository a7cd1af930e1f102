//! Usage catalogs: the reference sheet a calculus publishes about itself.

use crate::{Derivation, Formula};

/// A titled group of example rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub title: String,
    pub rows: Vec<Vec<T>>,
}

impl<T> Section<T> {
    #[must_use]
    pub fn new(title: impl Into<String>, rows: Vec<Vec<T>>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// Name, language, and rules of a calculus, by example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub name: String,
    pub propositions: Vec<Section<Formula>>,
    pub rules: Vec<Section<Derivation>>,
}
