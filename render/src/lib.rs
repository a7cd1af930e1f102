//! Rendering of derivation trees into text diagrams.
//!
//! - **`theme`**: the glyph table formulas and rule labels are typeset with
//! - **`formula`**: precedence-aware formula and sequent printing
//! - **`labels`**: rule identifier to display label lookup
//! - **`renderer`**: the derivation walker and catalog sheets

pub mod formula;
pub mod labels;
pub mod renderer;
pub mod theme;

mod catalog;

pub use formula::{Precedence, print_formula, print_formulas, print_judgement};
pub use labels::{Connective, RuleGlyph, RuleLabels, Side};
pub use renderer::Renderer;
pub use theme::{BinaryTemplate, NullaryTemplate, Theme, ThemePreset, UnaryTemplate};

pub use turnstile_layout::{AutoWidth, Block, TreeStyle};
