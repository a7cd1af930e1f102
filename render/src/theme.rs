//! Symbol themes.
//!
//! A theme maps every template identifier to the literal text it is typeset
//! with. Nullary templates are a single glyph, unary templates wrap their
//! operand in a prefix and suffix, and binary templates place an infix
//! between two operands (with an optional prefix and suffix around both).
//!
//! Templates deserialize from arrays so themes can be written in TOML:
//!
//! ```toml
//! falsum = ["_|_"]
//! negation = ["~", ""]
//! conjunction = ["", " & ", ""]
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String,)")]
pub struct NullaryTemplate {
    pub glyph: String,
}

impl NullaryTemplate {
    #[must_use]
    pub fn new(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_owned(),
        }
    }

    #[must_use]
    pub fn glyphs(&self) -> String {
        self.glyph.clone()
    }
}

impl From<(String,)> for NullaryTemplate {
    fn from((glyph,): (String,)) -> Self {
        Self { glyph }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct UnaryTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl UnaryTemplate {
    #[must_use]
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    #[must_use]
    pub fn wrap(&self, operand: &str) -> String {
        format!("{}{operand}{}", self.prefix, self.suffix)
    }

    /// Every literal part of the template, concatenated.
    #[must_use]
    pub fn glyphs(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }
}

impl From<(String, String)> for UnaryTemplate {
    fn from((prefix, suffix): (String, String)) -> Self {
        Self { prefix, suffix }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, String)")]
pub struct BinaryTemplate {
    pub prefix: String,
    pub infix: String,
    pub suffix: String,
}

impl BinaryTemplate {
    #[must_use]
    pub fn new(prefix: &str, infix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            infix: infix.to_owned(),
            suffix: suffix.to_owned(),
        }
    }

    #[must_use]
    pub fn join(&self, left: &str, right: &str) -> String {
        format!("{}{left}{}{right}{}", self.prefix, self.infix, self.suffix)
    }

    /// Every literal part of the template, concatenated.
    #[must_use]
    pub fn glyphs(&self) -> String {
        format!("{}{}{}", self.prefix, self.infix, self.suffix)
    }
}

impl From<(String, String, String)> for BinaryTemplate {
    fn from((prefix, infix, suffix): (String, String, String)) -> Self {
        Self {
            prefix,
            infix,
            suffix,
        }
    }
}

/// The full glyph table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub falsum: NullaryTemplate,
    pub verum: NullaryTemplate,
    pub atom: UnaryTemplate,
    /// Wrapper for compound operands that do not need parentheses.
    pub optional: UnaryTemplate,
    pub parenthesis: UnaryTemplate,
    pub negation: UnaryTemplate,
    pub conjunction: BinaryTemplate,
    pub disjunction: BinaryTemplate,
    pub implication: BinaryTemplate,
    /// Separator for the formulas on one side of a sequent.
    pub formulas: BinaryTemplate,
    pub sequent: BinaryTemplate,
}

impl Theme {
    /// Conventional logic symbols.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            falsum: NullaryTemplate::new("⊥"),
            verum: NullaryTemplate::new("⊤"),
            atom: UnaryTemplate::new("", ""),
            optional: UnaryTemplate::new("", ""),
            parenthesis: UnaryTemplate::new("(", ")"),
            negation: UnaryTemplate::new("¬", ""),
            conjunction: BinaryTemplate::new("", "∧", ""),
            disjunction: BinaryTemplate::new("", "∨", ""),
            implication: BinaryTemplate::new("", "→", ""),
            formulas: BinaryTemplate::new("", ",", ""),
            sequent: BinaryTemplate::new("", " ⊢ ", ""),
        }
    }

    /// Plain ASCII symbols for terminals without the logic glyphs.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            falsum: NullaryTemplate::new("_|_"),
            verum: NullaryTemplate::new("T"),
            atom: UnaryTemplate::new("", ""),
            optional: UnaryTemplate::new("", ""),
            parenthesis: UnaryTemplate::new("(", ")"),
            negation: UnaryTemplate::new("~", ""),
            conjunction: BinaryTemplate::new("", "&", ""),
            disjunction: BinaryTemplate::new("", "|", ""),
            implication: BinaryTemplate::new("", "->", ""),
            formulas: BinaryTemplate::new("", ",", ""),
            sequent: BinaryTemplate::new("", " |- ", ""),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::basic()
    }
}

/// Built-in themes, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    #[default]
    Basic,
    Ascii,
}

impl ThemePreset {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "unicode" => Some(ThemePreset::Basic),
            "ascii" => Some(ThemePreset::Ascii),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ThemePreset::Basic => "basic",
            ThemePreset::Ascii => "ascii",
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemePreset::Basic => Theme::basic(),
            ThemePreset::Ascii => Theme::ascii(),
        }
    }

    #[must_use]
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Basic, ThemePreset::Ascii]
    }
}
