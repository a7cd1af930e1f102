//! Derivation walker.

use tracing::debug;
use turnstile_layout::{Block, TreeStyle};
use turnstile_types::{Derivation, Formula, Judgement, RuleId};

use crate::formula::{print_formula, print_judgement};
use crate::labels::RuleLabels;
use crate::theme::Theme;

/// Everything needed to turn a derivation into a diagram.
///
/// Rendering is a pure function of the renderer and the tree: the same inputs
/// always produce identical blocks, and every well-formed tree renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    pub theme: Theme,
    pub style: TreeStyle,
    pub labels: RuleLabels,
}

enum Step<'a> {
    Visit(&'a Derivation),
    Combine {
        result: &'a Judgement,
        rule: &'a RuleId,
        arity: usize,
    },
}

impl Renderer {
    #[must_use]
    pub fn new(theme: Theme, style: TreeStyle, labels: RuleLabels) -> Self {
        Self {
            theme,
            style,
            labels,
        }
    }

    #[must_use]
    pub fn formula(&self, formula: &Formula) -> Block {
        Block::from(print_formula(formula, &self.theme))
    }

    #[must_use]
    pub fn judgement(&self, judgement: &Judgement) -> Block {
        Block::from(print_judgement(judgement, &self.theme))
    }

    /// The rule annotation printed beside a rule line: `(label)`.
    #[must_use]
    pub fn rule_note(&self, rule: &RuleId) -> Block {
        Block::from(format!("({})", self.labels.label(rule, &self.theme)))
    }

    /// Render a derivation tree.
    ///
    /// A premise is its one-line judgement. A transformation is an
    /// auto-width tree of its judgement over its rendered dependencies,
    /// annotated with its rule note.
    ///
    /// The walk is post-order over an explicit stack, so tree depth is not
    /// limited by the thread's stack size.
    #[must_use]
    pub fn render(&self, root: &Derivation) -> Block {
        let mut steps = vec![Step::Visit(root)];
        let mut rendered: Vec<Block> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Derivation::Premise { result }) => {
                    rendered.push(self.judgement(result));
                }
                Step::Visit(Derivation::Transformation { result, rule, deps }) => {
                    steps.push(Step::Combine {
                        result,
                        rule,
                        arity: deps.len(),
                    });
                    steps.extend(deps.iter().rev().map(Step::Visit));
                }
                Step::Combine {
                    result,
                    rule,
                    arity,
                } => {
                    let branches = rendered.split_off(rendered.len() - arity);
                    let block = self.style.tree_auto(
                        &self.judgement(result),
                        &branches,
                        &self.rule_note(rule),
                    );
                    rendered.push(block);
                }
            }
        }

        let block = rendered.pop().unwrap_or_default();
        debug!(
            nodes = root.node_count(),
            width = block.width(),
            height = block.height(),
            "rendered derivation"
        );
        block
    }
}
