//! Declarative style rules handed to the retained surface
//!
//! A rule block is a selector plus an ordered list of declarations. Rule
//! lists are built fresh by pure composer functions and concatenated by
//! the orchestrator; later blocks may add declarations, none ever removes
//! one. The whole description is rebuilt on every paint.

use std::fmt;

/// A single `property: value` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// A selector scope with its declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
}

impl RuleBlock {
    /// Start a rule scoped to the annotation's box element
    pub fn host() -> Self {
        Self {
            selector: ":host",
            declarations: vec![],
        }
    }

    /// Append a declaration
    pub fn decl(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property,
            value: value.into(),
        });
        self
    }

    /// Append a pixel-valued declaration
    pub fn px(self, property: &'static str, value: f64) -> Self {
        self.decl(property, format!("{}px", value))
    }

    /// Whether any declaration uses the given property
    pub fn declares(&self, property: &str) -> bool {
        self.declarations.iter().any(|d| d.property == property)
    }
}

impl fmt::Display for RuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {};", decl.property, decl.value)?;
        }
        write!(f, "}}")
    }
}

/// Render a rule list to its CSS text form
pub fn render_css(blocks: &[RuleBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
