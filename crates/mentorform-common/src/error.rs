//! Error kinds surfaced by the compiler.
//!
//! Every variant names the offending identifier so a caller can point a
//! checklist author at the exact section or question that failed, without
//! needing to walk a causal chain back through the lowering passes.

use std::fmt;

/// The single error type threaded through parsing, validation, and lowering.
///
/// The four variants mirror the four failure kinds a checklist author can
/// trigger: a malformed checklist/section/question, a scoring-rule string
/// that doesn't parse or doesn't fit its question's kind, a rule list with
/// no terminal `else`, and an internal expression-assembly bug.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    /// A checklist, section, or question violates a structural invariant
    /// (empty mapping, id prefix mismatch, wrong sub-question count, ...).
    #[error("invalid metadata for `{id}`: {detail}")]
    InvalidMetadata { id: String, detail: String },

    /// A scoring-rule string failed to tokenize or parse, or a rule's
    /// syntactic form doesn't match its question's kind.
    #[error("scoring rule for `{question_id}` is invalid: {detail}")]
    MetadataExpressionSyntaxError { question_id: String, detail: String },

    /// Fewer than two rules were given for a question and no outer `else`
    /// expression was supplied to terminate the chain.
    #[error("`{question_id}` has a rule set with no terminal else")]
    InvalidRuleSet { question_id: String },

    /// A programmer-level assembly bug: an expression constructor was
    /// invoked with a missing or ill-typed operand.
    #[error("invalid expression: {detail}")]
    InvalidExpression { detail: String },
}

impl CoreError {
    pub fn invalid_metadata(id: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::InvalidMetadata {
            id: id.into(),
            detail: detail.to_string(),
        }
    }

    pub fn rule_syntax(question_id: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::MetadataExpressionSyntaxError {
            question_id: question_id.into(),
            detail: detail.to_string(),
        }
    }

    pub fn invalid_rule_set(question_id: impl Into<String>) -> Self {
        Self::InvalidRuleSet {
            question_id: question_id.into(),
        }
    }

    pub fn invalid_expression(detail: impl fmt::Display) -> Self {
        Self::InvalidExpression {
            detail: detail.to_string(),
        }
    }

    /// The identifier this error names, when it names exactly one.
    pub fn offending_id(&self) -> Option<&str> {
        match self {
            Self::InvalidMetadata { id, .. } => Some(id),
            Self::MetadataExpressionSyntaxError { question_id, .. } => Some(question_id),
            Self::InvalidRuleSet { question_id } => Some(question_id),
            Self::InvalidExpression { .. } => None,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
