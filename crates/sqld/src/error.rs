//! Error types for sqld

use thiserror::Error;

/// Result type alias for rendering operators
pub type SqldResult<T> = Result<T, SqldError>;

/// Errors produced while rendering an operator tree.
///
/// Leaf operators produce the plain kinds. Combinators never swallow them:
/// a failing child is wrapped in [`SqldError::Context`] carrying the
/// combinator's name, and several failing children are collected into
/// [`SqldError::Multiple`] so every cause survives up to the root.
#[derive(Debug, Error)]
pub enum SqldError {
    /// A column list was empty
    #[error("no columns in statement")]
    MissingColumns,

    /// A combinator was built without any operator
    #[error("operations slice is empty")]
    NoOperators,

    /// A comparison received no value
    #[error("value is nil")]
    NilValue,

    /// A sort directive received no column expression
    #[error("column expression is nil")]
    NilColumnExpression,

    /// A set-membership check received no values
    #[error("slice is empty")]
    EmptySlice,

    /// A set-membership check received a value that is not a list
    #[error("argument is not a slice")]
    ArgumentNotSlice,

    /// A column lookup on a model failed
    #[error("column {column} not present in model {model}")]
    UnknownColumn { column: String, model: String },

    /// A failure wrapped with the name of the operator it passed through
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SqldError>,
    },

    /// Failures of several sibling operators, in evaluation order
    #[error("{}", join_messages(.0))]
    Multiple(Vec<SqldError>),
}

fn join_messages(errors: &[SqldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl SqldError {
    /// Wrap an error with an operator name.
    pub fn context(context: impl Into<String>, source: SqldError) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Create an unknown column error
    pub fn unknown_column(column: impl Into<String>, model: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            model: model.into(),
        }
    }

    /// Join the failures of sibling operators under one operator name.
    ///
    /// Returns `None` when `errors` is empty. A single failure is wrapped as is,
    /// several are kept together as [`SqldError::Multiple`].
    pub fn join(context: impl Into<String>, mut errors: Vec<SqldError>) -> Option<Self> {
        let source = match errors.len() {
            0 => return None,
            1 => errors.remove(0),
            _ => Self::Multiple(errors),
        };
        Some(Self::context(context, source))
    }

    /// The leaf failures behind this error, in evaluation order.
    pub fn root_causes(&self) -> Vec<&SqldError> {
        let mut out = Vec::new();
        self.collect_causes(&mut out);
        out
    }

    fn collect_causes<'a>(&'a self, out: &mut Vec<&'a SqldError>) {
        match self {
            Self::Context { source, .. } => source.collect_causes(out),
            Self::Multiple(errors) => {
                for err in errors {
                    err.collect_causes(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    fn any_cause(&self, pred: impl Fn(&SqldError) -> bool) -> bool {
        self.root_causes().into_iter().any(pred)
    }

    /// Check if any cause is a missing columns error
    pub fn is_missing_columns(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::MissingColumns))
    }

    /// Check if any cause is a missing operators error
    pub fn is_no_operators(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::NoOperators))
    }

    /// Check if any cause is a nil value error
    pub fn is_nil_value(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::NilValue))
    }

    /// Check if any cause is a nil column expression error
    pub fn is_nil_column_expression(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::NilColumnExpression))
    }

    /// Check if any cause is an empty slice error
    pub fn is_empty_slice(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::EmptySlice))
    }

    /// Check if any cause is an argument-not-slice error
    pub fn is_argument_not_slice(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::ArgumentNotSlice))
    }

    /// Check if any cause is an unknown column error
    pub fn is_unknown_column(&self) -> bool {
        self.any_cause(|e| matches!(e, Self::UnknownColumn { .. }))
    }
}
