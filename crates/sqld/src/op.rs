//! The operator contract shared by every building block.
//!
//! An operator is a zero-argument render that yields a [`Fragment`] (SQL text
//! plus the parameters it binds) or an error. Operators capture their
//! arguments when they are built and are rendered later, when the root of the
//! tree is rendered.
//!
//! An `Ok` fragment with empty SQL means the operator is absent: parents drop
//! it together with any separator that would surround it.

use crate::error::SqldResult;
use crate::param::{Param, ParamList};
use std::fmt;
use std::sync::{Arc, LazyLock};
use tokio_postgres::types::ToSql;

/// Rendered SQL text and the parameters it binds, in placeholder order.
#[derive(Clone, Debug, Default)]
pub struct Fragment {
    pub sql: String,
    pub params: ParamList,
}

impl Fragment {
    /// A fragment without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: ParamList::new(),
        }
    }

    /// A fragment carrying parameters.
    pub fn with_params(sql: impl Into<String>, params: ParamList) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// The absent fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fragment binding a single value.
    pub fn bind<T: ToSql + Send + Sync + 'static>(sql: impl Into<String>, value: T) -> Self {
        Self::bind_param(sql, Param::new(value))
    }

    pub(crate) fn bind_param(sql: impl Into<String>, param: Param) -> Self {
        let mut params = ParamList::new();
        params.push_param(param);
        Self::with_params(sql, params)
    }

    /// Whether this fragment contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.as_refs()
    }

    /// Rewrap the SQL text, keeping parameters untouched.
    pub(crate) fn map_sql(self, f: impl FnOnce(String) -> String) -> Self {
        Self {
            sql: f(self.sql),
            params: self.params,
        }
    }
}

/// Anything that can render itself into a [`Fragment`].
///
/// Closures of shape `Fn() -> SqldResult<Fragment>` implement this trait, so
/// user-defined leaves need no boilerplate (see [`custom`]).
pub trait Operator: Send + Sync {
    /// Render this operator.
    fn render(&self) -> SqldResult<Fragment>;
}

impl<F> Operator for F
where
    F: Fn() -> SqldResult<Fragment> + Send + Sync,
{
    fn render(&self) -> SqldResult<Fragment> {
        self()
    }
}

/// Shared handle to an operator.
///
/// Cloning is cheap; the operator itself is never mutated, so the same `Op` can
/// appear in several trees and be rendered any number of times.
#[derive(Clone)]
pub struct Op(Arc<dyn Operator>);

impl Op {
    /// Wrap any operator.
    pub fn new(op: impl Operator + 'static) -> Self {
        Op(Arc::new(op))
    }

    /// Render this operator.
    pub fn render(&self) -> SqldResult<Fragment> {
        self.0.render()
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Op").field(&"<dyn Operator>").finish()
    }
}

struct NoOp;

impl Operator for NoOp {
    fn render(&self) -> SqldResult<Fragment> {
        Ok(Fragment::empty())
    }
}

static NO_OP: LazyLock<Op> = LazyLock::new(|| Op::new(NoOp));

/// The absence sentinel: renders an empty fragment, binds nothing, never fails.
pub fn no_op() -> Op {
    NO_OP.clone()
}

/// Build an operator from a closure.
///
/// ```ignore
/// let now = sqld::custom(|| Ok(sqld::Fragment::new("created_at < NOW()")));
/// ```
pub fn custom<F>(f: F) -> Op
where
    F: Fn() -> SqldResult<Fragment> + Send + Sync + 'static,
{
    Op::new(f)
}

/// Children of a fan-out combinator, rendered in order.
///
/// Every child is rendered even after a failure. Failures are returned
/// together; otherwise the non-empty fragments are returned in order.
pub(crate) fn render_all(context: &str, ops: &[Op]) -> SqldResult<Vec<Fragment>> {
    let mut fragments = Vec::with_capacity(ops.len());
    let mut errors = Vec::new();

    for op in ops {
        match op.render() {
            Ok(fragment) if fragment.is_empty() => {}
            Ok(fragment) => fragments.push(fragment),
            Err(err) => errors.push(err),
        }
    }

    match crate::error::SqldError::join(context, errors) {
        Some(err) => Err(err),
        None => Ok(fragments),
    }
}

/// Join fragments with `sep`, concatenating their parameters in order.
pub(crate) fn join_fragments(fragments: Vec<Fragment>, sep: &str) -> Fragment {
    let mut sql = String::new();
    let mut params = ParamList::new();

    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            sql.push_str(sep);
        }
        sql.push_str(&fragment.sql);
        params.append(fragment.params);
    }

    Fragment::with_params(sql, params)
}
