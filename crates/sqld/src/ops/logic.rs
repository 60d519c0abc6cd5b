//! Boolean combinators: AND/OR groups and negation.

use crate::error::SqldError;
use crate::op::{Fragment, Op, join_fragments, render_all};

/// Boolean connective between conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }

    fn context(&self) -> &'static str {
        match self {
            Logic::And => "and",
            Logic::Or => "or",
        }
    }
}

/// Combine conditions with `logic`, wrapped in parentheses.
///
/// Absent children are skipped. When every child is absent the group is
/// absent too.
pub fn group(logic: Logic, ops: impl IntoIterator<Item = Op>) -> Op {
    let ops: Vec<Op> = ops.into_iter().collect();
    Op::new(move || {
        if ops.is_empty() {
            return Err(SqldError::context(logic.context(), SqldError::NoOperators));
        }

        let fragments = render_all(logic.context(), &ops)?;
        if fragments.is_empty() {
            return Ok(Fragment::empty());
        }

        let sep = format!(" {}\n\t", logic.as_str());
        Ok(join_fragments(fragments, &sep).map_sql(|sql| format!("(\n\t{sql}\n)")))
    })
}

/// All conditions must hold.
///
/// ```ignore
/// sqld::and([
///     sqld::if_not_nil(&filters.name, sqld::eq("name", filters.name.clone())),
///     sqld::if_not_empty(&filters.pizzas, sqld::in_list("pizzas", filters.pizzas.clone())),
/// ])
/// ```
pub fn and(ops: impl IntoIterator<Item = Op>) -> Op {
    group(Logic::And, ops)
}

/// At least one condition must hold.
pub fn or(ops: impl IntoIterator<Item = Op>) -> Op {
    group(Logic::Or, ops)
}

/// Negate a condition. Negating an absent condition leaves it absent.
pub fn not(op: Op) -> Op {
    Op::new(move || {
        let fragment = op.render().map_err(|e| SqldError::context("not", e))?;
        if fragment.is_empty() {
            return Ok(Fragment::empty());
        }
        Ok(fragment.map_sql(|sql| format!("NOT({sql})")))
    })
}
