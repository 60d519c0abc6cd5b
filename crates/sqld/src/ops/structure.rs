//! Structural combinators: SELECT over operators, FROM, JOIN, aliases and
//! wrapping functions.

use crate::error::SqldError;
use crate::op::{Fragment, Op, join_fragments, render_all};

/// A SELECT statement over arbitrary operators (columns, aliases, aggregates).
///
/// Absent children are skipped; if nothing is left the statement fails with
/// [`SqldError::MissingColumns`].
///
/// ```ignore
/// sqld::select_ops([
///     sqld::columns(["p.name", "p.city"]),
///     sqld::as_(sqld::count(sqld::block("o.id")), "orders"),
/// ])
/// ```
pub fn select_ops(ops: impl IntoIterator<Item = Op>) -> Op {
    let ops: Vec<Op> = ops.into_iter().collect();
    Op::new(move || {
        if ops.is_empty() {
            return Err(SqldError::context("select", SqldError::NoOperators));
        }

        let fragments = render_all("select", &ops)?;
        if fragments.is_empty() {
            return Err(SqldError::context("select", SqldError::MissingColumns));
        }

        Ok(join_fragments(fragments, ",\n\t").map_sql(|sql| format!("SELECT\n\t{sql}")))
    })
}

/// Rewrap the SQL of `op`. An absent `op` stays absent.
fn wrap(
    context: &'static str,
    op: Op,
    f: impl Fn(String) -> String + Send + Sync + 'static,
) -> Op {
    Op::new(move || {
        let fragment = op.render().map_err(|e| SqldError::context(context, e))?;
        if fragment.is_empty() {
            return Ok(Fragment::empty());
        }
        Ok(fragment.map_sql(&f))
    })
}

/// `FROM <op>`
pub fn from(op: Op) -> Op {
    wrap("from", op, |sql| format!("FROM {sql}"))
}

/// `<op> AS alias`
pub fn as_(op: Op, alias: impl Into<String>) -> Op {
    let alias = alias.into();
    wrap("as", op, move |sql| format!("{sql} AS {alias}"))
}

/// A parenthesized subquery with an alias.
pub fn sub_query(op: Op, alias: impl Into<String>) -> Op {
    let alias = alias.into();
    wrap("subquery", op, move |sql| format!("(\n{sql}\n) AS {alias}"))
}

/// `COUNT(<op>)`
pub fn count(op: Op) -> Op {
    wrap("count", op, |sql| format!("COUNT({sql})"))
}

/// `COALESCE(<op>, fallback)`
pub fn coalesce(op: Op, fallback: impl Into<String>) -> Op {
    let fallback = fallback.into();
    wrap("coalesce", op, move |sql| format!("COALESCE({sql}, {fallback})"))
}

/// JOIN kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Left,
    Right,
    Inner,
    Cross,
    Full,
    LeftOuter,
    RightOuter,
    InnerOuter,
    CrossOuter,
    FullOuter,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Inner => "INNER",
            JoinType::Cross => "CROSS",
            JoinType::Full => "FULL",
            JoinType::LeftOuter => "LEFT OUTER",
            JoinType::RightOuter => "RIGHT OUTER",
            JoinType::InnerOuter => "INNER OUTER",
            JoinType::CrossOuter => "CROSS OUTER",
            JoinType::FullOuter => "FULL OUTER",
        }
    }
}

/// `<KIND> JOIN subject ON condition`
///
/// Parameters of `subject` come before those of `condition`. An absent
/// condition drops the `ON` part (e.g. for CROSS JOIN); an absent subject
/// drops the whole join.
pub fn join(join_type: JoinType, subject: Op, condition: Op) -> Op {
    let context = format!("{} join", join_type.as_str().to_lowercase());
    Op::new(move || match (subject.render(), condition.render()) {
        (Ok(subject), Ok(_)) if subject.is_empty() => Ok(Fragment::empty()),
        (Ok(subject), Ok(condition)) => {
            let mut parts = vec![subject];
            if !condition.is_empty() {
                parts.push(condition);
            }
            let on = join_fragments(parts, " ON ");
            Ok(on.map_sql(|sql| format!("{} JOIN {sql}", join_type.as_str())))
        }
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(SqldError::context(context.clone(), err)),
        (Err(subject), Err(condition)) => Err(SqldError::context(
            context.clone(),
            SqldError::Multiple(vec![subject, condition]),
        )),
    })
}

/// `LEFT JOIN subject ON condition`
pub fn left_join(subject: Op, condition: Op) -> Op {
    join(JoinType::Left, subject, condition)
}

/// `RIGHT JOIN subject ON condition`
pub fn right_join(subject: Op, condition: Op) -> Op {
    join(JoinType::Right, subject, condition)
}

/// `INNER JOIN subject ON condition`
pub fn inner_join(subject: Op, condition: Op) -> Op {
    join(JoinType::Inner, subject, condition)
}
