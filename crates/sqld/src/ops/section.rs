//! Clause sections: WHERE, HAVING, GROUP BY and ORDER BY.
//!
//! A section whose children are all absent is absent itself, so a query whose
//! optional filters are all unset simply has no WHERE clause.

use crate::error::SqldError;
use crate::op::{Fragment, Op, join_fragments, render_all};

/// A clause keyword together with the separator between its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Where,
    Having,
    GroupBy,
    OrderBy,
}

impl Section {
    pub fn keyword(&self) -> &'static str {
        match self {
            Section::Where => "WHERE",
            Section::Having => "HAVING",
            Section::GroupBy => "GROUP BY",
            Section::OrderBy => "ORDER BY",
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            // Conditions are expected to be combined with and/or already.
            Section::Where | Section::Having => "\n\t",
            Section::GroupBy | Section::OrderBy => ",\n\t",
        }
    }

    fn context(&self) -> &'static str {
        match self {
            Section::Where => "where",
            Section::Having => "having",
            Section::GroupBy => "group by",
            Section::OrderBy => "order by",
        }
    }
}

/// Render `ops` as the given clause.
pub fn section(section: Section, ops: impl IntoIterator<Item = Op>) -> Op {
    let ops: Vec<Op> = ops.into_iter().collect();
    Op::new(move || {
        if ops.is_empty() {
            return Err(SqldError::context(section.context(), SqldError::NoOperators));
        }

        let fragments = render_all(section.context(), &ops)?;
        if fragments.is_empty() {
            return Ok(Fragment::empty());
        }

        Ok(join_fragments(fragments, section.separator())
            .map_sql(|sql| format!("{} {sql}", section.keyword())))
    })
}

/// WHERE clause.
///
/// ```ignore
/// sqld::where_([sqld::and([
///     sqld::if_not_nil(&filters.name, sqld::eq("name", filters.name.clone())),
/// ])])
/// ```
pub fn where_(ops: impl IntoIterator<Item = Op>) -> Op {
    section(Section::Where, ops)
}

/// HAVING clause.
pub fn having(ops: impl IntoIterator<Item = Op>) -> Op {
    section(Section::Having, ops)
}

/// GROUP BY clause.
pub fn group_by(ops: impl IntoIterator<Item = Op>) -> Op {
    section(Section::GroupBy, ops)
}

/// ORDER BY clause.
///
/// ```ignore
/// sqld::order_by([sqld::if_not_nil(&filters.order_by, sqld::desc(filters.order_by.clone()))])
/// ```
pub fn order_by(ops: impl IntoIterator<Item = Op>) -> Op {
    section(Section::OrderBy, ops)
}
