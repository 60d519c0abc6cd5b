//! Operator constructors.
//!
//! - `leaf`: literal blocks, column lists, comparisons, NULL and IN checks, sorting
//! - `logic`: AND/OR groups and NOT
//! - `section`: WHERE, HAVING, GROUP BY, ORDER BY
//! - `structure`: SELECT over operators, FROM, JOIN, aliases, COUNT/COALESCE
//!
//! Every constructor returns an [`Op`](crate::Op); nothing is rendered until
//! the root of the tree is.

mod leaf;
mod logic;
mod section;
mod structure;

pub use leaf::{
    SortOrder, all_wildcard, asc, block, column_eq, columns, desc, eq, gt, gte, ilike, in_json,
    in_list, like, limit, lt, lte, ne, not_null, null, offset, select, sort,
};
pub use logic::{Logic, and, group, not, or};
pub use section::{Section, group_by, having, order_by, section, where_};
pub use structure::{
    JoinType, as_, coalesce, count, from, inner_join, join, left_join, right_join, select_ops,
    sub_query,
};
