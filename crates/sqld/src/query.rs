//! Query root: assembles top-level clauses and renders the final statement.

use crate::config::RenderConfig;
use crate::error::{SqldError, SqldResult};
use crate::op::{Fragment, Op, join_fragments, render_all};

/// Build a query out of its clauses, one per line.
///
/// Every clause is rendered even if an earlier one fails, so the returned
/// error lists every failing clause. Absent clauses are dropped.
///
/// ```ignore
/// let query = sqld::new([
///     sqld::select(["name", "pizzas"]),
///     sqld::block("FROM pizzerias"),
///     sqld::where_([sqld::and([
///         sqld::if_not_nil(&filters.name, sqld::eq("name", filters.name.clone())),
///         sqld::if_not_empty(&filters.pizzas, sqld::in_list("pizzas", filters.pizzas.clone())),
///     ])]),
///     sqld::order_by([sqld::if_not_nil(&filters.order_by, sqld::desc(filters.order_by.clone()))]),
/// ]);
///
/// let rendered = query.render()?;
/// ```
pub fn new(ops: impl IntoIterator<Item = Op>) -> Op {
    let ops: Vec<Op> = ops.into_iter().collect();
    Op::new(move || {
        if ops.is_empty() {
            return Err(SqldError::context("query", SqldError::NoOperators));
        }

        let fragments = render_all("query", &ops)?;
        Ok(join_fragments(fragments, "\n"))
    })
}

/// Render a root operator and apply the configured dialect once.
///
/// With the `tracing` feature and logging enabled, the outcome is emitted on
/// the `sqld.render` target.
pub fn render_with(op: &Op, config: &RenderConfig) -> SqldResult<Fragment> {
    let result = op.render().map(|fragment| fragment.prepare(config.dialect));

    #[cfg(feature = "tracing")]
    if config.logging_enabled {
        crate::trace::emit(config, &result);
    }

    result
}
