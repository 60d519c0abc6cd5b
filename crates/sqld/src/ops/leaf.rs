//! Leaf operators: atomic fragments that do not wrap other operators.

use crate::error::{SqldError, SqldResult};
use crate::op::{Fragment, Op};
use crate::param::Param;
use tokio_postgres::types::ToSql;

/// Literal SQL, returned unchanged. Use it for the static parts of a query.
///
/// ```ignore
/// sqld::block("FROM pizzerias p")
/// ```
pub fn block(sql: impl Into<String>) -> Op {
    let sql = sql.into();
    Op::new(move || Ok(Fragment::new(sql.clone())))
}

/// `*`
pub fn all_wildcard() -> Op {
    block("*")
}

fn column_list(columns: Vec<String>) -> SqldResult<String> {
    if columns.is_empty() {
        return Err(SqldError::MissingColumns);
    }
    Ok(columns.join(",\n\t"))
}

/// A SELECT statement over the given columns.
///
/// Fails with [`SqldError::MissingColumns`] when no column is given.
///
/// ```ignore
/// sqld::select(["name", "pizzas"])
/// ```
pub fn select<I, S>(columns: I) -> Op
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
    Op::new(move || {
        let list = column_list(columns.clone()).map_err(|e| SqldError::context("select", e))?;
        Ok(Fragment::new(format!("SELECT\n\t{list}")))
    })
}

/// A bare, comma separated column list, for use inside [`select_ops`](crate::select_ops).
pub fn columns<I, S>(columns: I) -> Op
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
    Op::new(move || {
        let list = column_list(columns.clone()).map_err(|e| SqldError::context("columns", e))?;
        Ok(Fragment::new(list))
    })
}

fn compare<T>(
    name: &'static str,
    column: impl Into<String>,
    op: &'static str,
    value: Option<T>,
) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    let column = column.into();
    let value = value.map(Param::new);
    Op::new(move || match &value {
        Some(value) => Ok(Fragment::bind_param(format!("{column} {op} ?"), value.clone())),
        None => Err(SqldError::context(
            format!("{name} ({column})"),
            SqldError::NilValue,
        )),
    })
}

/// `column = ?`
///
/// Fails with [`SqldError::NilValue`] when `value` is `None`; pair it with
/// [`if_not_nil`](crate::if_not_nil) for optional filters.
///
/// ```ignore
/// sqld::eq("name", filters.name.clone())
/// ```
pub fn eq<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("eq", column, "=", value)
}

/// `column != ?`
pub fn ne<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("ne", column, "!=", value)
}

/// `column > ?`
pub fn gt<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("gt", column, ">", value)
}

/// `column >= ?`
pub fn gte<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("gte", column, ">=", value)
}

/// `column < ?`
pub fn lt<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("lt", column, "<", value)
}

/// `column <= ?`
pub fn lte<T>(column: impl Into<String>, value: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("lte", column, "<=", value)
}

/// `column LIKE ?`
///
/// See [`fmt_contains`](crate::fmt_contains) and friends for building the pattern.
pub fn like<T>(column: impl Into<String>, pattern: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("like", column, "LIKE", pattern)
}

/// `column ILIKE ?` (case-insensitive, PostgreSQL)
pub fn ilike<T>(column: impl Into<String>, pattern: Option<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    compare("ilike", column, "ILIKE", pattern)
}

/// `column IS NULL`
pub fn null(column: impl Into<String>) -> Op {
    let sql = format!("{} IS NULL", column.into());
    Op::new(move || Ok(Fragment::new(sql.clone())))
}

/// `column IS NOT NULL`
pub fn not_null(column: impl Into<String>) -> Op {
    let sql = format!("{} IS NOT NULL", column.into());
    Op::new(move || Ok(Fragment::new(sql.clone())))
}

fn in_params(name: &'static str, column: String, values: Vec<Param>) -> SqldResult<Fragment> {
    if values.is_empty() {
        return Err(SqldError::context(
            format!("{name} ({column})"),
            SqldError::EmptySlice,
        ));
    }

    let placeholders = vec!["?"; values.len()].join(", ");
    Ok(Fragment::with_params(
        format!("{column} IN ({placeholders})"),
        values.into_iter().collect(),
    ))
}

/// `column IN (?, ?, ...)`, one placeholder per value.
///
/// Fails with [`SqldError::EmptySlice`] on an empty list; guard optional lists
/// with [`if_not_empty`](crate::if_not_empty).
///
/// ```ignore
/// sqld::in_list("pizzas", filters.pizzas.clone())
/// ```
pub fn in_list<T>(column: impl Into<String>, values: Vec<T>) -> Op
where
    T: ToSql + Send + Sync + 'static,
{
    let column = column.into();
    let values: Vec<Param> = values.into_iter().map(Param::new).collect();
    Op::new(move || in_params("in", column.clone(), values.clone()))
}

fn json_param(value: &serde_json::Value) -> Param {
    use serde_json::Value;

    match value {
        Value::Null => Param::new(None::<String>),
        Value::Bool(b) => Param::new(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Param::new(i),
            None => Param::new(n.as_f64()),
        },
        Value::String(s) => Param::new(s.clone()),
        other => Param::new(other.clone()),
    }
}

/// `column IN (?, ?, ...)` over a JSON array.
///
/// Scalars bind as native values (`bool`, `i64`, `f64`, text, NULL), nested
/// arrays and objects bind as `json`. Fails with [`SqldError::ArgumentNotSlice`]
/// when `values` is not an array and with [`SqldError::EmptySlice`] when it is
/// empty.
pub fn in_json(column: impl Into<String>, values: &serde_json::Value) -> Op {
    let column = column.into();
    let values: Option<Vec<Param>> = values
        .as_array()
        .map(|items| items.iter().map(json_param).collect());

    Op::new(move || match &values {
        Some(values) => in_params("in", column.clone(), values.clone()),
        None => Err(SqldError::context(
            format!("in ({column})"),
            SqldError::ArgumentNotSlice,
        )),
    })
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// `column ASC|DESC`
pub fn sort(order: SortOrder, column: impl Into<String>) -> Op {
    let sql = format!("{} {}", column.into(), order.as_str());
    Op::new(move || Ok(Fragment::new(sql.clone())))
}

fn sort_opt<S: Into<String>>(order: SortOrder, column: Option<S>) -> Op {
    let column: Option<String> = column.map(Into::into);
    Op::new(move || match &column {
        Some(column) => Ok(Fragment::new(format!("{column} {}", order.as_str()))),
        None => Err(SqldError::context(
            order.as_str().to_lowercase(),
            SqldError::NilColumnExpression,
        )),
    })
}

/// `column ASC`, for [`order_by`](crate::order_by).
///
/// Fails with [`SqldError::NilColumnExpression`] when `column` is `None`.
pub fn asc<S: Into<String>>(column: Option<S>) -> Op {
    sort_opt(SortOrder::Asc, column)
}

/// `column DESC`, for [`order_by`](crate::order_by).
///
/// Fails with [`SqldError::NilColumnExpression`] when `column` is `None`.
pub fn desc<S: Into<String>>(column: Option<S>) -> Op {
    sort_opt(SortOrder::Desc, column)
}

/// `first = second`, comparing two columns (typically a JOIN condition).
pub fn column_eq(first: impl Into<String>, second: impl Into<String>) -> Op {
    let sql = format!("{} = {}", first.into(), second.into());
    Op::new(move || Ok(Fragment::new(sql.clone())))
}

fn bound_clause(keyword: &'static str, value: Option<i64>) -> Op {
    Op::new(move || {
        Ok(match value {
            Some(value) => Fragment::bind(format!("{keyword} ?"), value),
            None => Fragment::empty(),
        })
    })
}

/// `LIMIT ?`, absent when `count` is `None`.
pub fn limit(count: Option<i64>) -> Op {
    bound_clause("LIMIT", count)
}

/// `OFFSET ?`, absent when `skip` is `None`.
pub fn offset(skip: Option<i64>) -> Op {
    bound_clause("OFFSET", skip)
}
