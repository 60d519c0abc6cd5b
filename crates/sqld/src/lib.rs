//! # sqld
//!
//! Composable operators for building dynamic, parameterized SQL.
//!
//! ## Features
//!
//! - **Operators, not strings**: every clause is an [`Op`] that renders SQL text
//!   together with the values it binds
//! - **Dynamic by construction**: conditionals such as [`if_not_nil`] swap an
//!   operator for the [`no_op`], and every parent drops absent children along
//!   with their separators
//! - **Ordered parameters**: values are collected left to right, matching the
//!   `?` placeholders; [`pg_prepare`] numbers them for PostgreSQL
//! - **Every error surfaces**: combinators render all children and report all
//!   failures, each wrapped with the operator it came through
//!
//! ## Example
//!
//! ```ignore
//! struct Filters {
//!     name: Option<String>,
//!     pizzas: Vec<String>,
//!     order_by: Option<String>,
//! }
//!
//! fn pizzerias(filters: &Filters) -> sqld::Op {
//!     sqld::new([
//!         sqld::select(["name", "pizzas"]),
//!         sqld::block("FROM pizzerias"),
//!         sqld::where_([sqld::and([
//!             sqld::if_not_nil(&filters.name, sqld::eq("name", filters.name.clone())),
//!             sqld::if_not_empty(&filters.pizzas, sqld::in_list("pizzas", filters.pizzas.clone())),
//!         ])]),
//!         sqld::order_by([
//!             sqld::if_not_nil(&filters.order_by, sqld::desc(filters.order_by.clone())),
//!         ]),
//!     ])
//! }
//!
//! let stmt = sqld::render_with(&pizzerias(&filters), &sqld::RenderConfig::postgres())?;
//! let rows = client.query(&stmt.sql, &stmt.params_ref()).await?;
//! ```

pub mod cond;
pub mod config;
pub mod dialect;
pub mod error;
pub mod model;
pub mod op;
pub mod ops;
pub mod param;
pub mod pattern;
pub mod prelude;
pub mod query;

#[cfg(feature = "tracing")]
mod trace;

pub use cond::{
    if_, if_else, if_empty, if_empty_else, if_nil, if_nil_else, if_not_empty, if_not_empty_else,
    if_not_nil, if_not_nil_else, if_not_zero, if_not_zero_else, if_zero, if_zero_else,
};
pub use config::RenderConfig;
pub use dialect::{Dialect, pg_prepare};
pub use error::{SqldError, SqldResult};
pub use model::{Model, column, column_err, columns_of, table_name, table_name_op};
pub use op::{Fragment, Op, Operator, custom, no_op};
pub use ops::*;
pub use param::{Param, ParamList};
pub use pattern::{LikePattern, fmt_contains, fmt_ends_with, fmt_starts_with};
pub use query::{new, render_with};

#[cfg(feature = "derive")]
pub use sqld_derive::Model;
