//! Convenient imports for typical `sqld` usage.
//!
//! Operator constructors are meant to be called with the `sqld::` prefix
//! (`sqld::and`, `sqld::where_`, ...); the prelude only brings in the types:
//!
//! ```ignore
//! use sqld::prelude::*;
//! ```

pub use crate::{
    Dialect, Fragment, Model, Op, Operator, ParamList, RenderConfig, SqldError, SqldResult,
};
