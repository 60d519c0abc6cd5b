//! Table metadata for building column lists.
//!
//! A [`Model`] names a table and its columns; the helpers here turn that into
//! `table.column` strings for the operators. Implement it by hand or derive it:
//!
//! ```ignore
//! #[derive(sqld::Model)]
//! #[sqld(table = "pizzerias")]
//! struct Pizzeria {
//!     id: i64,
//!     #[sqld(column = "display_name")]
//!     name: String,
//! }
//!
//! sqld::select(sqld::columns_of::<Pizzeria>()); // pizzerias.id, pizzerias.display_name
//! sqld::column::<Pizzeria>("display_name");     // "pizzerias.display_name"
//! ```

use crate::error::{SqldError, SqldResult};
use crate::op::{Fragment, Op};

/// Table name and column names of a struct.
pub trait Model {
    /// Table name.
    const TABLE: &'static str;
    /// Bare column names, in field order.
    const COLUMNS: &'static [&'static str];
}

/// The table name of `M`.
pub fn table_name<M: Model>() -> &'static str {
    M::TABLE
}

/// The table name of `M`, as an operator (e.g. for [`from`](crate::from)).
pub fn table_name_op<M: Model + 'static>() -> Op {
    Op::new(|| Ok(Fragment::new(M::TABLE)))
}

/// Every column of `M`, prefixed with the table name.
pub fn columns_of<M: Model>() -> Vec<String> {
    M::COLUMNS
        .iter()
        .map(|column| format!("{}.{}", M::TABLE, column))
        .collect()
}

/// `table.column` for a column of `M`.
///
/// Returns [`SqldError::UnknownColumn`] if `M` has no such column.
pub fn column_err<M: Model>(column: &str) -> SqldResult<String> {
    if !M::COLUMNS.iter().any(|known| *known == column) {
        return Err(SqldError::unknown_column(
            column,
            std::any::type_name::<M>(),
        ));
    }
    Ok(format!("{}.{}", M::TABLE, column))
}

/// `table.column` for a column of `M`.
///
/// # Panics
/// If `M` has no such column. Use [`column_err`] for a fallible lookup.
pub fn column<M: Model>(column: &str) -> String {
    match column_err::<M>(column) {
        Ok(column) => column,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestModel;

    impl Model for TestModel {
        const TABLE: &'static str = "TestModel";
        const COLUMNS: &'static [&'static str] = &["Hi", "nameddd"];
    }

    #[test]
    fn columns_are_prefixed() {
        assert_eq!(
            columns_of::<TestModel>(),
            vec!["TestModel.Hi", "TestModel.nameddd"]
        );
    }

    #[test]
    fn table_name_as_operator() {
        assert_eq!(table_name::<TestModel>(), "TestModel");
        assert_eq!(table_name_op::<TestModel>().render().unwrap().sql, "TestModel");
    }

    #[test]
    fn column_lookup() {
        assert_eq!(column::<TestModel>("nameddd"), "TestModel.nameddd");
        assert!(column_err::<TestModel>("missing").unwrap_err().is_unknown_column());
    }

    #[test]
    #[should_panic(expected = "column missing not present in model")]
    fn column_panics_on_unknown() {
        column::<TestModel>("missing");
    }
}
