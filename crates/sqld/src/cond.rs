//! Conditionals: pick one of two operators based on a runtime predicate.
//!
//! The predicate is checked when the tree is built; the chosen operator is
//! returned as is and rendered later with the rest of the tree. Pairing a real
//! operator with [`no_op`] is how optional filters disappear from a query:
//!
//! ```ignore
//! sqld::if_not_nil(&filters.name, sqld::eq("name", filters.name.clone()))
//! ```

use crate::op::{Op, no_op};

/// `when_true` if `pred` holds, `when_false` otherwise.
pub fn if_else(pred: bool, when_true: Op, when_false: Op) -> Op {
    if pred { when_true } else { when_false }
}

/// `op` if `pred` holds, the no-op otherwise.
pub fn if_(pred: bool, op: Op) -> Op {
    if_else(pred, op, no_op())
}

pub fn if_nil_else<T>(val: &Option<T>, when_true: Op, when_false: Op) -> Op {
    if_else(val.is_none(), when_true, when_false)
}

pub fn if_not_nil_else<T>(val: &Option<T>, when_true: Op, when_false: Op) -> Op {
    if_else(val.is_some(), when_true, when_false)
}

pub fn if_nil<T>(val: &Option<T>, op: Op) -> Op {
    if_nil_else(val, op, no_op())
}

/// `op` if `val` is set.
pub fn if_not_nil<T>(val: &Option<T>, op: Op) -> Op {
    if_not_nil_else(val, op, no_op())
}

pub fn if_empty_else<T>(vals: &[T], when_true: Op, when_false: Op) -> Op {
    if_else(vals.is_empty(), when_true, when_false)
}

pub fn if_not_empty_else<T>(vals: &[T], when_true: Op, when_false: Op) -> Op {
    if_else(!vals.is_empty(), when_true, when_false)
}

pub fn if_empty<T>(vals: &[T], op: Op) -> Op {
    if_empty_else(vals, op, no_op())
}

/// `op` if `vals` has at least one element.
pub fn if_not_empty<T>(vals: &[T], op: Op) -> Op {
    if_not_empty_else(vals, op, no_op())
}

fn is_zero<T: Default + PartialEq>(val: &T) -> bool {
    *val == T::default()
}

pub fn if_zero_else<T: Default + PartialEq>(val: &T, when_true: Op, when_false: Op) -> Op {
    if_else(is_zero(val), when_true, when_false)
}

pub fn if_not_zero_else<T: Default + PartialEq>(val: &T, when_true: Op, when_false: Op) -> Op {
    if_else(!is_zero(val), when_true, when_false)
}

pub fn if_zero<T: Default + PartialEq>(val: &T, op: Op) -> Op {
    if_zero_else(val, op, no_op())
}

/// `op` if `val` differs from its type's default (`0`, `""`, `false`, ...).
pub fn if_not_zero<T: Default + PartialEq>(val: &T, op: Op) -> Op {
    if_not_zero_else(val, op, no_op())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Fragment;
    use crate::{block, eq};

    fn sql(op: &Op) -> String {
        op.render().unwrap().sql
    }

    #[test]
    fn if_else_selects_without_rendering() {
        // The unchosen branch would fail if rendered.
        let failing = eq::<i64>("id", None);
        let op = if_else(true, block("a"), failing.clone());
        assert_eq!(sql(&op), "a");

        let op = if_else(false, failing, block("b"));
        assert_eq!(sql(&op), "b");
    }

    #[test]
    fn if_false_is_absent() {
        let op = if_(false, block("a"));
        let fragment = op.render().unwrap();
        assert!(fragment.is_empty());
        assert!(fragment.params.is_empty());
    }

    #[test]
    fn nil_checks() {
        let some = Some(1_i64);
        let none: Option<i64> = None;

        assert_eq!(sql(&if_not_nil(&some, block("x"))), "x");
        assert_eq!(sql(&if_not_nil(&none, block("x"))), "");
        assert_eq!(sql(&if_nil(&none, block("x"))), "x");
        assert_eq!(sql(&if_nil(&some, block("x"))), "");
        assert_eq!(sql(&if_nil_else(&some, block("x"), block("y"))), "y");
        assert_eq!(sql(&if_not_nil_else(&none, block("x"), block("y"))), "y");
    }

    #[test]
    fn empty_checks() {
        let full = vec!["margherita"];
        let empty: Vec<&str> = Vec::new();

        assert_eq!(sql(&if_not_empty(&full, block("x"))), "x");
        assert_eq!(sql(&if_not_empty(&empty, block("x"))), "");
        assert_eq!(sql(&if_empty(&empty, block("x"))), "x");
        assert_eq!(sql(&if_empty_else(&full, block("x"), block("y"))), "y");
        assert_eq!(sql(&if_not_empty_else(&empty, block("x"), block("y"))), "y");
    }

    #[test]
    fn zero_checks() {
        assert_eq!(sql(&if_not_zero(&0_i32, block("x"))), "");
        assert_eq!(sql(&if_not_zero(&7_i32, block("x"))), "x");
        assert_eq!(sql(&if_not_zero(&String::new(), block("x"))), "");
        assert_eq!(sql(&if_zero(&false, block("x"))), "x");
        assert_eq!(sql(&if_zero_else(&1.5_f64, block("x"), block("y"))), "y");
        assert_eq!(sql(&if_not_zero_else(&0_u8, block("x"), block("y"))), "y");
    }

    #[test]
    fn no_op_is_absent() {
        let fragment: Fragment = no_op().render().unwrap();
        assert!(fragment.is_empty());
        assert!(fragment.params.is_empty());
    }
}
