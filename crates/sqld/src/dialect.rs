//! Placeholder rewriting for dialects with numbered parameters.
//!
//! Operators always render the generic `?` placeholder. PostgreSQL expects
//! `$1, $2, ...` instead, so the fully rendered statement is rewritten once,
//! after composition, when the final parameter count is known.

use crate::op::Fragment;
use crate::param::ParamList;
use std::fmt::Write;

/// Target placeholder syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Keep `?` placeholders (MySQL, SQLite, named-parameter binders).
    #[default]
    Generic,
    /// Numbered `$n` placeholders.
    Postgres,
}

impl Dialect {
    /// Rewrite `query` for this dialect.
    pub fn prepare(&self, query: &str, params: &ParamList) -> String {
        match self {
            Dialect::Generic => query.to_string(),
            Dialect::Postgres => pg_prepare(query, params),
        }
    }
}

/// Swap `?` placeholders for `$1, $2, ...`, left to right.
///
/// Only the first `params.len()` placeholders are rewritten; any `?` beyond
/// that is left untouched.
pub fn pg_prepare(query: &str, params: &ParamList) -> String {
    let mut out = String::with_capacity(query.len() + params.len() * 2);
    let mut idx: usize = 0;

    for ch in query.chars() {
        if ch == '?' && idx < params.len() {
            idx += 1;
            let _ = write!(&mut out, "${idx}");
        } else {
            out.push(ch);
        }
    }
    out
}

impl Fragment {
    /// Rewrite this rendered statement's placeholders for `dialect`.
    ///
    /// Call it on the root only: it numbers placeholders from `$1`.
    pub fn prepare(self, dialect: Dialect) -> Self {
        let sql = dialect.prepare(&self.sql, &self.params);
        Self {
            sql,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize) -> ParamList {
        let mut params = ParamList::new();
        for i in 0..n {
            params.push(i as i64);
        }
        params
    }

    #[test]
    fn numbers_placeholders_in_order() {
        assert_eq!(pg_prepare("?,?,?,?", &params(4)), "$1,$2,$3,$4");
    }

    #[test]
    fn keeps_surrounding_text() {
        let query = "SELECT\n\tname\nFROM t\nWHERE (\n\tid = ? AND\n\tname IN (?, ?)\n)";
        assert_eq!(
            pg_prepare(query, &params(3)),
            "SELECT\n\tname\nFROM t\nWHERE (\n\tid = $1 AND\n\tname IN ($2, $3)\n)"
        );
    }

    #[test]
    fn stops_after_param_count() {
        assert_eq!(pg_prepare("a = ? AND b = ?", &params(1)), "a = $1 AND b = ?");
    }

    #[test]
    fn double_digit_indices() {
        let query = vec!["?"; 11].join(" ");
        let prepared = pg_prepare(&query, &params(11));
        assert!(prepared.ends_with("$10 $11"));
    }

    #[test]
    fn generic_dialect_is_identity() {
        assert_eq!(Dialect::Generic.prepare("id = ?", &params(1)), "id = ?");
    }

    #[test]
    fn fragment_prepare_keeps_params() {
        let fragment = Fragment::bind("id = ?", 42_i64).prepare(Dialect::Postgres);
        assert_eq!(fragment.sql, "id = $1");
        assert_eq!(fragment.params.len(), 1);
    }
}
