use proc_macro2::Span;
use syn::{Error, LitStr, Result};

pub(crate) fn is_valid_sql_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Table names may be schema-qualified (`public.pizzerias`).
pub(crate) fn is_valid_table_ident(s: &str) -> bool {
    let mut parts = s.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => is_valid_sql_ident(name),
        (Some(schema), Some(name), None) => is_valid_sql_ident(schema) && is_valid_sql_ident(name),
        _ => false,
    }
}

pub(crate) fn parse_table_ident(lit: &LitStr) -> Result<String> {
    let s = lit.value();
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::new(lit.span(), "table must not be empty"));
    }
    if !is_valid_table_ident(s) {
        return Err(Error::new(
            lit.span(),
            "table must be a valid SQL identifier, optionally schema-qualified (expected [A-Za-z_][A-Za-z0-9_]*)",
        ));
    }
    Ok(s.to_string())
}

pub(crate) fn parse_sql_ident_with_span(s: &str, span: Span, what: &str) -> Result<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::new(span, format!("{what} must not be empty")));
    }
    if !is_valid_sql_ident(s) {
        return Err(Error::new(
            span,
            format!("{what} must be a valid SQL identifier (expected [A-Za-z_][A-Za-z0-9_]*)"),
        ));
    }
    Ok(s.to_string())
}
