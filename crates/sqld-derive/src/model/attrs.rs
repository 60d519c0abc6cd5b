//! Attribute parsing for Model derive macro.
//!
//! Handles struct-level and field-level `#[sqld(...)]` attributes.

use syn::ext::IdentExt;
use syn::{DeriveInput, Error, LitStr, Result};

use crate::sql_ident::{parse_sql_ident_with_span, parse_table_ident};

/// Extract table name from struct-level `#[sqld(table = "...")]` attribute.
pub(super) fn get_table_name(input: &DeriveInput) -> Result<String> {
    let mut table: Option<String> = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("sqld") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let lit: LitStr = meta.value()?.parse()?;
                if table.is_some() {
                    return Err(meta.error("duplicate `table` attribute"));
                }
                table = Some(parse_table_ident(&lit)?);
                Ok(())
            } else {
                Err(meta.error("unsupported struct attribute, expected `table`"))
            }
        })?;
    }

    table.ok_or_else(|| {
        Error::new_spanned(
            &input.ident,
            "Model requires #[sqld(table = \"table_name\")] attribute",
        )
    })
}

/// Column mapping of a single field.
pub(super) enum FieldColumn {
    Column(String),
    Skip,
}

/// Resolve the column of a field: `#[sqld(column = "...")]`, `#[sqld(skip)]`,
/// or the field name.
pub(super) fn get_field_column(field: &syn::Field) -> Result<FieldColumn> {
    let mut column: Option<String> = None;
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("sqld") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                let lit: LitStr = meta.value()?.parse()?;
                column = Some(parse_sql_ident_with_span(&lit.value(), lit.span(), "column")?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `column` or `skip`"))
            }
        })?;
    }

    if skip {
        if column.is_some() {
            return Err(Error::new_spanned(
                field,
                "`skip` and `column` cannot be used together",
            ));
        }
        return Ok(FieldColumn::Skip);
    }

    match column {
        Some(column) => Ok(FieldColumn::Column(column)),
        None => {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
            let name = ident.unraw().to_string();
            parse_sql_ident_with_span(&name, ident.span(), "column").map(FieldColumn::Column)
        }
    }
}
