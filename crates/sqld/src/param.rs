//! Bind parameters collected while rendering.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bind value.
///
/// Operators capture their values once, at construction time, and hand out
/// cheap clones on every render, so rendering the same operator twice yields
/// the same parameters.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `ToSql` requires `Debug`, so the bound value itself is printable.
        std::fmt::Debug::fmt(&*self.0, f)
    }
}

/// Ordered parameters of a rendered fragment.
///
/// Order is positional: the n-th parameter binds the n-th `?` of the SQL text.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter and return its 1-based index.
    pub fn push<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> usize {
        self.params.push(Param::new(value));
        self.params.len()
    }

    /// Add a pre-wrapped Param and return its 1-based index.
    pub fn push_param(&mut self, param: Param) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in bind order.
    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.params.iter()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Move another list's parameters to the end of this one.
    pub fn append(&mut self, other: ParamList) {
        self.params.extend(other.params);
    }
}

impl FromIterator<Param> for ParamList {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_one_based_index() {
        let mut params = ParamList::new();
        assert_eq!(params.push(1_i64), 1);
        assert_eq!(params.push("x"), 2);
        assert_eq!(params.len(), 2);
        assert_eq!(params.as_refs().len(), 2);
    }

    #[test]
    fn debug_shows_bound_values() {
        let mut params = ParamList::new();
        params.push(42_i64);
        params.push("margherita".to_string());

        let shown: Vec<String> = params.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(shown, vec!["42", "\"margherita\""]);
    }

    #[test]
    fn append_preserves_order() {
        let mut left = ParamList::new();
        left.push(1_i32);
        let mut right = ParamList::new();
        right.push(2_i32);
        right.push(3_i32);

        left.append(right);
        let shown: Vec<String> = left.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(shown, vec!["1", "2", "3"]);
    }
}
