//! LIKE pattern helpers.
//!
//! Each helper wraps the value with `%` wildcards, except when the value is
//! empty or `None`: those are returned untouched so that
//! [`if_not_zero`](crate::if_not_zero) / [`if_not_nil`](crate::if_not_nil)
//! still see them as unset.
//!
//! ```ignore
//! let name = sqld::fmt_contains(filters.name.clone());
//! sqld::if_not_nil(&name, sqld::ilike("name", name.clone()))
//! ```

/// A value that can be turned into a LIKE pattern.
pub trait LikePattern: Sized {
    /// Apply `f` to the text, unless it is empty or missing.
    fn map_pattern(self, f: impl FnOnce(&str) -> String) -> Self;
}

impl LikePattern for String {
    fn map_pattern(self, f: impl FnOnce(&str) -> String) -> Self {
        if self.is_empty() { self } else { f(&self) }
    }
}

impl LikePattern for Option<String> {
    fn map_pattern(self, f: impl FnOnce(&str) -> String) -> Self {
        self.map(|s| s.map_pattern(f))
    }
}

/// `value%`
pub fn fmt_starts_with<P: LikePattern>(val: P) -> P {
    val.map_pattern(|s| format!("{s}%"))
}

/// `%value`
pub fn fmt_ends_with<P: LikePattern>(val: P) -> P {
    val.map_pattern(|s| format!("%{s}"))
}

/// `%value%`
pub fn fmt_contains<P: LikePattern>(val: P) -> P {
    val.map_pattern(|s| format!("%{s}%"))
}
