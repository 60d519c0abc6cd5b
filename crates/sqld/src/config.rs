//! Render configuration.

use crate::dialect::Dialect;

/// Configuration for rendering a root operator with [`render_with`](crate::render_with).
///
/// By default placeholders are kept as `?` and logging is disabled.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Placeholder syntax applied to the rendered statement.
    pub dialect: Dialect,
    /// Whether rendered statements are logged (requires the `tracing` feature).
    pub logging_enabled: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Tracing event level for successful renders.
    #[cfg(feature = "tracing")]
    pub level: tracing::Level,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Generic,
            logging_enabled: false,
            max_sql_length: Some(200),
            #[cfg(feature = "tracing")]
            level: tracing::Level::DEBUG,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for a PostgreSQL configuration.
    pub fn postgres() -> Self {
        Self::default().with_dialect(Dialect::Postgres)
    }

    /// Set the placeholder dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Enable logging of rendered statements.
    pub fn enable_logging(mut self) -> Self {
        self.logging_enabled = true;
        self
    }

    /// Disable logging of rendered statements.
    pub fn disable_logging(mut self) -> Self {
        self.logging_enabled = false;
        self
    }

    /// Override the tracing event level.
    #[cfg(feature = "tracing")]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }
}
