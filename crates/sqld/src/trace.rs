//! `tracing` output for rendered statements.
//!
//! Enable via the crate feature: `sqld = { features = ["tracing"] }`, then
//! turn it on per call with [`RenderConfig::enable_logging`].

use crate::config::RenderConfig;
use crate::error::SqldResult;
use crate::op::Fragment;
use tracing::Level;

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn truncate_sql(config: &RenderConfig, sql: &str) -> String {
    match config.max_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn emit(config: &RenderConfig, result: &SqldResult<Fragment>) {
    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    match result {
        Ok(fragment) => {
            let sql = truncate_sql(config, &fragment.sql);
            emit_at_level!(
                config.level,
                target: "sqld.render",
                dialect = ?config.dialect,
                param_count = fragment.params.len(),
                sql = %sql,
            );
        }
        Err(err) => {
            tracing::warn!(
                target: "sqld.render",
                dialect = ?config.dialect,
                error = %err,
                "render failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("héllo", 2), "h");
        assert_eq!(truncate_sql_bytes("hello", 10), "hello");
    }

    #[test]
    fn truncation_follows_config() {
        let config = RenderConfig::new().with_max_sql_length(6);
        assert_eq!(truncate_sql(&config, "SELECT 1"), "SELECT...");
        assert_eq!(truncate_sql(&config.no_truncate(), "SELECT 1"), "SELECT 1");
    }
}
