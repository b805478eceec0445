//! Table configuration that hosts can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when the host does not pick a page size.
    pub per_page: usize,

    /// Trailing rows folded into the last page instead of starting a new one.
    pub orphans: usize,

    /// Whether page 1 of an empty table is a valid (empty) page.
    pub allow_empty_first_page: bool,

    /// Upper bound for any requested page size.
    pub max_per_page: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            per_page: 25,
            orphans: 0,
            allow_empty_first_page: true,
            max_per_page: 1000,
        }
    }
}

impl TableConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `TABULA_PER_PAGE`: rows per page
    /// - `TABULA_ORPHANS`: orphan rows absorbed by the last page
    /// - `TABULA_ALLOW_EMPTY_FIRST_PAGE`: `true`/`false`
    /// - `TABULA_MAX_PER_PAGE`: largest accepted page size
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = get("TABULA_PER_PAGE").and_then(|s| s.trim().parse::<usize>().ok()) {
            cfg.per_page = v;
        }

        if let Some(v) = get("TABULA_ORPHANS").and_then(|s| s.trim().parse::<usize>().ok()) {
            cfg.orphans = v;
        }

        if let Some(v) = get("TABULA_ALLOW_EMPTY_FIRST_PAGE").and_then(|s| parse_bool(&s)) {
            cfg.allow_empty_first_page = v;
        }

        if let Some(v) = get("TABULA_MAX_PER_PAGE").and_then(|s| s.trim().parse::<usize>().ok()) {
            cfg.max_per_page = v;
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(CoreError::Config("per_page must be positive".into()));
        }
        if self.per_page > self.max_per_page {
            return Err(CoreError::Config(format!(
                "per_page {} exceeds max_per_page {}",
                self.per_page, self.max_per_page
            )));
        }
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("TABULA_PER_PAGE", "10"),
            ("TABULA_ORPHANS", "not-a-number"),
            ("TABULA_ALLOW_EMPTY_FIRST_PAGE", "off"),
        ]
        .into_iter()
        .collect();
        let cfg = TableConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.per_page, 10);
        assert_eq!(cfg.orphans, 0);
        assert!(!cfg.allow_empty_first_page);
        assert_eq!(cfg.max_per_page, 1000);
    }

    #[test]
    fn validate_rejects_zero_and_oversized_pages() {
        let mut cfg = TableConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.per_page = 0;
        assert!(cfg.validate().is_err());
        cfg.per_page = 5000;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: TableConfig = serde_json::from_str(r#"{"per_page": 50}"#).unwrap();
        assert_eq!(cfg.per_page, 50);
        assert!(cfg.allow_empty_first_page);
    }
}
