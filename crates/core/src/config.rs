//! Engine configuration: where the chronology lives and which years it covers.
//!
//! [`ChronologyConfig::default`] carries the built-in values;
//! [`ChronologyConfig::from_env`] overrides them from `SHIJIAN_*` variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ChronologyError, Result};

pub const ENV_DB_PATH: &str = "SHIJIAN_DB_PATH";
pub const ENV_YEAR_MIN: &str = "SHIJIAN_YEAR_MIN";
pub const ENV_YEAR_MAX: &str = "SHIJIAN_YEAR_MAX";

/// Where the read-only chronology database lives and the inclusive range of
/// years lookups accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronologyConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_year_min")]
    pub year_min: i64,
    #[serde(default = "default_year_max")]
    pub year_max: i64,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("resources").join("History_Chronology.db")
}
fn default_year_min() -> i64 {
    -840
}
fn default_year_max() -> i64 {
    1912
}

impl Default for ChronologyConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            year_min: default_year_min(),
            year_max: default_year_max(),
        }
    }
}

impl ChronologyConfig {
    /// Defaults with the database at `db_path`.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `SHIJIAN_DB_PATH`, `SHIJIAN_YEAR_MIN` and
    /// `SHIJIAN_YEAR_MAX`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_YEAR_MIN) {
            config.year_min = parse_bound(ENV_YEAR_MIN, &raw)?;
        }
        if let Some(raw) = lookup(ENV_YEAR_MAX) {
            config.year_max = parse_bound(ENV_YEAR_MAX, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.year_min > self.year_max {
            return Err(ChronologyError::Config(format!(
                "year_min ({}) is greater than year_max ({})",
                self.year_min, self.year_max
            )));
        }
        Ok(())
    }

    /// Reject years outside `[year_min, year_max]`.
    pub fn check_year(&self, year: i64) -> Result<i64> {
        if year < self.year_min || year > self.year_max {
            return Err(ChronologyError::YearOutOfRange {
                year,
                min: self.year_min,
                max: self.year_max,
            });
        }
        Ok(year)
    }

    /// Parse a year typed by a reader: optional leading `-`, then ASCII digits.
    /// Surrounding whitespace is ignored. The result must be in range.
    pub fn parse_year(&self, text: &str) -> Result<i64> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChronologyError::MalformedYear(text.to_string()));
        }
        let year = trimmed
            .parse::<i64>()
            .map_err(|_| ChronologyError::MalformedYear(text.to_string()))?;
        self.check_year(year)
    }
}

fn parse_bound(key: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ChronologyError::Config(format!("{key} must be an integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_cover_gonghe_regency_to_qing_abdication() {
        let cfg = ChronologyConfig::default();
        assert_eq!(cfg.year_min, -840);
        assert_eq!(cfg.year_max, 1912);
        assert!(cfg.db_path.ends_with("History_Chronology.db"));
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = ChronologyConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/data/chronology.db"),
            (ENV_YEAR_MIN, "-2070"),
        ]))
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/data/chronology.db"));
        assert_eq!(cfg.year_min, -2070);
        assert_eq!(cfg.year_max, 1912);
    }

    #[test]
    fn env_rejects_unparsable_and_inverted_bounds() {
        let err = ChronologyConfig::from_lookup(lookup(&[(ENV_YEAR_MAX, "soon")])).unwrap_err();
        assert!(matches!(err, ChronologyError::Config(_)));

        let err = ChronologyConfig::from_lookup(lookup(&[(ENV_YEAR_MIN, "2000")])).unwrap_err();
        assert!(err.to_string().contains("greater than"));
    }

    #[test]
    fn deserializes_partial_config() {
        let cfg: ChronologyConfig = serde_json::from_str(r#"{"db_path": "x.db"}"#).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("x.db"));
        assert_eq!(cfg.year_min, -840);
    }

    #[test]
    fn check_year_is_inclusive() {
        let cfg = ChronologyConfig::default();
        assert_eq!(cfg.check_year(-840).unwrap(), -840);
        assert_eq!(cfg.check_year(1912).unwrap(), 1912);
        assert!(matches!(
            cfg.check_year(1913),
            Err(ChronologyError::YearOutOfRange { year: 1913, .. })
        ));
        assert!(cfg.check_year(-841).is_err());
    }

    #[test]
    fn parse_year_accepts_signed_integers_only() {
        let cfg = ChronologyConfig::default();
        assert_eq!(cfg.parse_year(" -221 ").unwrap(), -221);
        assert_eq!(cfg.parse_year("1644").unwrap(), 1644);
        for bad in ["", "-", "12a", "+5", "1.5", "--3", "一千"] {
            assert!(
                matches!(cfg.parse_year(bad), Err(ChronologyError::MalformedYear(_))),
                "{bad:?} should be malformed"
            );
        }
        assert!(matches!(
            cfg.parse_year("3000"),
            Err(ChronologyError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn huge_digit_strings_are_malformed_not_panics() {
        let cfg = ChronologyConfig::default();
        let err = cfg.parse_year("99999999999999999999999").unwrap_err();
        assert!(matches!(err, ChronologyError::MalformedYear(_)));
    }
}
