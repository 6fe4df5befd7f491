//! Shijian: query engine over a read-only Chinese historical chronology.
//!
//! Each record is one year of one reign: the AD year, its sexagenary
//! (干支) name, the dynasty and regime, the ruler, and the era name with the
//! year's ordinal inside it. Readers look records up by exact year, by a
//! free-text keyword, or by a multi-field [`AdvancedQuery`]. Keywords are
//! searched in both Simplified and Traditional script.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use shijian::{ChronologyConfig, ChronologyRepository};
//!
//! let config = ChronologyConfig::with_db_path("resources/History_Chronology.db");
//! let repo = ChronologyRepository::open(config).unwrap();
//!
//! // Every reign counting -221 BC
//! let entries = repo.lookup_by_year(-221).unwrap();
//!
//! // Finds rows stored as 汉武帝 or 漢武帝
//! let hits = repo.search_free_text("漢武帝").unwrap();
//!
//! repo.close().unwrap();
//! ```

mod config;
mod entry;
mod keyword;
mod query;
mod script;
mod script_tables;

pub use config::{ChronologyConfig, ENV_DB_PATH, ENV_YEAR_MAX, ENV_YEAR_MIN};
pub use entry::{Column, HistoryEntry, NaturalKey, TABLE};
pub use keyword::split_keyword;
pub use query::{AdvancedQuery, Order, Predicate};
pub use script::{expand_variants, ConversionError, ScriptConverter, TableConverter, VariantSet};

use std::collections::HashSet;

use rusqlite::{params_from_iter, Connection, OpenFlags};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ChronologyError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i64, min: i64, max: i64 },
    #[error("malformed year: {0:?}")]
    MalformedYear(String),
    #[error("search keyword is empty")]
    EmptyKeyword,
    #[error("configuration error: {0}")]
    Config(String),
}

impl ChronologyError {
    /// Rejected input, as opposed to a storage or setup failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChronologyError::YearOutOfRange { .. }
                | ChronologyError::MalformedYear(_)
                | ChronologyError::EmptyKeyword
        )
    }
}

pub type Result<T> = std::result::Result<T, ChronologyError>;

// ---------------------------------------------------------------------------
// ChronologyRepository
// ---------------------------------------------------------------------------

/// Read-only handle on the chronology database.
///
/// Owns a single SQLite connection opened with read-only flags plus the script
/// converter used for keyword expansion. All operations are synchronous. The
/// connection is released by [`close`](ChronologyRepository::close) or on drop.
pub struct ChronologyRepository<C = TableConverter> {
    conn: Connection,
    converter: C,
    config: ChronologyConfig,
}

impl ChronologyRepository {
    /// Open the database named by `config` with the built-in conversion tables.
    pub fn open(config: ChronologyConfig) -> Result<Self> {
        Self::open_with_converter(config, TableConverter::new())
    }
}

impl<C: ScriptConverter> ChronologyRepository<C> {
    /// Open the database named by `config`, expanding keywords with `converter`.
    ///
    /// Fails with [`ChronologyError::Storage`] when the file cannot be opened
    /// and with [`ChronologyError::Schema`] when it does not hold a complete
    /// `history_chronology` table.
    pub fn open_with_converter(config: ChronologyConfig, converter: C) -> Result<Self> {
        config.validate()?;
        let conn = Connection::open_with_flags(
            &config.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        check_schema(&conn)?;
        info!(
            path = %config.db_path.display(),
            year_min = config.year_min,
            year_max = config.year_max,
            "opened chronology"
        );
        Ok(Self {
            conn,
            converter,
            config,
        })
    }

    pub fn config(&self) -> &ChronologyConfig {
        &self.config
    }

    /// Every entry whose AD year is `year`, ordered by regnal year.
    ///
    /// Years outside the configured range are rejected before any query runs.
    pub fn lookup_by_year(&self, year: i64) -> Result<Vec<HistoryEntry>> {
        let year = self.config.check_year(year)?;
        self.fetch(&Predicate::year_equals(year), Order::Regnal)
    }

    /// Entries whose text columns contain `keyword` in either script.
    ///
    /// A compound period label is searched part by part. Each part's matches
    /// are appended in (year, regnal year) order, skipping entries whose
    /// [`NaturalKey`] has already been returned.
    pub fn search_free_text(&self, keyword: &str) -> Result<Vec<HistoryEntry>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ChronologyError::EmptyKeyword);
        }

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        for part in split_keyword(keyword) {
            let variants = expand_variants(&self.converter, part);
            let predicate = Predicate::any_text_contains(&variants);
            for entry in self.fetch(&predicate, Order::YearThenRegnal)? {
                if seen.insert(entry.natural_key()) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    /// Entries matching every supplied filter, ordered by year then regnal
    /// year. With no filters this is the whole chronology. An inverted year
    /// range matches nothing.
    pub fn advanced_query(&self, query: &AdvancedQuery) -> Result<Vec<HistoryEntry>> {
        if let Some(from) = query.year_from {
            self.config.check_year(from)?;
        }
        if let Some(to) = query.year_to {
            self.config.check_year(to)?;
        }
        let predicate = Predicate::advanced(query, &self.converter);
        self.fetch(&predicate, Order::YearThenRegnal)
    }

    /// Release the connection, reporting any failure to close it.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| ChronologyError::Storage(err))?;
        debug!("closed chronology");
        Ok(())
    }

    fn fetch(&self, predicate: &Predicate, order: Order) -> Result<Vec<HistoryEntry>> {
        let sql = predicate.select_sql(order);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let entries = stmt
            .query_map(params_from_iter(predicate.params()), HistoryEntry::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(
            params = predicate.params().len(),
            rows = entries.len(),
            "chronology query"
        );
        Ok(entries)
    }
}

impl<C> std::fmt::Debug for ChronologyRepository<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChronologyRepository")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Require `history_chronology` with all eight columns.
fn check_schema(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({TABLE})"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<HashSet<String>>>()?;

    if present.is_empty() {
        return Err(ChronologyError::Schema(format!("table {TABLE} not found")));
    }
    let missing: Vec<&str> = Column::ALL
        .into_iter()
        .map(Column::sql_name)
        .filter(|name| !present.contains(*name))
        .collect();
    if !missing.is_empty() {
        return Err(ChronologyError::Schema(format!(
            "table {TABLE} is missing columns: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::tests::FailingConverter;
    use tempfile::NamedTempFile;

    type Row = (
        i64,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        Option<i64>,
    );

    const ROWS: &[Row] = &[
        (-770, "辛未", "東周", "春秋", "周平王", "姬宜臼", "", Some(1)),
        (-722, "己未", "東周", "春秋", "周平王", "姬宜臼", "", Some(49)),
        (-722, "己未", "春秋", "鲁", "鲁隐公", "姬息姑", "", Some(1)),
        (-475, "丙寅", "东周", "战国", "周元王", "姬仁", "", Some(2)),
        (-221, "庚辰", "秦", "秦", "秦始皇", "嬴政", "", Some(26)),
        (-220, "辛巳", "秦", "秦", "秦始皇", "嬴政", "", Some(27)),
        (-140, "辛丑", "西汉", "西汉", "汉武帝", "刘彻", "建元", Some(1)),
        (1, "辛酉", "西汉", "西汉", "汉平帝", "刘衎", "元始", Some(1)),
        (1, "辛酉", "西漢", "西漢", "汉平帝", "劉衎", "元始", None),
        (1644, "甲申", "清", "清", "清世祖", "爱新觉罗·福临", "顺治", Some(1)),
        (1644, "甲申", "明", "南明", "明安宗", "朱由崧", "崇祯", Some(17)),
    ];

    fn write_fixture(file: &NamedTempFile, rows: &[Row]) {
        let conn = Connection::open(file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE history_chronology (
                公元 INTEGER, 干支 TEXT, 时期 TEXT, 政权 TEXT,
                帝号 TEXT, 帝名 TEXT, 年号 TEXT, 年份 INTEGER
            )",
        )
        .unwrap();
        for row in rows {
            conn.execute(
                "INSERT INTO history_chronology VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![row.0, row.1, row.2, row.3, row.4, row.5, row.6, row.7],
            )
            .unwrap();
        }
    }

    fn open_fixture() -> (ChronologyRepository, NamedTempFile) {
        let file = NamedTempFile::new().unwrap();
        write_fixture(&file, ROWS);
        let repo = ChronologyRepository::open(ChronologyConfig::with_db_path(file.path())).unwrap();
        (repo, file)
    }

    fn years(entries: &[HistoryEntry]) -> Vec<(i64, &str)> {
        entries
            .iter()
            .map(|e| (e.year_ad(), e.emperor_title()))
            .collect()
    }

    #[test]
    fn lookup_by_year_returns_only_that_year() {
        let (repo, _tmp) = open_fixture();
        let entries = repo.lookup_by_year(-221).unwrap();
        assert_eq!(entries.len(), 1);
        let qin = &entries[0];
        assert_eq!(qin.ganzhi(), "庚辰");
        assert_eq!(qin.period(), "秦");
        assert_eq!(qin.emperor_title(), "秦始皇");
        assert_eq!(qin.reign_title(), "");
        assert_eq!(qin.regnal_year(), Some(26));
    }

    #[test]
    fn lookup_by_year_orders_by_regnal_year_with_absent_first() {
        let (repo, _tmp) = open_fixture();
        let entries = repo.lookup_by_year(1644).unwrap();
        let regnal: Vec<Option<i64>> = entries.iter().map(|e| e.regnal_year()).collect();
        assert_eq!(regnal, vec![Some(1), Some(17)]);

        let entries = repo.lookup_by_year(1).unwrap();
        let regnal: Vec<Option<i64>> = entries.iter().map(|e| e.regnal_year()).collect();
        assert_eq!(regnal, vec![None, Some(1)]);
    }

    #[test]
    fn lookup_of_empty_year_is_not_an_error() {
        let (repo, _tmp) = open_fixture();
        assert!(repo.lookup_by_year(1900).unwrap().is_empty());
    }

    #[test]
    fn lookup_rejects_years_outside_configured_range() {
        let (repo, _tmp) = open_fixture();
        let err = repo.lookup_by_year(1913).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            ChronologyError::YearOutOfRange {
                year: 1913,
                min: -840,
                max: 1912
            }
        ));
        assert!(repo.lookup_by_year(-841).is_err());
    }

    #[test]
    fn search_finds_ruler_exactly_once() {
        let (repo, _tmp) = open_fixture();
        let hits = repo.search_free_text("秦始皇").unwrap();
        assert_eq!(years(&hits), vec![(-221, "秦始皇"), (-220, "秦始皇")]);
    }

    #[test]
    fn search_matches_across_scripts() {
        let (repo, _tmp) = open_fixture();
        let simplified = repo.search_free_text("汉武帝").unwrap();
        let traditional = repo.search_free_text("漢武帝").unwrap();
        assert_eq!(simplified, traditional);
        assert_eq!(years(&simplified), vec![(-140, "汉武帝")]);

        // Stored in Traditional, typed in Simplified.
        let hits = repo.search_free_text("西汉").unwrap();
        assert!(hits.iter().any(|e| e.period() == "西漢"));
    }

    #[test]
    fn search_finds_traditional_names_from_either_script() {
        let file = NamedTempFile::new().unwrap();
        write_fixture(
            &file,
            &[
                (-618, "癸卯", "東周", "春秋", "周頃王", "姬壬臣", "", Some(1)),
                (909, "己巳", "五代十國", "閩", "閩太祖", "王審知", "開平", Some(3)),
                (924, "甲申", "五代十國", "荊南", "荊南武信王", "高季興", "同光", Some(2)),
            ],
        );
        let repo = ChronologyRepository::open(ChronologyConfig::with_db_path(file.path())).unwrap();

        for (simplified, traditional) in [
            ("闽", "閩"),
            ("荆南", "荊南"),
            ("周顷王", "周頃王"),
            ("王审知", "王審知"),
        ] {
            let hits = repo.search_free_text(simplified).unwrap();
            assert_eq!(hits.len(), 1, "{simplified} should find one entry");
            assert_eq!(hits, repo.search_free_text(traditional).unwrap());
        }
    }

    #[test]
    fn search_drops_entries_sharing_a_natural_key() {
        let (repo, _tmp) = open_fixture();
        let hits = repo.search_free_text("汉平帝").unwrap();
        assert_eq!(hits.len(), 1);
        // NULL regnal year sorts first, so that row is the one kept.
        assert_eq!(hits[0].regnal_year(), None);

        let mut keys = HashSet::new();
        for entry in repo.search_free_text("西").unwrap() {
            assert!(keys.insert(entry.natural_key()), "duplicate {entry}");
        }
    }

    #[test]
    fn compound_label_appends_novel_matches_of_later_parts() {
        let (repo, _tmp) = open_fixture();
        let hits = repo.search_free_text("东周（春秋）").unwrap();
        assert_eq!(
            years(&hits),
            vec![
                (-770, "周平王"),
                (-722, "周平王"),
                (-475, "周元王"),
                (-722, "鲁隐公"),
            ]
        );
        assert_eq!(repo.search_free_text("東周(春秋)").unwrap(), hits);
    }

    #[test]
    fn search_is_deterministic() {
        let (repo, _tmp) = open_fixture();
        let first = repo.search_free_text("东周（战国）").unwrap();
        let second = repo.search_free_text("东周（战国）").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let (repo, _tmp) = open_fixture();
        assert!(repo.search_free_text("%").unwrap().is_empty());
        assert!(repo.search_free_text("_").unwrap().is_empty());
        assert!(repo.search_free_text("秦_皇").unwrap().is_empty());
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let (repo, _tmp) = open_fixture();
        for blank in ["", "   ", "\t"] {
            let err = repo.search_free_text(blank).unwrap_err();
            assert!(matches!(err, ChronologyError::EmptyKeyword));
            assert!(err.is_validation());
        }
    }

    #[test]
    fn failing_converter_degrades_to_typed_form() {
        let file = NamedTempFile::new().unwrap();
        write_fixture(&file, ROWS);
        let repo = ChronologyRepository::open_with_converter(
            ChronologyConfig::with_db_path(file.path()),
            FailingConverter,
        )
        .unwrap();

        assert_eq!(years(&repo.search_free_text("汉武帝").unwrap()), vec![(-140, "汉武帝")]);
        assert!(repo.search_free_text("漢武帝").unwrap().is_empty());
    }

    #[test]
    fn unfiltered_advanced_query_returns_everything_in_order() {
        let (repo, _tmp) = open_fixture();
        let all = repo.advanced_query(&AdvancedQuery::default()).unwrap();
        assert_eq!(all.len(), ROWS.len());
        for pair in all.windows(2) {
            let a = (pair[0].year_ad(), pair[0].regnal_year());
            let b = (pair[1].year_ad(), pair[1].regnal_year());
            assert!(a <= b, "{a:?} sorted after {b:?}");
        }
    }

    #[test]
    fn inverted_year_range_is_empty() {
        let (repo, _tmp) = open_fixture();
        let query = AdvancedQuery {
            year_from: Some(100),
            year_to: Some(50),
            ..AdvancedQuery::default()
        };
        assert!(repo.advanced_query(&query).unwrap().is_empty());
    }

    #[test]
    fn advanced_query_combines_range_and_fields() {
        let (repo, _tmp) = open_fixture();
        let query = AdvancedQuery {
            year_from: Some(-800),
            year_to: Some(-700),
            period: Some("东周（春秋）".to_string()),
            ..AdvancedQuery::default()
        };
        let hits = repo.advanced_query(&query).unwrap();
        assert_eq!(
            years(&hits),
            vec![(-770, "周平王"), (-722, "鲁隐公"), (-722, "周平王")]
        );

        let query = AdvancedQuery {
            regime: Some("南明".to_string()),
            reign_title: Some("崇禎".to_string()),
            ..AdvancedQuery::default()
        };
        let hits = repo.advanced_query(&query).unwrap();
        assert_eq!(years(&hits), vec![(1644, "明安宗")]);
    }

    #[test]
    fn advanced_query_validates_year_bounds() {
        let (repo, _tmp) = open_fixture();
        let query = AdvancedQuery {
            year_from: Some(-5000),
            ..AdvancedQuery::default()
        };
        assert!(repo.advanced_query(&query).unwrap_err().is_validation());
    }

    #[test]
    fn open_rejects_database_without_chronology_table() {
        let file = NamedTempFile::new().unwrap();
        let conn = Connection::open(file.path()).unwrap();
        conn.execute_batch("CREATE TABLE facts (id INTEGER)").unwrap();
        drop(conn);

        let err = ChronologyRepository::open(ChronologyConfig::with_db_path(file.path())).unwrap_err();
        assert!(matches!(err, ChronologyError::Schema(_)), "{err}");
    }

    #[test]
    fn open_rejects_table_with_missing_columns() {
        let file = NamedTempFile::new().unwrap();
        let conn = Connection::open(file.path()).unwrap();
        conn.execute_batch("CREATE TABLE history_chronology (公元 INTEGER, 干支 TEXT)")
            .unwrap();
        drop(conn);

        let err = ChronologyRepository::open(ChronologyConfig::with_db_path(file.path())).unwrap_err();
        assert!(err.to_string().contains("帝号"), "{err}");
    }

    #[test]
    fn open_reports_missing_file_as_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChronologyConfig::with_db_path(dir.path().join("absent.db"));
        let err = ChronologyRepository::open(config).unwrap_err();
        assert!(matches!(err, ChronologyError::Storage(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn connection_is_read_only() {
        let (repo, _tmp) = open_fixture();
        let result = repo
            .conn
            .execute("DELETE FROM history_chronology", []);
        assert!(result.is_err());
        assert_eq!(repo.lookup_by_year(-221).unwrap().len(), 1);
    }

    #[test]
    fn close_releases_connection() {
        let (repo, _tmp) = open_fixture();
        assert_eq!(repo.config().year_max, 1912);
        repo.close().unwrap();
    }
}
