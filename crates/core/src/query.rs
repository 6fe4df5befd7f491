//! SQL predicates over the chronology table.
//!
//! Only column names from [`Column`] are written into SQL text. Every value
//! derived from a request, including years, is a bound parameter.

use rusqlite::types::Value as SqlValue;
use serde::{Deserialize, Serialize};

use crate::entry::{Column, TABLE};
use crate::keyword::split_keyword;
use crate::script::{expand_variants, ScriptConverter, VariantSet};

/// Multi-field search request. Every filter is optional; blank text filters
/// count as absent. Unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvancedQuery {
    /// Inclusive lower bound on the AD year.
    pub year_from: Option<i64>,
    /// Inclusive upper bound on the AD year.
    pub year_to: Option<i64>,
    pub ganzhi: Option<String>,
    pub period: Option<String>,
    pub regime: Option<String>,
    pub emperor_title: Option<String>,
    pub emperor_name: Option<String>,
    pub reign_title: Option<String>,
}

impl AdvancedQuery {
    /// Supplied text filters, trimmed, in column order.
    pub fn text_filters(&self) -> Vec<(Column, &str)> {
        [
            (Column::Ganzhi, &self.ganzhi),
            (Column::Period, &self.period),
            (Column::Regime, &self.regime),
            (Column::EmperorTitle, &self.emperor_title),
            (Column::EmperorName, &self.emperor_name),
            (Column::ReignTitle, &self.reign_title),
        ]
        .into_iter()
        .filter_map(|(column, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then_some((column, value))
        })
        .collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.year_from.is_none() && self.year_to.is_none() && self.text_filters().is_empty()
    }
}

/// Result ordering. Absent regnal years sort before present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `year_ad`, then `regnal_year`.
    YearThenRegnal,
    /// `regnal_year` only; used when the year is fixed.
    Regnal,
}

impl Order {
    fn sql(self) -> String {
        match self {
            Order::YearThenRegnal => format!(
                "{}, {}",
                quoted(Column::YearAd),
                quoted(Column::RegnalYear)
            ),
            Order::Regnal => quoted(Column::RegnalYear),
        }
    }
}

/// A `WHERE` clause and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    clause: String,
    params: Vec<SqlValue>,
}

impl Predicate {
    /// Matches every row.
    pub fn all() -> Self {
        Self {
            clause: "1".to_string(),
            params: Vec::new(),
        }
    }

    pub fn year_equals(year: i64) -> Self {
        Self {
            clause: format!("{} = ?", quoted(Column::YearAd)),
            params: vec![SqlValue::Integer(year)],
        }
    }

    /// Any text column contains any of the variants.
    pub fn any_text_contains(variants: &VariantSet) -> Self {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        for term in variants.terms() {
            for column in Column::TEXT {
                conditions.push(contains(column));
                params.push(contains_pattern(term));
            }
        }
        Self {
            clause: conditions.join(" OR "),
            params,
        }
    }

    /// Year range AND one OR-group per supplied text field. Each field value
    /// is split into its compound parts and every part is expanded into its
    /// script variants.
    pub fn advanced<C>(query: &AdvancedQuery, converter: &C) -> Self
    where
        C: ScriptConverter + ?Sized,
    {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(from) = query.year_from {
            conditions.push(format!("{} >= ?", quoted(Column::YearAd)));
            params.push(SqlValue::Integer(from));
        }
        if let Some(to) = query.year_to {
            conditions.push(format!("{} <= ?", quoted(Column::YearAd)));
            params.push(SqlValue::Integer(to));
        }

        for (column, value) in query.text_filters() {
            let mut group = Vec::new();
            for part in split_keyword(value) {
                let variants = expand_variants(converter, part);
                for term in variants.terms() {
                    group.push(contains(column));
                    params.push(contains_pattern(term));
                }
            }
            conditions.push(format!("({})", group.join(" OR ")));
        }

        if conditions.is_empty() {
            return Self::all();
        }
        Self {
            clause: conditions.join(" AND "),
            params,
        }
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Full `SELECT` of all columns in [`Column::ALL`] order.
    pub fn select_sql(&self, order: Order) -> String {
        let columns: Vec<String> = Column::ALL.into_iter().map(quoted).collect();
        format!(
            "SELECT {} FROM {TABLE} WHERE {} ORDER BY {}",
            columns.join(", "),
            self.clause,
            order.sql()
        )
    }
}

fn quoted(column: Column) -> String {
    format!("\"{}\"", column.sql_name())
}

fn contains(column: Column) -> String {
    format!("{} LIKE ? ESCAPE '\\'", quoted(column))
}

fn contains_pattern(term: &str) -> SqlValue {
    SqlValue::Text(format!("%{}%", escape_like(term)))
}

/// Make `%`, `_` and the escape character itself match literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::tests::FailingConverter;
    use crate::script::TableConverter;
    use std::collections::BTreeSet;

    fn text(value: &SqlValue) -> &str {
        match value {
            SqlValue::Text(s) => s,
            other => panic!("expected text parameter, got {other:?}"),
        }
    }

    #[test]
    fn escape_like_escapes_wildcards_and_backslash() {
        assert_eq!(escape_like("秦始皇"), "秦始皇");
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
    }

    #[test]
    fn free_text_predicate_covers_every_text_column_per_variant() {
        let variants = VariantSet::Converted(BTreeSet::from([
            "东周".to_string(),
            "東周".to_string(),
        ]));
        let predicate = Predicate::any_text_contains(&variants);

        assert_eq!(predicate.params().len(), 2 * Column::TEXT.len());
        assert_eq!(predicate.clause().matches(" OR ").count(), 11);
        for column in Column::TEXT {
            assert!(predicate.clause().contains(column.sql_name()));
        }
        assert_eq!(text(&predicate.params()[0]), "%东周%");
        assert_eq!(text(&predicate.params()[6]), "%東周%");
    }

    #[test]
    fn user_text_never_reaches_sql_text() {
        let query = AdvancedQuery {
            regime: Some("x' OR 1=1 --".to_string()),
            ..AdvancedQuery::default()
        };
        let predicate = Predicate::advanced(&query, &TableConverter::new());
        assert!(!predicate.clause().contains("1=1"));
        assert_eq!(text(&predicate.params()[0]), "%x' OR 1=1 --%");
    }

    #[test]
    fn deserializing_rejects_misspelled_fields() {
        let query: AdvancedQuery = serde_json::from_str(r#"{"period": "唐"}"#).unwrap();
        assert_eq!(query.period.as_deref(), Some("唐"));

        let err = serde_json::from_str::<AdvancedQuery>(r#"{"perod": "唐"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `perod`"), "{err}");
    }

    #[test]
    fn unfiltered_advanced_query_matches_everything() {
        let query = AdvancedQuery {
            period: Some("   ".to_string()),
            ..AdvancedQuery::default()
        };
        assert!(query.is_unfiltered());
        assert_eq!(Predicate::advanced(&query, &TableConverter::new()), Predicate::all());
    }

    #[test]
    fn advanced_query_ands_years_and_field_groups() {
        let query = AdvancedQuery {
            year_from: Some(-770),
            year_to: Some(-476),
            period: Some("东周（春秋）".to_string()),
            emperor_title: Some(" 周平王 ".to_string()),
            ..AdvancedQuery::default()
        };
        let predicate = Predicate::advanced(&query, &TableConverter::new());

        assert_eq!(
            predicate.clause(),
            "\"公元\" >= ? AND \"公元\" <= ? AND \
             (\"时期\" LIKE ? ESCAPE '\\' OR \"时期\" LIKE ? ESCAPE '\\' OR \"时期\" LIKE ? ESCAPE '\\') AND \
             (\"帝号\" LIKE ? ESCAPE '\\')"
        );
        let params: Vec<&SqlValue> = predicate.params().iter().collect();
        assert_eq!(params[0], &SqlValue::Integer(-770));
        assert_eq!(params[1], &SqlValue::Integer(-476));
        let terms: Vec<&str> = params[2..].iter().map(|p| text(p)).collect();
        assert_eq!(terms, vec!["%东周%", "%東周%", "%春秋%", "%周平王%"]);
    }

    #[test]
    fn advanced_query_with_failing_converter_still_filters() {
        let query = AdvancedQuery {
            reign_title: Some("貞觀".to_string()),
            ..AdvancedQuery::default()
        };
        let predicate = Predicate::advanced(&query, &FailingConverter);
        assert_eq!(predicate.params().len(), 1);
        assert_eq!(text(&predicate.params()[0]), "%貞觀%");
    }

    #[test]
    fn select_lists_columns_explicitly_and_orders() {
        let sql = Predicate::year_equals(-221).select_sql(Order::Regnal);
        assert!(sql.starts_with("SELECT \"公元\", \"干支\", \"时期\", \"政权\", \"帝号\", \"帝名\", \"年号\", \"年份\" FROM history_chronology"));
        assert!(sql.ends_with("WHERE \"公元\" = ? ORDER BY \"年份\""));

        let sql = Predicate::all().select_sql(Order::YearThenRegnal);
        assert!(sql.ends_with("WHERE 1 ORDER BY \"公元\", \"年份\""));
    }
}
