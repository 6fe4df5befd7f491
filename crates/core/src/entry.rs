//! The chronology record and the fixed column set it is read from.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Storage table holding the chronology. Provisioned externally.
pub const TABLE: &str = "history_chronology";

/// One column of the `history_chronology` table.
///
/// Column names are the only identifiers ever interpolated into generated SQL,
/// and they come exclusively from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    YearAd,
    Ganzhi,
    Period,
    Regime,
    EmperorTitle,
    EmperorName,
    ReignTitle,
    RegnalYear,
}

impl Column {
    /// All columns in display (and `SELECT`) order.
    pub const ALL: [Column; 8] = [
        Column::YearAd,
        Column::Ganzhi,
        Column::Period,
        Column::Regime,
        Column::EmperorTitle,
        Column::EmperorName,
        Column::ReignTitle,
        Column::RegnalYear,
    ];

    /// The six text columns searched by free-text queries.
    pub const TEXT: [Column; 6] = [
        Column::Ganzhi,
        Column::EmperorTitle,
        Column::EmperorName,
        Column::ReignTitle,
        Column::Period,
        Column::Regime,
    ];

    /// Column name in the storage schema.
    pub const fn sql_name(self) -> &'static str {
        match self {
            Column::YearAd => "公元",
            Column::Ganzhi => "干支",
            Column::Period => "时期",
            Column::Regime => "政权",
            Column::EmperorTitle => "帝号",
            Column::EmperorName => "帝名",
            Column::ReignTitle => "年号",
            Column::RegnalYear => "年份",
        }
    }

    /// Table header shown to readers. Differs from the storage name only for
    /// the regnal year.
    pub const fn label(self) -> &'static str {
        match self {
            Column::RegnalYear => "在位年",
            other => other.sql_name(),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Column::YearAd => "公元：公元年份",
            Column::Ganzhi => "干支：甲子历纪年",
            Column::Period => "时期：朝代",
            Column::Regime => "政权：并立时代划分",
            Column::EmperorTitle => "帝号",
            Column::EmperorName => "帝名",
            Column::ReignTitle => "年号",
            Column::RegnalYear => "在位年：年号下的序号",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One year of one reign, as stored in the chronology.
///
/// Entries are only ever built from storage rows and never change after that.
/// Two entries are equal when all their fields are equal; there is no other
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    year_ad: i64,
    ganzhi: String,
    period: String,
    regime: String,
    emperor_title: String,
    emperor_name: String,
    reign_title: String,
    regnal_year: Option<i64>,
}

/// Fields used to drop duplicate hits across free-text passes.
///
/// Two entries differing only in `emperor_name`, `period`, `regime` or
/// `regnal_year` share a key and are treated as the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalKey {
    pub year_ad: i64,
    pub ganzhi: String,
    pub emperor_title: String,
    pub reign_title: String,
}

impl HistoryEntry {
    /// Map a row selected with [`Column::ALL`] order.
    ///
    /// NULL text cells become empty strings; a NULL regnal year stays absent.
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            year_ad: row.get(0)?,
            ganzhi: text_cell(row, 1)?,
            period: text_cell(row, 2)?,
            regime: text_cell(row, 3)?,
            emperor_title: text_cell(row, 4)?,
            emperor_name: text_cell(row, 5)?,
            reign_title: text_cell(row, 6)?,
            regnal_year: row.get(7)?,
        })
    }

    pub fn year_ad(&self) -> i64 {
        self.year_ad
    }

    pub fn ganzhi(&self) -> &str {
        &self.ganzhi
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn regime(&self) -> &str {
        &self.regime
    }

    pub fn emperor_title(&self) -> &str {
        &self.emperor_title
    }

    pub fn emperor_name(&self) -> &str {
        &self.emperor_name
    }

    pub fn reign_title(&self) -> &str {
        &self.reign_title
    }

    pub fn regnal_year(&self) -> Option<i64> {
        self.regnal_year
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey {
            year_ad: self.year_ad,
            ganzhi: self.ganzhi.clone(),
            emperor_title: self.emperor_title.clone(),
            reign_title: self.reign_title.clone(),
        }
    }

    /// Display cells in [`Column::ALL`] order. An absent regnal year is an
    /// empty cell.
    pub fn cells(&self) -> [String; 8] {
        [
            self.year_ad.to_string(),
            self.ganzhi.clone(),
            self.period.clone(),
            self.regime.clone(),
            self.emperor_title.clone(),
            self.emperor_name.clone(),
            self.reign_title.clone(),
            self.regnal_year.map(|y| y.to_string()).unwrap_or_default(),
        ]
    }
}

/// Tab-separated cells, ready for pasting into a spreadsheet.
impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells().join("\t"))
    }
}

fn text_cell(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

#[cfg(test)]
impl HistoryEntry {
    pub(crate) fn for_test(
        year_ad: i64,
        ganzhi: &str,
        period: &str,
        emperor_title: &str,
        reign_title: &str,
        regnal_year: Option<i64>,
    ) -> Self {
        Self {
            year_ad,
            ganzhi: ganzhi.to_string(),
            period: period.to_string(),
            regime: String::new(),
            emperor_title: emperor_title.to_string(),
            emperor_name: String::new(),
            reign_title: reign_title.to_string(),
            regnal_year,
        }
    }
}
