// src/table.rs
//! In-memory table the front-ends pass around: optional header row plus
//! string cells. Rows may be ragged; operations treat a missing cell as empty.
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use crate::config::consts::{BATCH_PREFIX, USERNAME_HEADER};
use crate::core::dates::{month_key, parse_date, parse_month};
use crate::error::{Error, Result};
use crate::metric::parse_metric;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// One slice of a table destined for its own file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// 1-based
    pub number: usize,
    pub file_name: String,
    pub table: Table,
}

impl Table {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Single `username` column, one row per name.
    pub fn from_usernames(names: &[String]) -> Self {
        Self {
            headers: Some(vec![s!(USERNAME_HEADER)]),
            rows: names.iter().map(|n| vec![n.clone()]).collect(),
        }
    }

    #[inline]
    pub fn row_count(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn header_count(&self) -> usize { self.headers.as_ref().map(|h| h.len()).unwrap_or(0) }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Widest of the header row and every data row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0).max(self.header_count())
    }

    /// Exact, case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .as_ref()?
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
    }

    /// Like `column_index`, but an error naming the column when it is missing.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::UnknownColumn(s!(name)))
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Every cell of one column, `""` where a row is too short.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r.get(col).map(String::as_str).unwrap_or(""))
    }

    /// Stable sort on the metric value of `col`.
    pub fn sort_by_metric(&mut self, col: usize, order: Order) {
        self.rows.sort_by(|a, b| {
            let x = parse_metric(a.get(col).map(String::as_str));
            let y = parse_metric(b.get(col).map(String::as_str));
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match order {
                Order::Ascending => ord,
                Order::Descending => ord.reverse(),
            }
        });
        logd!("Table: sorted {} rows by column {} ({:?})", self.rows.len(), col, order);
    }

    /// Keep the first row for each distinct value in `col`; returns how many went.
    pub fn dedup_by(&mut self, col: usize) -> usize {
        let before = self.rows.len();
        let mut seen: HashSet<String> = HashSet::new();
        self.rows.retain(|r| {
            let key = r.get(col).cloned().unwrap_or_default();
            seen.insert(key)
        });
        let removed = before - self.rows.len();
        logd!("Table: dedup on column {} removed {} row(s)", col, removed);
        removed
    }

    /// Keep rows whose `col` cell contains `needle`, ignoring case.
    /// An empty needle keeps everything. Returns how many rows went.
    pub fn filter_contains(&mut self, col: usize, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let needle = needle.to_lowercase();
        let before = self.rows.len();
        self.rows.retain(|r| r.get(col).is_some_and(|c| c.to_lowercase().contains(&needle)));
        let removed = before - self.rows.len();
        logd!("Table: filter column {} ~ '{}' removed {} row(s)", col, needle, removed);
        removed
    }

    /// Distinct `YYYY-MM` months in a date column, oldest first.
    /// Cells that don't read as dates are skipped.
    pub fn months(&self, col: usize) -> Vec<String> {
        self.column(col)
            .filter_map(parse_date)
            .map(month_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Keep rows whose `col` date falls in one of `months` (`YYYY-MM`).
    /// No months keeps everything; rows without a readable date go.
    pub fn filter_months<S: AsRef<str>>(&mut self, col: usize, months: &[S]) -> Result<usize> {
        if months.is_empty() {
            return Ok(0);
        }
        let wanted = months
            .iter()
            .map(|m| parse_month(m.as_ref()).ok_or_else(|| Error::InvalidMonth(s!(m.as_ref()))))
            .collect::<Result<HashSet<String>>>()?;

        let before = self.rows.len();
        self.rows.retain(|r| {
            r.get(col)
                .and_then(|c| parse_date(c))
                .is_some_and(|d| wanted.contains(&month_key(d)))
        });
        let removed = before - self.rows.len();
        logd!("Table: month filter {:?} on column {} removed {} row(s)", wanted, col, removed);
        Ok(removed)
    }

    /// Split into consecutive chunks of `size` rows, headers repeated in each.
    pub fn batches(&self, size: usize) -> Result<Vec<Batch>> {
        if size == 0 {
            return Err(Error::InvalidBatchSize);
        }
        Ok(self.rows
            .chunks(size)
            .enumerate()
            .map(|(i, chunk)| Batch {
                number: i + 1,
                file_name: batch_file_name(i + 1),
                table: Table { headers: self.headers.clone(), rows: chunk.to_vec() },
            })
            .collect())
    }
}

pub fn batch_file_name(number: usize) -> String {
    format!("{BATCH_PREFIX}{number}.csv")
}
