// src/analytics.rs
//! Headline numbers for a creator/video export.
//!
//! Column names vary between export flavours ("Video Views", "VV", "views"...),
//! so columns are found by [`find_column`]: exact case-insensitive match
//! first, then substring. The table shape decides how counts are derived:
//!
//! - `Granular`: one row per video (video id + creator columns).
//! - `Aggregated`: one row per creator with a video-count column.
//! - `Simple`: anything else; every row counts as one video.
use std::collections::{HashMap, HashSet};

use crate::core::sanitize::{normalize_ws, trim_ws};
use crate::metric::parse_metric;
use crate::table::Table;

const VIDEO_COUNT: &[&str] = &["video count", "videos_count"];
const VIDEO_ID: &[&str] = &["video id", "item id"];
const VIEWS: &[&str] = &["video views", "vv", "views", "view count"];
const VIEWS_LOOSE: &[&str] = &["view"];
const GMV: &[&str] = &[
    "gross merchandise value (video) ($)", "gmv", "gross merchandise value",
    "gross mer", "revenue", "sales", "gpm",
];
const CREATOR: &[&str] = &["creator name", "creator", "username", "user"];
const LIKES: &[&str] = &["likes", "like"];
const ORDERS: &[&str] = &["orders", "order", "items sold"];

pub const MANY_VIDEOS: f64 = 10.0;
pub const SOME_VIDEOS: f64 = 3.0;
pub const HIGH_GMV: f64 = 1_000.0;
pub const LOW_GMV: f64 = 100.0;
pub const VIRAL_VIEWS: f64 = 10_000.0;

/// First header equal to any candidate (ignoring case), else the first header
/// containing one.
pub fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| normalize_ws(h).to_lowercase()).collect();
    let cands: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    lowered
        .iter()
        .position(|h| cands.iter().any(|c| c == h))
        .or_else(|| lowered.iter().position(|h| cands.iter().any(|c| h.contains(c.as_str()))))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Granular,
    Aggregated,
    Simple,
}

/// Which header each role resolved to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    pub video_count: Option<usize>,
    pub video_id: Option<usize>,
    pub views: Option<usize>,
    pub gmv: Option<usize>,
    pub creator: Option<usize>,
    pub likes: Option<usize>,
    pub orders: Option<usize>,
}

impl Columns {
    pub fn detect(headers: &[String]) -> Self {
        Self {
            video_count: find_column(headers, VIDEO_COUNT),
            video_id: find_column(headers, VIDEO_ID),
            views: find_column(headers, VIEWS).or_else(|| find_column(headers, VIEWS_LOOSE)),
            gmv: find_column(headers, GMV),
            creator: find_column(headers, CREATOR),
            likes: find_column(headers, LIKES),
            orders: find_column(headers, ORDERS),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.video_id.is_some() && self.creator.is_some() {
            Mode::Granular
        } else if self.video_count.is_some() {
            Mode::Aggregated
        } else {
            Mode::Simple
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub mode: Mode,
    pub columns: Columns,
    pub total_videos: u64,
    pub creators_with_some_videos: usize,
    pub creators_with_many_videos: usize,
    /// `None` when there is no GMV column
    pub creators_high_gmv: Option<usize>,
    pub creators_low_gmv: Option<usize>,
    pub total_likes: Option<u64>,
    pub total_orders: Option<u64>,
    pub viral_videos: Option<usize>,
}

/// Per-creator accumulation used by the granular and simple modes.
#[derive(Default)]
struct CreatorAcc<'a> {
    videos: HashSet<&'a str>,
    rows: usize,
    gmv: f64,
}

/// Empty cells are missing values, not a value of their own.
fn is_blank(cell: &str) -> bool {
    trim_ws(cell).is_empty()
}

fn metric_sum(table: &Table, col: Option<usize>) -> Option<f64> {
    col.map(|c| table.column(c).map(parse_metric).sum())
}

impl Summary {
    pub fn compute(table: &Table) -> Self {
        let headers = table.headers.clone().unwrap_or_default();
        let columns = Columns::detect(&headers);
        let mode = columns.mode();
        logd!("Analytics: mode={:?} columns={:?}", mode, columns);

        let total_likes = metric_sum(table, columns.likes).map(|v| v as u64);
        let total_orders = metric_sum(table, columns.orders).map(|v| v as u64);
        let viral_videos = columns.views.map(|c| {
            table.column(c).filter(|v| parse_metric(*v) >= VIRAL_VIEWS).count()
        });

        let mut out = Summary {
            mode,
            columns: columns.clone(),
            total_videos: 0,
            creators_with_some_videos: 0,
            creators_with_many_videos: 0,
            creators_high_gmv: None,
            creators_low_gmv: None,
            total_likes,
            total_orders,
            viral_videos,
        };

        match (mode, columns.creator) {
            (Mode::Aggregated, _) => {
                let vc = columns.video_count.unwrap_or_default();
                let counts: Vec<f64> = table.column(vc)
                    .map(|v| v.trim().parse::<f64>().ok().filter(|n| !n.is_nan()).unwrap_or(0.0))
                    .collect();
                out.total_videos = counts.iter().sum::<f64>() as u64;
                out.creators_with_some_videos = counts.iter().filter(|n| **n >= SOME_VIDEOS).count();
                out.creators_with_many_videos = counts.iter().filter(|n| **n >= MANY_VIDEOS).count();
                if let Some(g) = columns.gmv {
                    let gmv: Vec<f64> = table.column(g).map(parse_metric).collect();
                    out.creators_high_gmv = Some(gmv.iter().filter(|v| **v >= HIGH_GMV).count());
                    out.creators_low_gmv = Some(gmv.iter().filter(|v| **v >= LOW_GMV).count());
                }
            }
            (Mode::Granular, Some(creator)) | (Mode::Simple, Some(creator)) => {
                let by_creator = group_by_creator(table, creator, columns.video_id, columns.gmv);
                let per_creator = |acc: &CreatorAcc| {
                    if mode == Mode::Granular { acc.videos.len() as f64 } else { acc.rows as f64 }
                };
                out.total_videos = match (mode, columns.video_id) {
                    (Mode::Granular, Some(id)) => {
                        table.column(id).filter(|v| !is_blank(v)).collect::<HashSet<_>>().len() as u64
                    }
                    _ => table.row_count() as u64,
                };
                out.creators_with_some_videos =
                    by_creator.values().filter(|a| per_creator(*a) >= SOME_VIDEOS).count();
                out.creators_with_many_videos =
                    by_creator.values().filter(|a| per_creator(*a) >= MANY_VIDEOS).count();
                if columns.gmv.is_some() {
                    out.creators_high_gmv = Some(by_creator.values().filter(|a| a.gmv >= HIGH_GMV).count());
                    out.creators_low_gmv = Some(by_creator.values().filter(|a| a.gmv >= LOW_GMV).count());
                }
            }
            _ => {
                out.total_videos = table.row_count() as u64;
            }
        }

        logf!("Analytics: {:?} mode, {} video(s)", out.mode, out.total_videos);
        out
    }
}

fn group_by_creator<'a>(
    table: &'a Table,
    creator: usize,
    video_id: Option<usize>,
    gmv: Option<usize>,
) -> HashMap<&'a str, CreatorAcc<'a>> {
    let mut by_creator: HashMap<&str, CreatorAcc> = HashMap::new();
    for row in &table.rows {
        let cell = |c: usize| row.get(c).map(String::as_str).unwrap_or("");
        let name = cell(creator);
        if is_blank(name) { continue; }
        let acc = by_creator.entry(name).or_default();
        acc.rows += 1;
        if let Some(id) = video_id.map(cell).filter(|v| !is_blank(v)) {
            acc.videos.insert(id);
        }
        if let Some(g) = gmv {
            acc.gmv += parse_metric(cell(g));
        }
    }
    by_creator
}
