//! Symptom report aggregation logic.
//!
//! Turns the flat dated-record feed into the month-filtered, seven-wide
//! bucket windows the report calendar and chart render. All business rules
//! live here; the UI state layer only caches the results.

use crate::backend::storage::traits::{StoreError, SymptomStore};
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use shared::{
    BucketWindow, ChartBar, DateBucket, DatedRecord, MarkerColor, MonthOption, Symptom,
    SymptomMarker,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Buckets shown per window page.
pub const WINDOW_SIZE: usize = 7;

/// Default chart scale: display units added per marker.
pub const DEFAULT_UNIT_HEIGHT: u32 = 20;

/// Service producing date-bucketed symptom report data.
#[derive(Clone)]
pub struct SymptomGraphService {
    store: Arc<dyn SymptomStore>,
    unit_height: u32,
}

impl SymptomGraphService {
    pub fn new(store: Arc<dyn SymptomStore>) -> Self {
        Self {
            store,
            unit_height: DEFAULT_UNIT_HEIGHT,
        }
    }

    /// Override the per-marker bar height scale.
    pub fn with_unit_height(mut self, unit_height: u32) -> Self {
        self.unit_height = unit_height;
        self
    }

    /// Fetch the enrollee's records and bucket them by date.
    pub fn load_buckets(&self, enrollee_id: &str) -> Result<Vec<DateBucket>, StoreError> {
        let records = self.store.fetch_dated_records(enrollee_id)?;
        let buckets = self.ingest(&records);
        info!(
            "bucketed {} records into {} dates for {}",
            records.len(),
            buckets.len(),
            enrollee_id
        );
        Ok(buckets)
    }

    /// Group records by exact date into buckets, ascending by date.
    ///
    /// Marker order within a bucket is record arrival order. Records whose
    /// date does not parse as `YYYY-MM-DD` are dropped, never an error: the
    /// remote feed is not under this crate's control and one bad row must
    /// not take down the whole report.
    pub fn ingest(&self, records: &[DatedRecord]) -> Vec<DateBucket> {
        let mut by_date: BTreeMap<NaiveDate, Vec<SymptomMarker>> = BTreeMap::new();

        for record in records {
            let Some(date) = parse_record_date(&record.date) else {
                debug!("dropping record with unparseable date {:?}", record.date);
                continue;
            };
            by_date
                .entry(date)
                .or_default()
                .push(marker_for(record.symptom));
        }

        by_date
            .into_iter()
            .map(|(date, markers)| DateBucket { date, markers })
            .collect()
    }

    /// Distinct "Month Year" picklist options across all buckets, ascending.
    pub fn month_options(&self, buckets: &[DateBucket]) -> Vec<MonthOption> {
        let mut options: Vec<MonthOption> = Vec::new();
        for bucket in buckets {
            let month = bucket.date.month();
            let year = bucket.date.year();
            if options.iter().any(|o| o.month == month && o.year == year) {
                continue;
            }
            options.push(MonthOption {
                label: format!("{} {}", month_name(month), year),
                month,
                year,
            });
        }
        options
    }

    /// Retain only buckets falling in the given month/year.
    ///
    /// An empty result is a valid "no data" state, not an error.
    pub fn filter_by_month(&self, buckets: &[DateBucket], month: u32, year: i32) -> Vec<DateBucket> {
        buckets
            .iter()
            .filter(|b| b.date.month() == month && b.date.year() == year)
            .cloned()
            .collect()
    }

    /// Up to [`WINDOW_SIZE`] consecutive buckets starting at `cursor`.
    ///
    /// The cursor is clamped into the bucket list; `has_prev`/`has_next`
    /// drive the pager arrows.
    pub fn window_at(&self, buckets: &[DateBucket], cursor: usize) -> BucketWindow {
        let total = buckets.len();
        let cursor = if total == 0 { 0 } else { cursor.min(total - 1) };
        let end = (cursor + WINDOW_SIZE).min(total);

        BucketWindow {
            buckets: buckets[cursor..end].to_vec(),
            cursor,
            has_prev: cursor > 0,
            has_next: cursor + WINDOW_SIZE < total,
        }
    }

    /// One chart bar per windowed bucket, height proportional to markers.
    pub fn chart_bars(&self, window: &BucketWindow) -> Vec<ChartBar> {
        window
            .buckets
            .iter()
            .map(|bucket| ChartBar {
                label: bucket.date.format("%d %b").to_string(),
                height: bucket.markers.len() as u32 * self.unit_height,
                markers: bucket.markers.clone(),
            })
            .collect()
    }
}

/// Parse a record date, `None` when the string is not a calendar date.
fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Marker colour assigned to each symptom on the report calendar.
pub fn marker_for(symptom: Symptom) -> SymptomMarker {
    let color = match symptom {
        Symptom::Itchiness => MarkerColor::DarkYellow,
        Symptom::Redness => MarkerColor::Red,
        Symptom::Pain => MarkerColor::Violet,
        Symptom::Pustules => MarkerColor::Green,
        Symptom::Fatigue => MarkerColor::Blue,
        Symptom::Temperature => MarkerColor::DarkRed,
        Symptom::Mood => MarkerColor::Yellow,
    };
    SymptomMarker { symptom, color }
}

/// Human-readable month name for picklist labels.
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}
