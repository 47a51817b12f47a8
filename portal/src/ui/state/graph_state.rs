//! # Symptom Graph State
//!
//! View state for the month-by-month symptom report: selected month/year,
//! the current seven-bucket window, and the chart bars derived from it.
//! All aggregation rules live in the graph service; this module caches its
//! output and handles month/pager navigation.

use crate::backend::domain::symptom_graph_service::WINDOW_SIZE;
use crate::backend::Backend;
use crate::ui::state::session::SessionContext;
use chrono::{Datelike, Local};
use log::info;
use shared::{BucketWindow, ChartBar, DateBucket, MonthOption};

/// State behind the symptom report calendar and chart.
#[derive(Debug)]
pub struct SymptomGraphState {
    /// All buckets for the enrollee, every month
    buckets: Vec<DateBucket>,
    /// Buckets for the currently selected month, ascending by date
    filtered: Vec<DateBucket>,
    /// Month picklist options derived from the data
    pub month_options: Vec<MonthOption>,
    /// Currently selected month (1-12)
    pub selected_month: u32,
    /// Currently selected year
    pub selected_year: i32,
    /// Index of the first bucket in the visible window
    pub cursor: usize,
    /// The visible window, at most seven buckets
    pub window: BucketWindow,
    /// Chart bars for the visible window
    pub bars: Vec<ChartBar>,
    /// Whether the selected month has anything to show; drives the
    /// "no data" display state
    pub has_data: bool,
    /// Whether the record fetch is in flight
    pub loading: bool,
}

impl SymptomGraphState {
    /// New state focused on the current month.
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            buckets: Vec::new(),
            filtered: Vec::new(),
            month_options: Vec::new(),
            selected_month: now.month(),
            selected_year: now.year(),
            cursor: 0,
            window: BucketWindow {
                buckets: Vec::new(),
                cursor: 0,
                has_prev: false,
                has_next: false,
            },
            bars: Vec::new(),
            has_data: false,
            loading: false,
        }
    }

    /// Fetch and bucket the enrollee's records, then derive the view for
    /// the selected month. A fetch failure goes to the session error sink
    /// and leaves the state empty ("no data"), not broken.
    pub fn load(&mut self, backend: &Backend, session: &mut SessionContext, enrollee_id: &str) {
        self.loading = true;
        match backend.symptom_graph_service.load_buckets(enrollee_id) {
            Ok(buckets) => {
                self.month_options = backend.symptom_graph_service.month_options(&buckets);
                self.buckets = buckets;
            }
            Err(err) => {
                session.report_error(err.to_string());
                self.buckets.clear();
                self.month_options.clear();
            }
        }
        self.cursor = 0;
        self.refresh(backend);
        self.loading = false;
    }

    /// Change the selected month and rebuild the window from its start.
    pub fn select_month(&mut self, backend: &Backend, month: u32, year: i32) {
        info!("report month changed to {}/{}", month, year);
        self.selected_month = month;
        self.selected_year = year;
        self.cursor = 0;
        self.refresh(backend);
    }

    /// Page the window back by seven buckets.
    pub fn show_previous_window(&mut self, backend: &Backend) {
        self.cursor = self.cursor.saturating_sub(WINDOW_SIZE);
        self.refresh(backend);
    }

    /// Page the window forward by seven buckets, if more exist.
    pub fn show_next_window(&mut self, backend: &Backend) {
        if self.window.has_next {
            self.cursor += WINDOW_SIZE;
            self.refresh(backend);
        }
    }

    fn refresh(&mut self, backend: &Backend) {
        let service = &backend.symptom_graph_service;
        self.filtered =
            service.filter_by_month(&self.buckets, self.selected_month, self.selected_year);
        self.window = service.window_at(&self.filtered, self.cursor);
        self.cursor = self.window.cursor;
        self.bars = service.chart_bars(&self.window);
        self.has_data = !self.window.buckets.is_empty();
    }
}

impl Default for SymptomGraphState {
    fn default() -> Self {
        Self::new()
    }
}
