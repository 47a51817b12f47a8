use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Notification topic a patient can subscribe to.
///
/// Each category is fetched and saved independently against the remote
/// notification-settings object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    /// Treatment and prescription reminders
    Treatment,
    /// Symptom tracker reminders
    Symptom,
    /// Questionnaire reminders
    Questionnaire,
    /// Challenge updates
    Challenge,
    /// New article / information centre content
    NewContent,
    /// Community activity
    Community,
}

impl CategoryType {
    /// All categories, in the order the settings panel presents them.
    pub const ALL: [CategoryType; 6] = [
        CategoryType::Treatment,
        CategoryType::Symptom,
        CategoryType::Questionnaire,
        CategoryType::Challenge,
        CategoryType::NewContent,
        CategoryType::Community,
    ];

    /// Human-readable name used in panel headings and save requests.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::Treatment => "Treatment Reminders",
            CategoryType::Symptom => "Symptom Tracker",
            CategoryType::Questionnaire => "Questionnaires",
            CategoryType::Challenge => "Challenges",
            CategoryType::NewContent => "New Content Updates",
            CategoryType::Community => "Community",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Notification delivery mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    Email,
    Sms,
    /// In-app ("insite") notification
    Insite,
    Phone,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Email, Channel::Sms, Channel::Insite, Channel::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "SMS",
            Channel::Insite => "Insite Notification",
            Channel::Phone => "Phone",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-category channel flags as fetched from the remote settings object.
///
/// The remote schema always carries all four flags; channels a category does
/// not support are simply ignored on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub email: bool,
    pub sms: bool,
    pub insite: bool,
    pub phone: bool,
}

impl ChannelRecord {
    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::Email => self.email,
            Channel::Sms => self.sms,
            Channel::Insite => self.insite,
            Channel::Phone => self.phone,
        }
    }
}

/// One category's save payload.
///
/// Only the channels the category actually supports are present; a missing
/// key means "not applicable", not "false".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelUpdateRequest {
    pub category: CategoryType,
    pub channels: BTreeMap<Channel, bool>,
}

/// Symptom a patient can log. Fixed set of seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    Itchiness,
    Redness,
    Pain,
    Pustules,
    Fatigue,
    Temperature,
    Mood,
}

impl Symptom {
    pub const ALL: [Symptom; 7] = [
        Symptom::Itchiness,
        Symptom::Redness,
        Symptom::Pain,
        Symptom::Pustules,
        Symptom::Fatigue,
        Symptom::Temperature,
        Symptom::Mood,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Itchiness => "Itchiness",
            Symptom::Redness => "Redness",
            Symptom::Pain => "Pain",
            Symptom::Pustules => "Pustules",
            Symptom::Fatigue => "Fatigue",
            Symptom::Temperature => "Temperature",
            Symptom::Mood => "Mood",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Marker colour shown on the report calendar for a logged symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerColor {
    Yellow,
    DarkYellow,
    Red,
    DarkRed,
    Violet,
    Green,
    Blue,
}

/// One symptom occurrence rendered as a coloured marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomMarker {
    pub symptom: Symptom,
    pub color: MarkerColor,
}

/// Raw dated symptom record as returned by the remote fetch.
///
/// The date stays a string here on purpose: the remote feed has been observed
/// to contain unparseable dates, and those rows are dropped during ingestion
/// rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedRecord {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    pub symptom: Symptom,
}

/// All symptom records sharing a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBucket {
    pub date: NaiveDate,
    /// Markers in record arrival order
    pub markers: Vec<SymptomMarker>,
}

/// A bounded slice of buckets for paginated display (at most 7 at a time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketWindow {
    pub buckets: Vec<DateBucket>,
    /// Index of the first bucket in the slice within the filtered list
    pub cursor: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// One bar of the symptom report chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Short date label, e.g. "05 Mar"
    pub label: String,
    /// Bar height in display units, proportional to the marker count
    pub height: u32,
    pub markers: Vec<SymptomMarker>,
}

/// A month/year choice for the report month picklist, e.g. "March 2024".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOption {
    pub label: String,
    /// 1-12
    pub month: u32,
    pub year: i32,
}
