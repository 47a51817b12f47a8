//! Domain-to-display mapping helpers.
//!
//! The render layer works in CSS-ish terms (hex colours, pixel heights);
//! everything it needs is derived here from the domain types so templates
//! stay dumb.

use shared::{ChartBar, DateBucket, MarkerColor, SymptomMarker};

/// Background colour of a selected recent-activity button.
pub const SELECTED_BUTTON_COLOR: &str = "#C6AA76";
/// Background colour of an unselected recent-activity button.
pub const UNSELECTED_BUTTON_COLOR: &str = "#FFFFFF";

/// Hex colour for a report marker.
pub fn marker_color_hex(color: MarkerColor) -> &'static str {
    match color {
        MarkerColor::Yellow => "#F4C430",
        MarkerColor::DarkYellow => "#B8860B",
        MarkerColor::Red => "#D84B4B",
        MarkerColor::DarkRed => "#8B1A1A",
        MarkerColor::Violet => "#7F5CA8",
        MarkerColor::Green => "#4E9A51",
        MarkerColor::Blue => "#3F6FB5",
    }
}

/// One rendered row of the report calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDisplayRow {
    /// Short date, e.g. "05 Mar"
    pub date_label: String,
    /// Marker colours in arrival order, as hex strings
    pub marker_colors: Vec<&'static str>,
}

pub fn bucket_to_display_row(bucket: &DateBucket) -> BucketDisplayRow {
    BucketDisplayRow {
        date_label: bucket.date.format("%d %b").to_string(),
        marker_colors: marker_hexes(&bucket.markers),
    }
}

/// CSS height for a chart bar, e.g. "40px".
pub fn bar_height_px(bar: &ChartBar) -> String {
    format!("{}px", bar.height)
}

/// Button background for a recent-activity option given its selection state.
pub fn recent_activity_button_color(selected: bool) -> &'static str {
    if selected {
        SELECTED_BUTTON_COLOR
    } else {
        UNSELECTED_BUTTON_COLOR
    }
}

fn marker_hexes(markers: &[SymptomMarker]) -> Vec<&'static str> {
    markers.iter().map(|m| marker_color_hex(m.color)).collect()
}
